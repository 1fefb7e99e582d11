use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// One `<option>`: submitted value and visible label.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    #[prop_or_default]
    pub id: String,
    #[prop_or_default]
    pub name: String,
    #[prop_or_else(|| classes!("form-select", "form-select-sm"))]
    pub class: Classes,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub selected: Option<String>,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let on_change = {
        let on_change_cb = props.on_change.clone();
        Callback::from(move |event: Event| {
            let Some(target) = event.target() else {
                return;
            };
            on_change_cb.emit(target.unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let options_html = props.options.iter().map(|option| {
        let is_selected = props.selected.as_deref() == Some(option.value.as_str());
        html! {
            <option value={option.value.clone()} selected={is_selected}>
                {&option.label}
            </option>
        }
    });

    html! {
        <select
            id={props.id.clone()}
            name={props.name.clone()}
            class={props.class.clone()}
            onchange={on_change}>
            { for options_html }
        </select>
    }
}
