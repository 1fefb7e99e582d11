use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(PartialEq, Default, Copy, Clone, Debug)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Search,
    Tel,
}

impl InputType {
    fn as_type(&self) -> AttrValue {
        match self {
            Self::Text => "text".into(),
            Self::Password => "password".into(),
            Self::Search => "search".into(),
            Self::Tel => "tel".into(),
        }
    }
}

#[derive(PartialEq, Properties, Default, Debug)]
pub struct Props {
    pub id: String,
    pub name: String,
    #[prop_or_default]
    pub value: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub input_type: InputType,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub required: bool,
    pub on_change: Callback<String>,
}

/// Controlled text input emitting on every keystroke.
#[function_component(InputText)]
pub fn input_text(props: &Props) -> Html {
    let callback = props.on_change.clone();
    let on_input = Callback::from(move |event: InputEvent| {
        let Some(target) = event.target() else {
            return;
        };
        callback.emit(target.unchecked_into::<HtmlInputElement>().value());
    });
    html! {
        <input
            id={props.id.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            type={props.input_type.as_type()}
            placeholder={props.placeholder.clone()}
            class={props.class.clone()}
            required={props.required}
            oninput={on_input} />
    }
}
