use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(PartialEq, Properties, Default)]
pub struct Props {
    pub name: String,
    pub label: String,
    pub checked: bool,
    pub on_change: Callback<bool>,
}

#[function_component(ToggleSwitch)]
pub fn toggle_switch(props: &Props) -> Html {
    let callback = props.on_change.clone();
    let on_change = Callback::from(move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        callback.emit(target.unchecked_into::<HtmlInputElement>().checked());
    });
    html! {
        <div class="form-check form-switch d-flex justify-content-between align-items-center ps-0">
            <label class="form-check-label text-body-secondary" for={props.name.clone()}>{props.label.clone()}</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                class="form-check-input ms-3"
                type="checkbox"
                role="switch"
                checked={props.checked}
                onchange={on_change} />
        </div>
    }
}
