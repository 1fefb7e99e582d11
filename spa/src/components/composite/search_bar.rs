use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub value: String,
    pub placeholder: String,
    pub on_change: Callback<String>,
}

/// Live search box, the listing is recomputed on every change.
#[function_component(SearchBar)]
pub fn search_bar(props: &Props) -> Html {
    html! {
        <div class="mb-4">
            <InputText
                id="search"
                name="search"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                input_type={InputType::Search}
                class={classes!("form-control", "rounded-pill", "px-4")}
                on_change={props.on_change.clone()} />
        </div>
    }
}
