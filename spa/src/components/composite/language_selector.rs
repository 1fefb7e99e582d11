use shared::Locale;
use strum::IntoEnumIterator;
use yew::prelude::*;

use crate::components::atoms::select::{Select, SelectOption};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub selected: Locale,
    pub on_change: Callback<Locale>,
}

#[function_component(LanguageSelector)]
pub fn language_selector(props: &Props) -> Html {
    let options: Vec<SelectOption> = Locale::iter()
        .map(|locale| SelectOption {
            value: locale.as_ref().to_owned(),
            label: locale.native_name().to_owned(),
        })
        .collect();

    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |code: String| match Locale::parse(&code) {
            Ok(locale) => on_change.emit(locale),
            Err(error) => log::warn!("Ignoring language selection, error={error}"),
        })
    };

    html! {
        <Select
            id="language"
            name="language"
            class="form-select"
            options={options}
            selected={Some(props.selected.as_ref().to_owned())}
            on_change={on_change} />
    }
}
