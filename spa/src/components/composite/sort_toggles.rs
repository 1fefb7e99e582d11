use shared::{Locale, SortCriteria, SortCriterion};
use strum::IntoEnumIterator;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub criteria: SortCriteria,
    pub locale: Locale,
    pub on_toggle: Callback<SortCriterion>,
}

fn render_toggle(props: &Props, criterion: SortCriterion) -> Html {
    let on_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(criterion))
    };
    let classes = if props.criteria.has(criterion) {
        classes!("btn", "btn-primary", "rounded-pill")
    } else {
        classes!("btn", "btn-outline-secondary", "rounded-pill")
    };
    html! {
        <button
            type="button"
            class={classes}
            aria-pressed={props.criteria.has(criterion).to_string()}
            onclick={on_click}>
            {props.locale.t("sortBy")} {" "} {props.locale.t(criterion.label_key())}
        </button>
    }
}

#[function_component(SortToggles)]
pub fn sort_toggles(props: &Props) -> Html {
    let toggles = SortCriterion::iter().map(|criterion| render_toggle(props, criterion));
    html! {
        <div class="d-flex flex-wrap gap-3 mb-4">
            { for toggles }
        </div>
    }
}
