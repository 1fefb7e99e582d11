use std::rc::Rc;

use shared::{Candidate, Locale};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub candidates: Rc<Vec<Candidate>>,
    pub locale: Locale,
    pub on_contact: Callback<Candidate>,
}

fn render_candidate(props: &Props, candidate: &Candidate) -> Html {
    let on_click = {
        let on_contact = props.on_contact.clone();
        let candidate = candidate.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(candidate.clone()))
    };
    let (marker, marker_class) = if candidate.available {
        ("✓", "text-success")
    } else {
        ("✗", "text-danger")
    };

    html! {
        <div class="card shadow-sm mb-3">
            <div class="card-body d-flex align-items-center gap-4 overflow-auto">
                <div class="rounded-circle bg-secondary-subtle d-flex align-items-center justify-content-center flex-shrink-0"
                     style="width: 3rem; height: 3rem;">
                    <span class="fs-5 fw-bold">{candidate.initial()}</span>
                </div>
                <div class="flex-grow-1">
                    <h3 class="h6 text-primary mb-0">{&candidate.name}</h3>
                    <small class="text-body-secondary">{&candidate.service_category}</small>
                </div>
                <div class="text-body-secondary text-nowrap">
                    {format!("{} ({} miles)", candidate.location, candidate.distance)}
                </div>
                <div class={classes!("text-nowrap", marker_class)}>
                    {marker} {" "} {props.locale.t("availability")}
                </div>
                <span class="badge rounded-pill text-bg-dark">
                    {"★ "} {format!("{:.1}", candidate.rating)}
                </span>
                <button class="btn btn-primary btn-sm" onclick={on_click}>
                    {props.locale.t("contact")}
                </button>
            </div>
        </div>
    }
}

#[function_component(CandidateList)]
pub fn candidate_list(props: &Props) -> Html {
    html! {
        <section>
            {
                props.candidates.iter().map(|candidate| {
                    html! {
                        <div key={candidate.id}>
                            {render_candidate(props, candidate)}
                        </div>
                    }
                }).collect::<Html>()
            }
        </section>
    }
}
