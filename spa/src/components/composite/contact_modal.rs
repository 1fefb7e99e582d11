use shared::{ContactCard, Locale};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub card: ContactCard,
    pub locale: Locale,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &Props) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let initial = props.card.name.chars().next().unwrap_or('?');

    html! {
        <>
            <div class="modal-backdrop fade show"></div>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header gap-3">
                            <div class="rounded-circle bg-secondary-subtle d-flex align-items-center justify-content-center"
                                 style="width: 4rem; height: 4rem;">
                                <span class="fs-3 fw-bold">{initial}</span>
                            </div>
                            <h5 class="modal-title">{&props.card.name}</h5>
                        </div>
                        <div class="modal-body">
                            <p class="text-body-secondary mb-2">{"Phone: "} {&props.card.phone}</p>
                            <p class="text-body-secondary mb-0">{"Email: "} {&props.card.email}</p>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-primary w-100" onclick={on_close}>
                                {props.locale.t("close")}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
