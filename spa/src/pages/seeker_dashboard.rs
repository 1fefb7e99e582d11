use shared::seed;
use yew::prelude::*;

use crate::{
    app::AppState,
    components::{
        atoms::toggle_switch::ToggleSwitch, composite::client_history::ClientHistory,
    },
    seed::use_seed,
    session::SessionAction,
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub app: AppState,
}

#[function_component(SeekerDashboard)]
pub fn seeker_dashboard(props: &Props) -> Html {
    let clients = use_seed(seed::clients, props.app.on_fault.clone());
    let session = &props.app.session.session;

    let on_available_change = {
        let handle = props.app.session.clone();
        Callback::from(move |available: bool| {
            handle.dispatch(SessionAction::SetAvailability(available))
        })
    };

    html! {
        <div class="container py-4">
            <div class="mb-4">
                <h1 class="fw-bold mb-3">{props.app.t("jobSeekerDashboard")}</h1>
                <div class="card">
                    <div class="card-body d-flex justify-content-between align-items-center">
                        <span class="fs-5 fw-semibold">{"💼 "} {session.service_offered()}</span>
                        <ToggleSwitch
                            name="dashboard-available"
                            label={props.app.t("availableForWork").to_owned()}
                            checked={session.available()}
                            on_change={on_available_change} />
                    </div>
                </div>
            </div>
            <h2 class="fw-bold mb-3">{props.app.t("clientHistory")}</h2>
            <ClientHistory clients={clients} />
        </div>
    }
}
