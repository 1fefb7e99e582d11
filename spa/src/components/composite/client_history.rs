use std::rc::Rc;

use shared::Client;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub clients: Rc<Vec<Client>>,
}

fn render_client(client: &Client) -> Html {
    let initial = client.name.chars().next().unwrap_or('?');
    html! {
        <div class="card shadow-sm mb-3" key={client.id}>
            <div class="card-body d-flex align-items-center gap-3">
                <div class="rounded-circle bg-secondary-subtle d-flex align-items-center justify-content-center flex-shrink-0"
                     style="width: 4rem; height: 4rem;">
                    <span class="fs-3 fw-bold">{initial}</span>
                </div>
                <div class="flex-grow-1">
                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <div>
                            <h3 class="h5 text-primary mb-0">{&client.name}</h3>
                            <small class="text-body-secondary">{&client.job_title}</small>
                        </div>
                        <span class="badge rounded-pill text-bg-dark">
                            {"★ "} {format!("{:.1}", client.rating)}
                        </span>
                    </div>
                    <div class="row small text-body-secondary">
                        <div class="col-6">{"☎ "} {&client.phone}</div>
                        <div class="col-6">{"✉ "} {&client.email}</div>
                        <div class="col-12">{"Job Date: "} {client.date.format("%Y-%m-%d").to_string()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(ClientHistory)]
pub fn client_history(props: &Props) -> Html {
    let clients = props.clients.iter().map(render_client);
    html! {
        <section>
            { for clients }
        </section>
    }
}
