use serde::{Deserialize, Serialize};
use shared::{AppError, AuthForm as AuthFormState, AuthFormError, AuthIntent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{app::AppState, components::composite::auth_form::AuthForm, session};

/// Query string of `/auth`, recording which landing button was used.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<AuthIntent>,
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub app: AppState,
}

#[function_component(AuthPage)]
pub fn auth_page(props: &Props) -> Html {
    let navigator = use_navigator();
    let intent = use_location()
        .and_then(|location| match location.query::<AuthQuery>() {
            Ok(query) => query.from,
            Err(error) => {
                log::debug!("Ignoring auth query, error={error}");
                None
            }
        });

    let form = use_state(move || AuthFormState::new(intent));
    let error = use_state(|| None::<AuthFormError>);

    let on_change = {
        let form = form.clone();
        Callback::from(move |updated: AuthFormState| form.set(updated))
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let session = props.app.session.clone();
        let on_fault = props.app.on_fault.clone();
        Callback::from(move |_: ()| match form.validate() {
            Ok(request) => {
                error.set(None);
                match &navigator {
                    Some(navigator) => session::login(&session, navigator, request),
                    None => on_fault.emit(AppError::NavigationUnavailable.into()),
                }
            }
            Err(rejected) => {
                log::warn!("Auth form rejected, error={rejected}");
                error.set(Some(rejected));
            }
        })
    };

    let on_switch_mode = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let mut data = (*form).clone();
            data.toggle_mode();
            error.set(None);
            form.set(data);
        })
    };

    let (prompt, switch_label) = form.switch_prompt();

    html! {
        <div class="min-vh-100 d-flex align-items-center justify-content-center">
            <div class="card shadow p-4 w-100" style="max-width: 28rem;">
                <h2 class="text-center mb-4">{form.heading()}</h2>
                <AuthForm
                    form={(*form).clone()}
                    error={(*error).clone()}
                    on_change={on_change}
                    on_submit={on_submit} />
                if form.role.is_some() {
                    <p class="text-center text-body-secondary mt-4 mb-0">
                        {prompt}
                        <a href="#" class="link-primary" onclick={on_switch_mode}>{switch_label}</a>
                    </p>
                }
            </div>
        </div>
    }
}
