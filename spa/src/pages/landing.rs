use shared::{AppError, AuthIntent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    app::AppState, components::composite::language_selector::LanguageSelector,
    pages::auth::AuthQuery, router::Route,
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub app: AppState,
}

#[function_component(Landing)]
pub fn landing(props: &Props) -> Html {
    let navigator = use_navigator();

    let go_to_auth = {
        let on_fault = props.app.on_fault.clone();
        move |intent: AuthIntent| {
            let navigator = navigator.clone();
            let on_fault = on_fault.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(navigator) = &navigator else {
                    on_fault.emit(AppError::NavigationUnavailable.into());
                    return;
                };
                log::info!("Auth entry, from={}", intent.as_ref());
                let query = AuthQuery { from: Some(intent) };
                if let Err(error) = navigator.push_with_query(&Route::Auth, &query) {
                    log::error!("Failed to navigate to auth, error={error}");
                    on_fault.emit(AppError::NavigationUnavailable.into());
                }
            })
        }
    };

    html! {
        <div class="container py-4">
            <nav class="d-flex justify-content-between align-items-center mb-5">
                <span class="fs-4 fw-bold">{"JobConnect"}</span>
                <div class="d-flex align-items-center gap-3">
                    <LanguageSelector
                        selected={props.app.locale}
                        on_change={props.app.on_locale_change.clone()} />
                    <button class="btn btn-outline-light rounded-pill" onclick={go_to_auth(AuthIntent::SignUp)}>
                        {"Sign up"}
                    </button>
                    <button class="btn btn-secondary rounded-pill" onclick={go_to_auth(AuthIntent::SignIn)}>
                        {"Sign in"}
                    </button>
                </div>
            </nav>
            <section class="text-center py-5 mx-auto" style="max-width: 48rem;">
                <h1 class="display-4 fw-bold mb-4">
                    <span class="text-info">{"The Comprehensive"}</span>
                    <br />
                    {"Tool for "}<span class="text-success">{"Job Excellence"}</span>
                </h1>
                <p class="lead text-body-secondary mb-5">
                    {"JobConnect, your key to unlocking career potential. With real-time insights and intuitive analytics, drive your career forward. Elevate your job search strategy today."}
                </p>
                <button class="btn btn-light btn-lg rounded-pill px-5" onclick={go_to_auth(AuthIntent::GetStarted)}>
                    {"Get Started"}
                </button>
            </section>
        </div>
    }
}
