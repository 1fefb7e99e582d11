use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::{app::AppState, router::Route};

#[derive(PartialEq, Properties)]
pub struct NoticeProps {
    pub delay_ms: u32,
    pub on_elapsed: Callback<()>,
}

/// Post-signup message. `on_elapsed` fires once the delay passes; the timer
/// is owned by `use_timeout` and dropped if the notice unmounts first.
#[function_component(SignupNotice)]
pub fn signup_notice(props: &NoticeProps) -> Html {
    {
        let on_elapsed = props.on_elapsed.clone();
        use_timeout(move || on_elapsed.emit(()), props.delay_ms);
    }

    html! {
        <div class="min-vh-100 d-flex flex-column justify-content-center align-items-center text-center p-4">
            <h1 class="display-4 fw-bold mb-4">{"Thank You for Signing Up!"}</h1>
            <p class="fs-4 mb-4 mx-auto" style="max-width: 42rem;">
                {"Your profile has been received. Our team will review it and contact you soon."}
            </p>
            <p class="fs-5 text-body-secondary">
                {"You will be redirected to the home page in a few seconds..."}
            </p>
        </div>
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub app: AppState,
}

#[function_component(ThankYou)]
pub fn thank_you(props: &Props) -> Html {
    let navigator = use_navigator();

    let on_elapsed = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            log::debug!("Signup message elapsed, redirecting home");
            navigator.push(&Route::Landing);
        }
    });

    html! {
        <SignupNotice
            delay_ms={props.app.config.signup_redirect_delay_ms}
            on_elapsed={on_elapsed} />
    }
}
