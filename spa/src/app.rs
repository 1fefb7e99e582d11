use std::rc::Rc;

use shared::{AppConfig, Locale};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::composite::{
        chatbot::Chatbot,
        fault_boundary::{Fault, FaultBoundary},
        sidebar::Sidebar,
    },
    router::{switch, Route},
    session::{SessionHandle, SessionState},
};

/// Application-wide state handed explicitly to every view that needs it.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub session: SessionHandle,
    pub locale: Locale,
    pub on_locale_change: Callback<Locale>,
    pub config: Rc<AppConfig>,
    pub on_fault: Callback<Fault>,
}

impl AppState {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.locale.t(key)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let config = use_memo((), |_| AppConfig::default());
    let session = use_reducer(SessionState::default);
    let locale = {
        let default_locale = config.default_locale;
        use_state(move || default_locale)
    };
    let fault = use_state(|| None::<Fault>);
    let sidebar_open = use_state(|| false);
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let on_fault = {
        let fault = fault.clone();
        Callback::from(move |reported: Fault| {
            log::error!(
                "Unhandled fault, error={reported}, details={details:?}",
                details = reported.error()
            );
            fault.set(Some(reported));
        })
    };

    let on_reset = {
        let fault = fault.clone();
        Callback::from(move |_: ()| {
            log::info!("Recovering from fault");
            fault.set(None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        })
    };

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |selected: Locale| {
            log::info!("Locale changed, locale={}", selected.as_ref());
            locale.set(selected);
        })
    };

    let on_sidebar_toggle = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |open: bool| sidebar_open.set(open))
    };

    let on_menu_click = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(true))
    };

    let app = AppState {
        session,
        locale: *locale,
        on_locale_change,
        config,
        on_fault,
    };

    let render = {
        let app = app.clone();
        move |route: Route| switch(route, &app)
    };

    let authenticated = app.session.session.authenticated();
    let show_menu_button = authenticated && !*sidebar_open && route != Some(Route::Landing);

    html! {
        <div class="d-flex min-vh-100">
            if authenticated {
                <Sidebar
                    app={app.clone()}
                    is_open={*sidebar_open}
                    current={route}
                    on_toggle={on_sidebar_toggle} />
            }
            <div class="flex-grow-1">
                if show_menu_button {
                    <button
                        class="btn btn-primary rounded-circle position-fixed top-0 start-0 m-3"
                        aria-label="Open menu"
                        onclick={on_menu_click}>
                        {"☰"}
                    </button>
                }
                <main class="p-4">
                    <FaultBoundary fault={(*fault).clone()} on_reset={on_reset}>
                        <Switch<Route> render={render} />
                    </FaultBoundary>
                </main>
                <Chatbot reply_delay_ms={app.config.chat_reply_delay_ms} />
            </div>
        </div>
    }
}
