use shared::{navigation::menu_for, AppError, Role};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::{
    app::AppState,
    components::{
        atoms::toggle_switch::ToggleSwitch, composite::language_selector::LanguageSelector,
    },
    router::Route,
    session::{self, SessionAction},
};

/// Viewport width from which the sidebar no longer overlays the content.
const WIDE_VIEWPORT_PX: f64 = 768.0;

fn is_wide_viewport() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width >= WIDE_VIEWPORT_PX)
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub app: AppState,
    pub is_open: bool,
    pub current: Option<Route>,
    pub on_toggle: Callback<bool>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let navigator = use_navigator();

    {
        let on_toggle = props.on_toggle.clone();
        use_event_with_window("resize", move |_: Event| {
            if is_wide_viewport() {
                on_toggle.emit(false);
            }
        });
    }

    {
        let on_toggle = props.on_toggle.clone();
        use_effect_with((), move |_| {
            if is_wide_viewport() {
                on_toggle.emit(false);
            }
            || ()
        });
    }

    let on_close = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(false))
    };

    let on_logout = {
        let session = props.app.session.clone();
        let on_fault = props.app.on_fault.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = &navigator else {
                on_fault.emit(AppError::NavigationUnavailable.into());
                return;
            };
            on_toggle.emit(false);
            session::logout(&session, navigator);
        })
    };

    let on_availability_change = {
        let session = props.app.session.clone();
        Callback::from(move |available: bool| {
            session.dispatch(SessionAction::SetAvailability(available));
        })
    };

    let current_path = props.current.map(|route| route.to_path()).unwrap_or_default();
    let role = props.app.session.session.role();

    let menu = menu_for(role).map(|item| {
        let active = item.is_active(&current_path);
        let classes = if active {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link", "link-body-emphasis")
        };
        let on_click = {
            let on_toggle = props.on_toggle.clone();
            Callback::from(move |_: MouseEvent| on_toggle.emit(false))
        };
        html! {
            <li class="nav-item" onclick={on_click}>
                <Link<Route> to={Route::from(item.destination)} classes={classes}>
                    {props.app.t(item.label_key)}
                </Link<Route>>
            </li>
        }
    });

    let offcanvas_classes = if props.is_open {
        classes!("offcanvas", "offcanvas-start", "show")
    } else {
        classes!("offcanvas", "offcanvas-start")
    };

    html! {
        <>
            if props.is_open {
                <div class="offcanvas-backdrop fade show" onclick={on_close.clone()}></div>
            }
            <aside class={offcanvas_classes} tabindex="-1">
                <div class="offcanvas-header border-bottom">
                    <Link<Route> to={Route::Landing} classes={classes!("navbar-brand", "fw-semibold")}>
                        {"JobConnect"}
                    </Link<Route>>
                    <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
                </div>
                <div class="offcanvas-body d-flex flex-column">
                    <ul class="nav nav-pills flex-column mb-auto">
                        { for menu }
                    </ul>
                    <div class="border-top pt-3 d-grid gap-3">
                        if role == Some(Role::Seeker) {
                            <ToggleSwitch
                                name="sidebar-available"
                                label={props.app.t("availableForWork").to_owned()}
                                checked={props.app.session.session.available()}
                                on_change={on_availability_change} />
                        }
                        <LanguageSelector
                            selected={props.app.locale}
                            on_change={props.app.on_locale_change.clone()} />
                        if role.is_some() {
                            <button class="btn btn-outline-secondary" onclick={on_logout}>
                                {props.app.t("logout")}
                            </button>
                        }
                    </div>
                </div>
            </aside>
        </>
    }
}
