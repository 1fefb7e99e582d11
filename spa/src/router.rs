use shared::{Access, Destination, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::AppState;
use crate::pages::{
    auth::AuthPage, hirer_dashboard::HirerDashboard, landing::Landing, not_found::NotFound,
    seeker_dashboard::SeekerDashboard, thank_you::ThankYou,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/auth")]
    Auth,
    #[at("/seeker-dashboard")]
    SeekerDashboard,
    #[at("/dashboard")]
    HirerDashboard,
    #[at("/thank-you")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(value: Destination) -> Self {
        match value {
            Destination::Landing => Self::Landing,
            Destination::Auth => Self::Auth,
            Destination::SeekerDashboard => Self::SeekerDashboard,
            Destination::HirerDashboard => Self::HirerDashboard,
            Destination::ThankYou => Self::ThankYou,
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct GuardProps {
    pub app: AppState,
    pub required: Role,
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only for sessions holding the required role. This is
/// navigation only, nothing is verified server side.
#[function_component(Guarded)]
pub fn guarded(props: &GuardProps) -> Html {
    match props.app.session.session.guard(props.required) {
        Access::Granted => props.children.clone(),
        Access::Redirect(destination) => {
            log::info!(
                "Guard redirect, required={required}, to={path}",
                required = props.required.as_ref(),
                path = destination.path()
            );
            html! { <Redirect<Route> to={Route::from(destination)} /> }
        }
    }
}

pub fn switch(route: Route, app: &AppState) -> Html {
    let app = app.clone();
    match route {
        Route::Landing => html! { <Landing app={app} /> },
        Route::Auth => html! { <AuthPage app={app} /> },
        Route::SeekerDashboard => html! {
            <Guarded app={app.clone()} required={Role::Seeker}>
                <SeekerDashboard app={app} />
            </Guarded>
        },
        Route::HirerDashboard => html! {
            <Guarded app={app.clone()} required={Role::Hirer}>
                <HirerDashboard app={app} />
            </Guarded>
        },
        Route::ThankYou => html! { <ThankYou app={app} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
