use std::rc::Rc;

use shared::{Destination, LoginRequest, Session};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub session: Session,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Login(LoginRequest),
    Logout,
    SetAvailability(bool),
}

pub type SessionHandle = UseReducerHandle<SessionState>;

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();

        match action {
            SessionAction::Login(request) => {
                let role = request.role;
                state
                    .session
                    .login(role, request.service_offered, request.available);
                log::info!(
                    "User login, role={role}, session={session}",
                    role = role.as_ref(),
                    session = serde_json::to_string(&state.session).unwrap_or_default()
                );
            }
            SessionAction::Logout => {
                state.session.logout();
                log::info!("User logged out");
            }
            SessionAction::SetAvailability(flag) => {
                if let Err(error) = state.session.set_availability(flag) {
                    log::warn!("Availability change rejected, available={flag}, error={error}");
                    return self;
                }
                log::info!("Seeker availability set, available={flag}");
            }
        }

        Rc::new(state)
    }
}

/// Logs in and navigates to the role's dashboard.
pub fn login(session: &SessionHandle, navigator: &Navigator, request: LoginRequest) {
    let destination = request.role.dashboard();
    session.dispatch(SessionAction::Login(request));
    navigator.push(&Route::from(destination));
}

pub fn logout(session: &SessionHandle, navigator: &Navigator) {
    session.dispatch(SessionAction::Logout);
    navigator.push(&Route::from(Destination::Landing));
}

#[cfg(test)]
mod tests {
    use shared::Role;

    use super::*;

    fn reduce(state: SessionState, action: SessionAction) -> Rc<SessionState> {
        Rc::new(state).reduce(action)
    }

    #[test]
    fn login_then_logout_restores_default() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Login(LoginRequest {
                role: Role::Hirer,
                service_offered: None,
                available: None,
            }),
        );
        assert_eq!(state.session, Session::Hirer);

        let state = reduce((*state).clone(), SessionAction::Logout);
        assert_eq!(*state, SessionState::default());
    }

    #[test]
    fn rejected_availability_keeps_the_same_state() {
        let before = Rc::new(SessionState::default());
        let after = before.clone().reduce(SessionAction::SetAvailability(true));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn seeker_availability_toggles() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Login(LoginRequest {
                role: Role::Seeker,
                service_offered: Some("Plumbing".to_owned()),
                available: Some(false),
            }),
        );
        let state = reduce((*state).clone(), SessionAction::SetAvailability(true));
        assert!(state.session.available());
        assert_eq!(state.session.service_offered(), "Plumbing");
    }
}
