use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::navigation::Destination;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Seeker,
    Hirer,
}

impl Role {
    /// The dashboard a freshly logged in user of this role lands on.
    pub fn dashboard(self) -> Destination {
        match self {
            Self::Seeker => Destination::SeekerDashboard,
            Self::Hirer => Destination::HirerDashboard,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("seeker_session_required")]
    NotSeeker,
}

/// Outcome of checking a session against a view's required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Destination),
}

/// In-memory authentication state of the running application.
///
/// Seeker-only attributes live inside the `Seeker` variant, so an anonymous
/// or hirer session can never carry a stale service or availability flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Seeker {
        service_offered: String,
        available: bool,
    },
    Hirer,
}

impl Session {
    /// Mock login: no credential is checked and any role succeeds. Returns the
    /// destination the caller should navigate to.
    pub fn login(
        &mut self,
        role: Role,
        service_offered: Option<String>,
        available: Option<bool>,
    ) -> Destination {
        *self = match role {
            Role::Seeker => Self::Seeker {
                service_offered: service_offered.unwrap_or_default(),
                available: available.unwrap_or(false),
            },
            Role::Hirer => Self::Hirer,
        };
        role.dashboard()
    }

    pub fn logout(&mut self) -> Destination {
        *self = Self::Anonymous;
        Destination::Landing
    }

    pub fn set_availability(&mut self, flag: bool) -> Result<(), SessionError> {
        match self {
            Self::Seeker { available, .. } => {
                *available = flag;
                Ok(())
            }
            _ => Err(SessionError::NotSeeker),
        }
    }

    pub fn set_service_offered(&mut self, service: String) -> Result<(), SessionError> {
        match self {
            Self::Seeker {
                service_offered, ..
            } => {
                *service_offered = service;
                Ok(())
            }
            _ => Err(SessionError::NotSeeker),
        }
    }

    pub fn authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Seeker { .. } => Some(Role::Seeker),
            Self::Hirer => Some(Role::Hirer),
        }
    }

    pub fn service_offered(&self) -> &str {
        match self {
            Self::Seeker {
                service_offered, ..
            } => service_offered,
            _ => "",
        }
    }

    pub fn available(&self) -> bool {
        matches!(self, Self::Seeker { available: true, .. })
    }

    /// Navigation guard for a view restricted to `required`. This only decides
    /// what to render; nothing here is verified by a server.
    pub fn guard(&self, required: Role) -> Access {
        match self.role() {
            None => Access::Redirect(Destination::Auth),
            Some(role) if role != required => Access::Redirect(Destination::Landing),
            Some(_) => Access::Granted,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn anonymous_session_exposes_cleared_fields() {
        let session = Session::default();
        assert!(!session.authenticated());
        assert_eq!(session.role(), None);
        assert_eq!(session.service_offered(), "");
        assert!(!session.available());
    }

    #[test]
    fn seeker_login_defaults_missing_fields() {
        let mut session = Session::default();
        let destination = session.login(Role::Seeker, None, None);
        assert_eq!(destination, Destination::SeekerDashboard);
        assert_eq!(
            session,
            Session::Seeker {
                service_offered: String::new(),
                available: false
            }
        );
    }

    #[test]
    fn hirer_login_ignores_seeker_fields() {
        let mut session = Session::default();
        let destination = session.login(Role::Hirer, Some("Plumbing".to_owned()), Some(true));
        assert_eq!(destination, Destination::HirerDashboard);
        assert_eq!(session, Session::Hirer);
        assert_eq!(session.service_offered(), "");
        assert!(!session.available());
    }

    #[test]
    fn login_replaces_previous_session() {
        let mut session = Session::default();
        session.login(Role::Seeker, Some("Carpentry".to_owned()), Some(true));
        session.login(Role::Hirer, None, None);
        assert_eq!(session.role(), Some(Role::Hirer));
        assert!(!session.available());
    }

    #[test]
    fn set_service_offered_only_for_seekers() {
        let mut session = Session::default();
        assert_eq!(
            session.set_service_offered("Painting".to_owned()),
            Err(SessionError::NotSeeker)
        );

        session.login(Role::Seeker, Some("Plumbing".to_owned()), None);
        assert_eq!(session.set_service_offered("Painting".to_owned()), Ok(()));
        assert_eq!(session.service_offered(), "Painting");
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::from_str("Seeker"), Ok(Role::Seeker));
        assert_eq!(Role::from_str("HIRER"), Ok(Role::Hirer));
        assert!(Role::from_str("admin").is_err());
        assert_eq!(Role::Hirer.as_ref(), "hirer");
    }
}
