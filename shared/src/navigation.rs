use crate::session::Role;

/// Every path the application can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Landing,
    Auth,
    SeekerDashboard,
    HirerDashboard,
    ThankYou,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Auth => "/auth",
            Self::SeekerDashboard => "/seeker-dashboard",
            Self::HirerDashboard => "/dashboard",
            Self::ThankYou => "/thank-you",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label_key: &'static str,
    pub destination: Destination,
    /// Roles allowed to see the entry, empty means everyone.
    pub roles: &'static [Role],
}

impl MenuItem {
    pub fn visible_to(&self, role: Option<Role>) -> bool {
        self.roles.is_empty() || role.is_some_and(|role| self.roles.contains(&role))
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        self.destination.path() == current_path
    }
}

static MENU: [MenuItem; 3] = [
    MenuItem {
        label_key: "home",
        destination: Destination::Landing,
        roles: &[],
    },
    MenuItem {
        label_key: "hirerDashboard",
        destination: Destination::HirerDashboard,
        roles: &[Role::Hirer],
    },
    MenuItem {
        label_key: "seekerDashboard",
        destination: Destination::SeekerDashboard,
        roles: &[Role::Seeker],
    },
];

pub fn menu_for(role: Option<Role>) -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(move |item| item.visible_to(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Option<Role>) -> Vec<&'static str> {
        menu_for(role).map(|item| item.label_key).collect()
    }

    #[test]
    fn menu_is_filtered_by_role() {
        assert_eq!(labels(None), vec!["home"]);
        assert_eq!(labels(Some(Role::Hirer)), vec!["home", "hirerDashboard"]);
        assert_eq!(labels(Some(Role::Seeker)), vec!["home", "seekerDashboard"]);
    }

    #[test]
    fn active_entry_matches_current_path() {
        let active: Vec<_> = menu_for(Some(Role::Hirer))
            .filter(|item| item.is_active("/dashboard"))
            .map(|item| item.destination)
            .collect();
        assert_eq!(active, vec![Destination::HirerDashboard]);
    }
}
