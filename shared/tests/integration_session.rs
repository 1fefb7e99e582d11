use shared::{Access, Destination, Role, Session, SessionError};

#[test]
fn test_seeker_login_records_profile() {
    let mut session = Session::default();

    let destination = session.login(Role::Seeker, Some("Plumbing".to_owned()), Some(true));

    assert_eq!(destination, Destination::SeekerDashboard);
    assert!(session.authenticated());
    assert_eq!(session.role(), Some(Role::Seeker));
    assert_eq!(session.service_offered(), "Plumbing");
    assert!(session.available());
}

#[test]
fn test_hirer_login_logout_round_trip() {
    let initial = Session::default();
    let mut session = initial.clone();

    assert_eq!(session.login(Role::Hirer, None, None), Destination::HirerDashboard);
    assert_eq!(session.logout(), Destination::Landing);

    assert_eq!(session, initial);
}

#[test]
fn test_logout_clears_seeker_fields() {
    let mut session = Session::default();
    session.login(Role::Seeker, Some("Carpentry".to_owned()), Some(true));

    session.logout();

    assert!(!session.authenticated());
    assert_eq!(session.role(), None);
    assert_eq!(session.service_offered(), "");
    assert!(!session.available());
}

#[test]
fn test_logout_when_anonymous_is_noop() {
    let mut session = Session::default();
    assert_eq!(session.logout(), Destination::Landing);
    assert_eq!(session, Session::Anonymous);
}

#[test]
fn test_set_availability_requires_seeker() {
    let mut session = Session::default();
    assert_eq!(session.set_availability(true), Err(SessionError::NotSeeker));
    assert_eq!(session, Session::Anonymous);

    session.login(Role::Hirer, None, None);
    assert_eq!(session.set_availability(true), Err(SessionError::NotSeeker));
    assert_eq!(session, Session::Hirer);
    assert!(!session.available());

    session.login(Role::Seeker, Some("Painting".to_owned()), None);
    assert_eq!(session.set_availability(true), Ok(()));
    assert!(session.available());
    assert_eq!(session.set_availability(false), Ok(()));
    assert!(!session.available());
}

#[test]
fn test_guard_hirer_dashboard() {
    let anonymous = Session::default();
    assert_eq!(
        anonymous.guard(Role::Hirer),
        Access::Redirect(Destination::Auth)
    );

    let mut seeker = Session::default();
    seeker.login(Role::Seeker, None, None);
    assert_eq!(
        seeker.guard(Role::Hirer),
        Access::Redirect(Destination::Landing)
    );

    let mut hirer = Session::default();
    hirer.login(Role::Hirer, None, None);
    assert_eq!(hirer.guard(Role::Hirer), Access::Granted);
}

#[test]
fn test_guard_seeker_dashboard() {
    let mut hirer = Session::default();
    hirer.login(Role::Hirer, None, None);
    assert_eq!(
        hirer.guard(Role::Seeker),
        Access::Redirect(Destination::Landing)
    );

    let mut seeker = Session::default();
    seeker.login(Role::Seeker, None, None);
    assert_eq!(seeker.guard(Role::Seeker), Access::Granted);
}

#[test]
fn test_session_serializes_with_state_tag() -> anyhow::Result<()> {
    let mut session = Session::default();
    session.login(Role::Seeker, Some("Plumbing".to_owned()), Some(true));

    let json = serde_json::to_value(&session)?;

    assert_eq!(
        json,
        serde_json::json!({"state": "seeker", "service_offered": "Plumbing", "available": true})
    );
    Ok(())
}
