use shared::{AuthForm, AuthFormError, AuthIntent, Field, FormMode, LoginRequest, Role, Session};

#[test]
fn test_role_must_be_selected() {
    let form = AuthForm::new(None);
    assert_eq!(form.validate(), Err(AuthFormError::RoleNotSelected));
}

#[test]
fn test_blank_fields_are_reported() {
    let mut form = AuthForm::new(Some(AuthIntent::SignUp));
    form.role = Some(Role::Seeker);
    form.phone = "555-0100".to_owned();
    form.password = "   ".to_owned();

    assert_eq!(
        form.validate(),
        Err(AuthFormError::MissingFields(vec![
            Field::Password,
            Field::ConfirmPassword,
            Field::ServiceOffered,
        ]))
    );
}

#[test]
fn test_valid_seeker_form_logs_in() -> anyhow::Result<()> {
    let mut form = AuthForm::new(Some(AuthIntent::SignIn));
    form.role = Some(Role::Seeker);
    form.phone = "555-0100".to_owned();
    form.password = "secret".to_owned();
    form.service_offered = "Plumbing".to_owned();
    form.available = true;

    let request = form.validate()?;
    assert_eq!(
        request,
        LoginRequest {
            role: Role::Seeker,
            service_offered: Some("Plumbing".to_owned()),
            available: Some(true),
        }
    );

    let mut session = Session::default();
    session.login(request.role, request.service_offered, request.available);
    assert_eq!(session.service_offered(), "Plumbing");
    assert!(session.available());
    Ok(())
}

#[test]
fn test_hirer_form_ignores_seeker_fields() -> anyhow::Result<()> {
    let mut form = AuthForm::new(None);
    form.role = Some(Role::Hirer);
    form.phone = "555-0100".to_owned();
    form.password = "secret".to_owned();
    form.service_offered = "ignored".to_owned();

    let request = form.validate()?;
    assert_eq!(request.service_offered, None);
    assert_eq!(request.available, None);
    Ok(())
}

#[test]
fn test_entry_intent_picks_the_opening_mode() {
    let signup = AuthForm::new(Some(AuthIntent::SignUp));
    assert_eq!(signup.mode, FormMode::SignUp);
    assert_eq!(signup.heading(), "Create Account");

    let signin = AuthForm::new(Some(AuthIntent::SignIn));
    assert_eq!(signin.mode, FormMode::Login);
    assert_eq!(signin.heading(), "Welcome Back");

    let started = AuthForm::new(Some(AuthIntent::GetStarted));
    assert_eq!(started.mode, FormMode::Login);
    assert_eq!(started.heading(), "Get Started");
}
