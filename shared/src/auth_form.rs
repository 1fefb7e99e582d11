use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

use crate::session::Role;

/// Which landing page button brought the visitor to the auth page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr)]
pub enum AuthIntent {
    #[strum(serialize = "signup")]
    #[serde(rename = "signup")]
    SignUp,
    #[strum(serialize = "signin")]
    #[serde(rename = "signin")]
    SignIn,
    #[strum(serialize = "getStarted")]
    #[serde(rename = "getStarted")]
    GetStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Phone,
    Password,
    ConfirmPassword,
    ServiceOffered,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFormError {
    #[error("role_not_selected")]
    RoleNotSelected,
    #[error("required_fields_missing: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input for `Session::login` produced by a valid form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub role: Role,
    pub service_offered: Option<String>,
    pub available: Option<bool>,
}

/// State of the mock credential form. Credentials are collected to look real
/// but are never checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    pub intent: Option<AuthIntent>,
    pub mode: FormMode,
    pub role: Option<Role>,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub service_offered: String,
    pub available: bool,
}

impl AuthForm {
    pub fn new(intent: Option<AuthIntent>) -> Self {
        let mode = match intent {
            Some(AuthIntent::SignUp) => FormMode::SignUp,
            _ => FormMode::Login,
        };
        Self {
            intent,
            mode,
            ..Default::default()
        }
    }

    pub fn heading(&self) -> &'static str {
        match (self.intent, self.mode) {
            (Some(AuthIntent::GetStarted), _) => "Get Started",
            (_, FormMode::Login) => "Welcome Back",
            (_, FormMode::SignUp) => "Create Account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Login => "Login",
            FormMode::SignUp => "Sign Up",
        }
    }

    /// Prompt and link label offering the other mode.
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self.mode {
            FormMode::Login => ("Don't have an account? ", "Sign Up"),
            FormMode::SignUp => ("Already have an account? ", "Login"),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::Login => FormMode::SignUp,
            FormMode::SignUp => FormMode::Login,
        };
    }

    /// Fields rendered for the current role and mode, all of them required.
    pub fn required_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Phone, Field::Password];
        if self.mode == FormMode::SignUp {
            fields.push(Field::ConfirmPassword);
        }
        if self.role == Some(Role::Seeker) {
            fields.push(Field::ServiceOffered);
        }
        fields
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::ServiceOffered => &self.service_offered,
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, AuthFormError> {
        let role = self.role.ok_or(AuthFormError::RoleNotSelected)?;
        let missing: Vec<Field> = self
            .required_fields()
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(AuthFormError::MissingFields(missing));
        }
        let request = match role {
            Role::Seeker => LoginRequest {
                role,
                service_offered: Some(self.service_offered.clone()),
                available: Some(self.available),
            },
            Role::Hirer => LoginRequest {
                role,
                service_offered: None,
                available: None,
            },
        };
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn intent_sets_mode_and_heading() {
        assert_eq!(AuthForm::new(None).heading(), "Welcome Back");
        assert_eq!(
            AuthForm::new(Some(AuthIntent::SignUp)).heading(),
            "Create Account"
        );

        let mut form = AuthForm::new(Some(AuthIntent::GetStarted));
        assert_eq!(form.heading(), "Get Started");
        form.toggle_mode();
        assert_eq!(form.heading(), "Get Started");
        assert_eq!(form.submit_label(), "Sign Up");
    }

    #[test]
    fn intent_parses_from_query_value() {
        assert_eq!(AuthIntent::from_str("getStarted"), Ok(AuthIntent::GetStarted));
        assert!(AuthIntent::from_str("bogus").is_err());
    }

    #[test]
    fn confirm_password_only_required_when_signing_up() {
        let mut form = AuthForm::new(None);
        form.role = Some(Role::Hirer);
        assert_eq!(form.required_fields(), vec![Field::Phone, Field::Password]);
        form.toggle_mode();
        assert_eq!(
            form.required_fields(),
            vec![Field::Phone, Field::Password, Field::ConfirmPassword]
        );
    }

    #[test]
    fn error_message_lists_fields() {
        let error = AuthFormError::MissingFields(vec![Field::Phone, Field::ServiceOffered]);
        assert_eq!(
            error.to_string(),
            "required_fields_missing: phone, service_offered"
        );
    }
}
