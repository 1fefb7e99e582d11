pub mod auth_form;
pub mod chat;
pub mod config;
pub mod error;
pub mod i18n;
pub mod listing;
pub mod navigation;
pub mod seed;
pub mod session;

pub use auth_form::{AuthForm, AuthFormError, AuthIntent, Field, FormMode, LoginRequest};
pub use chat::{Author, ChatMessage, Transcript, BOT_REPLY};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use i18n::{Locale, UnknownLocale};
pub use listing::{Candidate, ContactCard, ListingQuery, SortCriteria, SortCriterion};
pub use navigation::{Destination, MenuItem};
pub use seed::Client;
pub use session::{Access, Role, Session, SessionError};
