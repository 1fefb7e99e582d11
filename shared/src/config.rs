use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Build-time settings of the client. There is no runtime configuration
/// source, every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_locale: Locale,
    /// Delay before the post-signup page returns to the landing page.
    pub signup_redirect_delay_ms: u32,
    pub chat_reply_delay_ms: u32,
    /// Phone number shown on every contact card.
    pub contact_phone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            signup_redirect_delay_ms: 5_000,
            chat_reply_delay_ms: 1_000,
            contact_phone: "+1 234 567 8900".to_owned(),
        }
    }
}
