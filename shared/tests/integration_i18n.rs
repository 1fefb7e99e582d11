use shared::{AppConfig, Locale};
use strum::IntoEnumIterator;

#[test]
fn test_default_locale_is_first_listed() {
    assert_eq!(Locale::default(), Locale::En);
    assert_eq!(Locale::iter().next(), Some(Locale::En));
    assert_eq!(AppConfig::default().default_locale, Locale::En);
}

#[test]
fn test_lookup_translates_known_keys() {
    assert_eq!(Locale::En.t("home"), "Home");
    assert_eq!(Locale::Es.t("logout"), "Cerrar sesión");
    assert_eq!(Locale::De.t("close"), "Schließen");
    assert_eq!(Locale::Fr.t("sortBy"), "Trier par");
}

#[test]
fn test_missing_key_returns_key() {
    for locale in Locale::iter() {
        assert_eq!(locale.t("noSuchKey"), "noSuchKey");
        assert_eq!(locale.lookup("noSuchKey"), None);
    }
}

#[test]
fn test_locale_codes_round_trip() -> anyhow::Result<()> {
    for locale in Locale::iter() {
        assert_eq!(Locale::parse(locale.as_ref())?, locale);
    }
    assert!(Locale::parse("xx").is_err());
    Ok(())
}

#[test]
fn test_config_deserializes_partial_input() -> anyhow::Result<()> {
    let config: AppConfig = serde_json::from_str(r#"{"default_locale": "hi"}"#)?;
    assert_eq!(config.default_locale, Locale::Hi);
    assert_eq!(config.signup_redirect_delay_ms, 5_000);
    assert_eq!(config.chat_reply_delay_ms, 1_000);
    Ok(())
}
