use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

type Catalog = [(&'static str, &'static str); 15];

/// Supported interface languages, in selector order. The first one is the
/// default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    De,
    Hi,
    Mr,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale code: {code}")]
pub struct UnknownLocale {
    pub code: String,
}

impl Locale {
    pub fn parse(code: &str) -> Result<Self, UnknownLocale> {
        Self::from_str(code).map_err(|_| UnknownLocale {
            code: code.to_owned(),
        })
    }

    /// Name of the language written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Hi => "हिन्दी",
            Self::Mr => "मराठी",
        }
    }

    pub fn lookup(self, key: &str) -> Option<&'static str> {
        self.catalog()
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, text)| *text)
    }

    /// Translated text for `key`, or `key` itself when the catalog has no entry.
    pub fn t<'a>(self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    fn catalog(self) -> &'static Catalog {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
            Self::Fr => &FR,
            Self::De => &DE,
            Self::Hi => &HI,
            Self::Mr => &MR,
        }
    }
}

static EN: Catalog = [
    ("home", "Home"),
    ("hirerDashboard", "Hirer Dashboard"),
    ("seekerDashboard", "Seeker Dashboard"),
    ("availableForWork", "Available for work"),
    ("logout", "Logout"),
    ("jobSeekerDashboard", "Job Seeker Dashboard"),
    ("clientHistory", "Your Client History"),
    ("jobSeekerListings", "Job Seeker Listings"),
    (
        "searchPlaceholder",
        "Search by profession (e.g., Painter, Electrician)",
    ),
    ("sortBy", "Sort by"),
    ("distance", "Distance"),
    ("availability", "Availability"),
    ("rating", "Rating"),
    ("contact", "Contact"),
    ("close", "Close"),
];

static ES: Catalog = [
    ("home", "Inicio"),
    ("hirerDashboard", "Panel del Contratante"),
    ("seekerDashboard", "Panel del Buscador"),
    ("availableForWork", "Disponible para trabajar"),
    ("logout", "Cerrar sesión"),
    ("jobSeekerDashboard", "Panel del Buscador de Empleo"),
    ("clientHistory", "Tu Historial de Clientes"),
    ("jobSeekerListings", "Listado de Buscadores de Empleo"),
    (
        "searchPlaceholder",
        "Buscar por profesión (ej., Pintor, Electricista)",
    ),
    ("sortBy", "Ordenar por"),
    ("distance", "Distancia"),
    ("availability", "Disponibilidad"),
    ("rating", "Calificación"),
    ("contact", "Contactar"),
    ("close", "Cerrar"),
];

static FR: Catalog = [
    ("home", "Accueil"),
    ("hirerDashboard", "Tableau de Bord Employeur"),
    ("seekerDashboard", "Tableau de Bord Chercheur"),
    ("availableForWork", "Disponible pour travailler"),
    ("logout", "Déconnexion"),
    ("jobSeekerDashboard", "Tableau de Bord du Chercheur d'Emploi"),
    ("clientHistory", "Votre Historique Client"),
    ("jobSeekerListings", "Liste des Chercheurs d'Emploi"),
    (
        "searchPlaceholder",
        "Rechercher par profession (ex., Peintre, Électricien)",
    ),
    ("sortBy", "Trier par"),
    ("distance", "Distance"),
    ("availability", "Disponibilité"),
    ("rating", "Évaluation"),
    ("contact", "Contacter"),
    ("close", "Fermer"),
];

static DE: Catalog = [
    ("home", "Startseite"),
    ("hirerDashboard", "Arbeitgeber-Dashboard"),
    ("seekerDashboard", "Arbeitssuchenden-Dashboard"),
    ("availableForWork", "Verfügbar für Arbeit"),
    ("logout", "Abmelden"),
    ("jobSeekerDashboard", "Arbeitssuchenden-Dashboard"),
    ("clientHistory", "Ihr Kundenverlauf"),
    ("jobSeekerListings", "Arbeitssuchenden-Auflistungen"),
    (
        "searchPlaceholder",
        "Nach Beruf suchen (z.B. Maler, Elektriker)",
    ),
    ("sortBy", "Sortieren nach"),
    ("distance", "Entfernung"),
    ("availability", "Verfügbarkeit"),
    ("rating", "Bewertung"),
    ("contact", "Kontakt"),
    ("close", "Schließen"),
];

static HI: Catalog = [
    ("home", "होम"),
    ("hirerDashboard", "नियोक्ता डैशबोर्ड"),
    ("seekerDashboard", "नौकरी खोजकर्ता डैशबोर्ड"),
    ("availableForWork", "काम के लिए उपलब्ध"),
    ("logout", "लॉग आउट"),
    ("jobSeekerDashboard", "नौकरी खोजकर्ता डैशबोर्ड"),
    ("clientHistory", "आपका ग्राहक इतिहास"),
    ("jobSeekerListings", "नौकरी खोजकर्ता सूची"),
    (
        "searchPlaceholder",
        "पेशे द्वारा खोजें (उदा., पेंटर, इलेक्ट्रीशियन)",
    ),
    ("sortBy", "इसके अनुसार क्रमबद्ध करें"),
    ("distance", "दूरी"),
    ("availability", "उपलब्धता"),
    ("rating", "रेटिंग"),
    ("contact", "संपर्क करें"),
    ("close", "बंद करें"),
];

static MR: Catalog = [
    ("home", "मुख्यपृष्ठ"),
    ("hirerDashboard", "नियोक्ता डॅशबोर्ड"),
    ("seekerDashboard", "नोकरी शोधक डॅशबोर्ड"),
    ("availableForWork", "कामासाठी उपलब्ध"),
    ("logout", "लॉग आउट"),
    ("jobSeekerDashboard", "नोकरी शोधक डॅशबोर्ड"),
    ("clientHistory", "तुमचा ग्राहक इतिहास"),
    ("jobSeekerListings", "नोकरी शोधक यादी"),
    (
        "searchPlaceholder",
        "व्यवसायानुसार शोधा (उदा., पेंटर, इलेक्ट्रीशियन)",
    ),
    ("sortBy", "यानुसार क्रमवारी लावा"),
    ("distance", "अंतर"),
    ("availability", "उपलब्धता"),
    ("rating", "मूल्यांकन"),
    ("contact", "संपर्क करा"),
    ("close", "बंद करा"),
];

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_locale_covers_the_english_keys() {
        for locale in Locale::iter() {
            for (key, _) in EN.iter() {
                assert!(
                    locale.lookup(key).is_some(),
                    "locale={} misses key={key}",
                    locale.as_ref()
                );
            }
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(Locale::parse("FR"), Ok(Locale::Fr));
        assert_eq!(
            Locale::parse("pt"),
            Err(UnknownLocale {
                code: "pt".to_owned()
            })
        );
    }
}
