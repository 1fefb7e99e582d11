use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// A worker listing shown on the hirer dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub service_category: String,
    pub location: String,
    /// Miles from the hirer.
    pub distance: f64,
    pub available: bool,
    /// Between 0 and 5.
    pub rating: f64,
}

impl Candidate {
    fn matches(&self, needle: &str) -> bool {
        self.service_category.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Sort keys a hirer can toggle. Declaration order is priority order: when
/// several are active, only the first one is used as the comparator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortCriterion {
    Distance,
    Availability,
    Rating,
}

impl SortCriterion {
    pub fn compare(self, a: &Candidate, b: &Candidate) -> Ordering {
        match self {
            Self::Distance => a.distance.total_cmp(&b.distance),
            Self::Availability => b.available.cmp(&a.available),
            Self::Rating => b.rating.total_cmp(&a.rating),
        }
    }

    /// Translation key of the criterion label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Availability => "availability",
            Self::Rating => "rating",
        }
    }
}

/// Set of active sort criteria. Membership only, toggling twice is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortCriteria(BTreeSet<SortCriterion>);

impl SortCriteria {
    /// Flips `criterion` and returns whether it is active afterwards.
    pub fn toggle(&mut self, criterion: SortCriterion) -> bool {
        if self.0.remove(&criterion) {
            false
        } else {
            self.0.insert(criterion);
            true
        }
    }

    pub fn has(&self, criterion: SortCriterion) -> bool {
        self.0.contains(&criterion)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The criterion actually applied, if any.
    pub fn effective(&self) -> Option<SortCriterion> {
        self.0.first().copied()
    }
}

impl FromIterator<SortCriterion> for SortCriteria {
    fn from_iter<I: IntoIterator<Item = SortCriterion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Search text plus active criteria, everything the listing view depends on
/// besides the source records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingQuery {
    pub text: String,
    pub criteria: SortCriteria,
}

impl ListingQuery {
    pub fn filter<'a>(&self, source: &'a [Candidate]) -> Vec<&'a Candidate> {
        let needle = self.text.to_lowercase();
        source
            .iter()
            .filter(|candidate| candidate.matches(&needle))
            .collect()
    }

    /// Filtered and sorted copy of `source`. The sort is stable, records that
    /// tie on the applied key keep their source order.
    pub fn apply(&self, source: &[Candidate]) -> Vec<Candidate> {
        let mut view: Vec<Candidate> = self.filter(source).into_iter().cloned().collect();
        if let Some(criterion) = self.criteria.effective() {
            view.sort_by(|a, b| criterion.compare(a, b));
        }
        view
    }
}

/// What the hirer sees after pressing "Contact" on a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactCard {
    pub fn for_candidate(candidate: &Candidate, phone: &str) -> Self {
        let local_part = candidate.name.to_lowercase().replacen(' ', ".", 1);
        Self {
            name: candidate.name.clone(),
            phone: phone.to_owned(),
            email: format!("{local_part}@example.com"),
        }
    }
}
