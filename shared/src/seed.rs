//! Static demo records bundled into the binary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::listing::Candidate;

const CANDIDATES: &str = include_str!("../data/candidates.json");
const CLIENTS: &str = include_str!("../data/clients.json");

/// A past job shown in the seeker's client history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub job_title: String,
    pub rating: f64,
    pub phone: String,
    pub email: String,
    pub date: NaiveDate,
}

pub fn candidates() -> Result<Vec<Candidate>> {
    let candidates: Vec<Candidate> = serde_json::from_str(CANDIDATES)?;
    log::debug!("Loaded candidate seed, count={}", candidates.len());
    Ok(candidates)
}

pub fn clients() -> Result<Vec<Client>> {
    let clients: Vec<Client> = serde_json::from_str(CLIENTS)?;
    log::debug!("Loaded client seed, count={}", clients.len());
    Ok(clients)
}
