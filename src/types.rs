//! Wire models for the Fastly configuration API and the per-service
//! outcome record.

use serde::Deserialize;

/// Service metadata, as returned by `GET /service/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDetails {
    /// Display name; some partial responses omit it.
    pub name: Option<String>,
}

/// One entry of a service's version list.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceVersion {
    /// Version number.
    pub number: u64,

    /// Whether this version is the live one.
    #[serde(default)]
    pub active: bool,
}

/// A named edge dictionary attached to a service version.
#[derive(Debug, Clone, Deserialize)]
pub struct Dictionary {
    pub id: String,
    pub name: String,
}

/// A single key-value entry within a dictionary.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryItem {
    pub item_key: String,
    pub item_value: String,

    /// Owning dictionary; absent in some payloads.
    #[serde(default)]
    pub dictionary_id: Option<String>,
}

/// Outcome of the update chain for one service.
///
/// Exactly one variant is recorded per service: either the item was updated
/// or the chain failed somewhere, never both.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The item was found and its value overwritten.
    Updated {
        service_name: String,
        item: DictionaryItem,
    },

    /// The chain stopped at some step; `error` carries the description.
    Failed {
        service_name: String,
        error: String,
    },
}

impl UpdateOutcome {
    /// Resolved display name of the service, `"Unknown"` when unobtainable.
    pub fn service_name(&self) -> &str {
        match self {
            UpdateOutcome::Updated { service_name, .. } => service_name,
            UpdateOutcome::Failed { service_name, .. } => service_name,
        }
    }

    /// Error description for failed outcomes.
    pub fn error(&self) -> Option<&str> {
        match self {
            UpdateOutcome::Updated { .. } => None,
            UpdateOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}
