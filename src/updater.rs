//! Per-service lookup/update chain and batch orchestration.
//!
//! For each service the chain is strictly linear: resolve the display name,
//! find the active version, locate the `Edge_Security` dictionary, find the
//! `Enabled` item, overwrite its value. The first error short-circuits the
//! chain and becomes that service's failure record; the batch itself never
//! stops early.

use crate::client::FastlyClient;
use crate::error::{Error, Result};
use crate::types::{DictionaryItem, UpdateOutcome};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Name of the dictionary holding the edge security toggle.
pub const DICTIONARY_NAME: &str = "Edge_Security";

/// Key of the toggle item inside the dictionary.
pub const ITEM_KEY: &str = "Enabled";

/// Label used when the service name cannot be resolved.
const UNKNOWN_SERVICE_NAME: &str = "Unknown";

/// Run the update chain for every service in `service_ids`.
///
/// Services are processed one at a time, in input order. The returned map
/// holds exactly one outcome per distinct service ID; a repeated ID keeps
/// the position of its first occurrence and the outcome of its last run.
pub async fn run(
    client: &FastlyClient,
    service_ids: &[String],
    new_value: i64,
) -> IndexMap<String, UpdateOutcome> {
    let mut results = IndexMap::new();

    for service_id in service_ids {
        // A failed name lookup is not fatal; the rest of the chain still
        // runs with the fallback label.
        let service_name = match client.service_details(service_id).await {
            Ok(details) => details
                .name
                .unwrap_or_else(|| UNKNOWN_SERVICE_NAME.to_string()),
            Err(err) => {
                warn!(
                    service_id = %service_id,
                    error = %err,
                    error_type = err.error_type(),
                    "failed to resolve service name"
                );
                UNKNOWN_SERVICE_NAME.to_string()
            }
        };

        let outcome = match update_service(client, service_id, new_value).await {
            Ok(item) => {
                info!(
                    service_id = %service_id,
                    service_name = %service_name,
                    item_value = %item.item_value,
                    "item updated"
                );
                UpdateOutcome::Updated { service_name, item }
            }
            Err(err) => {
                warn!(
                    service_id = %service_id,
                    error = %err,
                    error_type = err.error_type(),
                    "update failed"
                );
                UpdateOutcome::Failed {
                    service_name,
                    error: err.to_string(),
                }
            }
        };

        results.insert(service_id.clone(), outcome);
    }

    results
}

/// The linear lookup/update chain for one service.
async fn update_service(
    client: &FastlyClient,
    service_id: &str,
    new_value: i64,
) -> Result<DictionaryItem> {
    let version = active_version(client, service_id).await?;
    debug!(service_id = %service_id, version, "resolved active version");

    let dictionaries = client.list_dictionaries(service_id, version).await?;
    let dictionary = dictionaries
        .into_iter()
        .find(|d| d.name == DICTIONARY_NAME)
        .ok_or_else(|| Error::DictionaryNotFound(DICTIONARY_NAME.to_string()))?;

    let items = client.list_items(service_id, &dictionary.id).await?;
    if !items.iter().any(|item| item.item_key == ITEM_KEY) {
        return Err(Error::ItemNotFound {
            item: ITEM_KEY.to_string(),
            dictionary: DICTIONARY_NAME.to_string(),
        });
    }

    client
        .update_item(service_id, &dictionary.id, ITEM_KEY, &new_value.to_string())
        .await
}

/// First version flagged active; exactly one is expected.
async fn active_version(client: &FastlyClient, service_id: &str) -> Result<u64> {
    let versions = client.list_versions(service_id).await?;
    versions
        .iter()
        .find(|v| v.active)
        .map(|v| v.number)
        .ok_or_else(|| Error::NoActiveVersion(service_id.to_string()))
}
