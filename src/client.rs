//! Thin async client for the Fastly configuration API.
//!
//! Every request carries the `Fastly-Key` credential header and asks for
//! JSON. Non-success responses are mapped to [`Error::Status`] with the
//! response body preserved, transport failures to [`Error::Network`].

use crate::config::FastlyConfig;
use crate::error::{Error, Result};
use crate::types::{Dictionary, DictionaryItem, ServiceDetails, ServiceVersion};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the five endpoints the update chain touches.
#[derive(Debug, Clone)]
pub struct FastlyClient {
    http_client: reqwest::Client,
    api_base: String,
    api_token: String,
}

impl FastlyClient {
    /// Create a new client from validated configuration.
    pub fn new(config: &FastlyConfig) -> Result<Self> {
        let api_token = config.get_api_token().ok_or_else(|| {
            Error::Config(
                "Fastly API token not provided and FASTLY_API_TOKEN environment variable not set"
                    .to_string(),
            )
        })?;

        // Build HTTP client
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_base: config.get_api_base(),
            api_token,
        })
    }

    /// Service metadata, including its display name.
    pub async fn service_details(&self, service_id: &str) -> Result<ServiceDetails> {
        self.get_json(
            &format!("/service/{}", service_id),
            format!("Failed to fetch service name for {}", service_id),
        )
        .await
    }

    /// All versions of a service.
    pub async fn list_versions(&self, service_id: &str) -> Result<Vec<ServiceVersion>> {
        self.get_json(
            &format!("/service/{}/version", service_id),
            format!("Failed to fetch versions for service {}", service_id),
        )
        .await
    }

    /// Dictionaries attached to a specific service version.
    pub async fn list_dictionaries(
        &self,
        service_id: &str,
        version: u64,
    ) -> Result<Vec<Dictionary>> {
        self.get_json(
            &format!("/service/{}/version/{}/dictionary", service_id, version),
            format!(
                "Failed to fetch dictionaries for service {} version {}",
                service_id, version
            ),
        )
        .await
    }

    /// Items of a dictionary.
    pub async fn list_items(
        &self,
        service_id: &str,
        dictionary_id: &str,
    ) -> Result<Vec<DictionaryItem>> {
        self.get_json(
            &format!("/service/{}/dictionary/{}/items", service_id, dictionary_id),
            format!("Failed to fetch items for dictionary '{}'", dictionary_id),
        )
        .await
    }

    /// Overwrite one item's value. The Fastly API takes a form-encoded body.
    pub async fn update_item(
        &self,
        service_id: &str,
        dictionary_id: &str,
        item_key: &str,
        item_value: &str,
    ) -> Result<DictionaryItem> {
        let url = format!(
            "{}/service/{}/dictionary/{}/item/{}",
            self.api_base, service_id, dictionary_id, item_key
        );
        debug!(%url, "PUT");

        let response = self
            .http_client
            .put(&url)
            .header("Fastly-Key", &self.api_token)
            .header("Accept", "application/json")
            .form(&[("item_value", item_value)])
            .send()
            .await?;

        Self::decode(
            response,
            format!(
                "Failed to update item '{}' in dictionary '{}'",
                item_key, dictionary_id
            ),
        )
        .await
    }

    /// Execute a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, context: String) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);
        debug!(%url, "GET");

        let response = self
            .http_client
            .get(&url)
            .header("Fastly-Key", &self.api_token)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::decode(response, context).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        context: String,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                context,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
    }
}
