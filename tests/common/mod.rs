//! Shared wiremock scaffolding for the integration tests.
//!
//! Every mount helper matches the `Fastly-Key` and `Accept` headers, so a
//! chain that completes against these mocks has also proven that each
//! request carried the credential.

use edgedict::{FastlyClient, FastlyConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// Client pointed at the mock server.
pub fn test_client(server: &MockServer) -> FastlyClient {
    let config = FastlyConfig {
        api_token: Some(TEST_TOKEN.to_string()),
        api_base: Some(server.uri()),
        ..Default::default()
    };
    FastlyClient::new(&config).expect("client creation")
}

/// Client pointed at an address nothing listens on.
pub fn unreachable_client() -> FastlyClient {
    let config = FastlyConfig {
        api_token: Some(TEST_TOKEN.to_string()),
        api_base: Some("http://127.0.0.1:1".to_string()),
        timeout: 5,
        ..Default::default()
    };
    FastlyClient::new(&config).expect("client creation")
}

fn api_get(endpoint: &str) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path(endpoint.to_string()))
        .and(header("Fastly-Key", TEST_TOKEN))
        .and(header("Accept", "application/json"))
}

pub async fn mount_service_details(server: &MockServer, service_id: &str, name: &str) {
    api_get(&format!("/service/{}", service_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": name })))
        .mount(server)
        .await;
}

pub async fn mount_versions(server: &MockServer, service_id: &str, versions: serde_json::Value) {
    api_get(&format!("/service/{}/version", service_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(versions))
        .mount(server)
        .await;
}

pub async fn mount_dictionaries(
    server: &MockServer,
    service_id: &str,
    version: u64,
    dictionaries: serde_json::Value,
) {
    api_get(&format!(
        "/service/{}/version/{}/dictionary",
        service_id, version
    ))
    .respond_with(ResponseTemplate::new(200).set_body_json(dictionaries))
    .mount(server)
    .await;
}

pub async fn mount_items(
    server: &MockServer,
    service_id: &str,
    dictionary_id: &str,
    items: serde_json::Value,
) {
    api_get(&format!(
        "/service/{}/dictionary/{}/items",
        service_id, dictionary_id
    ))
    .respond_with(ResponseTemplate::new(200).set_body_json(items))
    .mount(server)
    .await;
}

pub async fn mount_update(
    server: &MockServer,
    service_id: &str,
    dictionary_id: &str,
    response: ResponseTemplate,
) {
    Mock::given(method("PUT"))
        .and(path(format!(
            "/service/{}/dictionary/{}/item/Enabled",
            service_id, dictionary_id
        )))
        .and(header("Fastly-Key", TEST_TOKEN))
        .and(header("Accept", "application/json"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mount the full happy-path chain for one service: active version 5,
/// dictionary `d1` named Edge_Security next to a decoy, an `Enabled` item,
/// and an update endpoint answering with the new value.
pub async fn mount_happy_service(
    server: &MockServer,
    service_id: &str,
    name: &str,
    new_value: &str,
) {
    mount_service_details(server, service_id, name).await;
    mount_versions(
        server,
        service_id,
        json!([
            { "number": 1, "active": false },
            { "number": 5, "active": true },
            { "number": 6, "active": false }
        ]),
    )
    .await;
    mount_dictionaries(
        server,
        service_id,
        5,
        json!([
            { "id": "d0", "name": "Other" },
            { "id": "d1", "name": "Edge_Security" }
        ]),
    )
    .await;
    mount_items(
        server,
        service_id,
        "d1",
        json!([
            { "item_key": "Banlist", "item_value": "x", "dictionary_id": "d1" },
            { "item_key": "Enabled", "item_value": "0", "dictionary_id": "d1" }
        ]),
    )
    .await;
    mount_update(
        server,
        service_id,
        "d1",
        ResponseTemplate::new(200).set_body_json(json!({
            "item_key": "Enabled",
            "item_value": new_value,
            "dictionary_id": "d1"
        })),
    )
    .await;
}
