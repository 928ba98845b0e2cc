#![cfg(feature = "anthropic")]

use std::sync::Arc;

use byok_catalog::catalog::{CatalogService, Origin, OverrideTable, RemoteCatalogFetcher};
use byok_catalog::eligibility::AccountTierFlags;
use byok_catalog::error::{CatalogError, ErrorCategory};
use byok_catalog::provider::AnthropicModelsFetcher;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(server: &MockServer) -> AnthropicModelsFetcher {
    AnthropicModelsFetcher::new("test-key".to_string(), Some(server.uri()))
}

#[tokio::test]
async fn lists_models_in_api_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"type": "model", "id": "claude-3-7-sonnet-20250219", "display_name": "Claude Sonnet 3.7"},
                {"type": "model", "id": "claude-3-5-haiku-20241022", "display_name": "Claude Haiku 3.5"}
            ],
            "has_more": false,
            "first_id": "claude-3-7-sonnet-20250219",
            "last_id": "claude-3-5-haiku-20241022"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = fetcher(&server).fetch("Anthropic").await.unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.model_id.as_str()).collect();
    assert_eq!(ids, vec!["claude-3-7-sonnet-20250219", "claude-3-5-haiku-20241022"]);
    assert_eq!(entries[0].display_name.as_deref(), Some("Claude Sonnet 3.7"));
    assert_eq!(entries[0].max_input_tokens, None);
}

#[tokio::test]
async fn follows_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("after_id", "page-1-last"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "claude-3-haiku-20240307"}],
            "has_more": false,
            "last_id": "claude-3-haiku-20240307"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "claude-3-opus-20240229"}, {"id": "page-1-last"}],
            "has_more": true,
            "last_id": "page-1-last"
        })))
        .mount(&server)
        .await;

    let entries = fetcher(&server).fetch("anthropic").await.unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.model_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["claude-3-opus-20240229", "page-1-last", "claude-3-haiku-20240307"]
    );
}

#[tokio::test]
async fn cursor_with_reserved_characters_is_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("after_id", "ft:model a&b=c"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "claude-3-haiku-20240307"}],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "ft:model a&b=c"}],
            "has_more": true,
            "last_id": "ft:model a&b=c"
        })))
        .mount(&server)
        .await;

    let entries = fetcher(&server).fetch("Anthropic").await.unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.model_id.as_str()).collect();
    assert_eq!(ids, vec!["ft:model a&b=c", "claude-3-haiku-20240307"]);
}

#[tokio::test]
async fn stops_after_page_limit_when_cursor_never_ends() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "claude-loop"}],
            "has_more": true,
            "last_id": "claude-loop"
        })))
        .expect(16)
        .mount(&server)
        .await;

    let entries = fetcher(&server).fetch("Anthropic").await.unwrap();
    assert_eq!(entries.len(), 16);
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid x-api-key"))
        .mount(&server)
        .await;

    let err = fetcher(&server).fetch("Anthropic").await.unwrap_err();
    assert!(matches!(err, CatalogError::Authentication(_)));
    assert_eq!(err.category(), ErrorCategory::Authentication);
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn other_providers_are_not_requested() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(fetcher(&server).fetch("OpenAI").await.unwrap().is_empty());
}

#[tokio::test]
async fn service_merges_live_list_with_builtin_overrides() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "claude-sonnet-4-20250514", "display_name": "Claude Sonnet 4"},
                {"id": "claude-3-5-haiku-20241022", "display_name": "Claude Haiku 3.5"}
            ],
            "has_more": false
        })))
        .mount(&server)
        .await;

    let service = CatalogService::new(Arc::new(fetcher(&server)), OverrideTable::builtin());
    let catalog = service
        .available_models(&AccountTierFlags::default(), "Anthropic")
        .await
        .unwrap()
        .unwrap();

    let origins: Vec<(&str, Origin)> = catalog
        .iter()
        .map(|m| (m.model_id.as_str(), m.origin))
        .collect();
    assert_eq!(
        origins,
        vec![
            ("claude-sonnet-4-20250514", Origin::Merged),
            ("claude-3-5-haiku-20241022", Origin::Remote),
            ("claude-sonnet-4-0", Origin::Override),
            ("claude-opus-4-20250514", Origin::Override),
            ("claude-opus-4-0", Origin::Override),
        ]
    );
    let haiku = catalog.get("claude-3-5-haiku-20241022").unwrap();
    assert_eq!(haiku.capabilities.display_name, "Claude Haiku 3.5");
    assert_eq!(haiku.capabilities.max_input_tokens, 200_000);
    assert_eq!(haiku.capabilities.max_output_tokens, 32_000);
    assert!(!haiku.capabilities.supports_vision);
}

#[tokio::test]
async fn service_survives_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let service = CatalogService::new(Arc::new(fetcher(&server)), OverrideTable::builtin());
    let catalog = service
        .available_models(&AccountTierFlags::default(), "Anthropic")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(catalog.len(), 4);
    assert!(catalog.iter().all(|m| m.origin == Origin::Override));
}
