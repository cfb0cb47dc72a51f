//! End-to-end tests: session, dispatcher, credential manager and workflows
//! against a mock validation service.

use std::sync::Arc;

use tldcheck_core::{
    interpret_cache_info, CacheInfoReader, CredentialManager, CredentialStore, Session,
    ValidationService, WorkflowError,
};
use tldcheck_domain::{CacheReport, Credential, Freshness, OutcomeKind};
use tldcheck_infra::{ApiClient, ApiClientConfig, FileCredentialStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    session: Arc<Session>,
    store: Arc<FileCredentialStore>,
    manager: CredentialManager,
    validation: ValidationService,
    cache: CacheInfoReader,
    _dir: tempfile::TempDir,
}

fn harness(server: &MockServer) -> Harness {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Arc::new(FileCredentialStore::new(dir.path().join("credentials.json"), "tld-api-key"));
    let session = Arc::new(Session::new());

    let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
    let api = Arc::new(ApiClient::new(config, session.clone()).expect("api client"));

    Harness {
        manager: CredentialManager::new(api.clone(), store.clone(), session.clone()),
        validation: ValidationService::new(api.clone(), session.clone()),
        cache: CacheInfoReader::new(api),
        session,
        store,
        _dir: dir,
    }
}

#[tokio::test]
async fn generated_key_is_persisted_and_sent_on_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "key": "fresh-key-123",
            "message": "API key generated successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/validate-tld"))
        .and(header("X-API-Key", "fresh-key-123"))
        .and(body_json(serde_json::json!({"domain": "example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "is_valid": true,
            "message": "TLD 'com' is valid",
            "tld": "com",
            "domain": "example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    let credential = h.manager.generate().await.expect("generate");
    let outcome = h.validation.validate_domain(" example.com ").await.expect("validate");

    assert_eq!(credential, Credential::new("fresh-key-123"));
    assert_eq!(h.store.load().unwrap(), Some(Credential::new("fresh-key-123")));
    assert_eq!(outcome.kind, OutcomeKind::Success);
    assert_eq!(outcome.to_string(), "Success: TLD 'com' is valid");
}

#[tokio::test]
async fn saved_key_is_loaded_on_startup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/validate-tld"))
        .and(header("X-API-Key", "saved-key"))
        .and(body_json(serde_json::json!({"tld": "zz"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "is_valid": false,
            "message": "TLD 'zz' is not valid"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.store.save(&Credential::new("saved-key")).unwrap();

    assert_eq!(h.manager.load().unwrap(), Some(Credential::new("saved-key")));
    let outcome = h.validation.validate_tld("zz").await.expect("validate");

    assert_eq!(outcome.to_string(), "Failure: TLD 'zz' is not valid");
}

#[tokio::test]
async fn preconditions_never_reach_the_service() {
    let server = MockServer::start().await;
    let h = harness(&server);

    let empty = h.validation.validate_domain("   ").await.unwrap_err();
    let no_key = h.validation.validate_tld("com").await.unwrap_err();

    assert_eq!(empty.to_string(), "Please enter a domain name");
    assert_eq!(no_key.to_string(), "Please generate an API key first");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejected_key_surfaces_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/validate-tld"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "invalid key"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session.replace(Credential::new("revoked"));

    let err = h.validation.validate_tld("com").await.unwrap_err();

    assert!(matches!(&err, WorkflowError::Api(api) if api.is_auth_failure()));
    assert_eq!(err.to_string(), "invalid key");
}

#[tokio::test]
async fn cache_info_reports_stale_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cache-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tld_count": 1500,
            "last_updated": "2024-01-01T00:00:00Z",
            "is_fresh": false
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    let report = h.cache.refresh_cache_info().await.expect("cache info");

    match report {
        CacheReport::Available { tld_count, freshness, ref last_updated } => {
            assert_eq!(tld_count, 1500);
            assert_eq!(freshness, Freshness::Stale);
            assert!(!last_updated.is_empty());
        }
        CacheReport::Unavailable => panic!("expected cache details"),
    }
}

#[tokio::test]
async fn cache_info_without_timestamp_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cache-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tld_count": 0,
            "last_updated": null,
            "is_fresh": false
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    let report = h.cache.refresh_cache_info().await.expect("cache info");

    assert_eq!(report, CacheReport::Unavailable);
    assert_eq!(report.to_string(), "No cache information available");
    assert_eq!(interpret_cache_info(Default::default()), CacheReport::Unavailable);
}

#[tokio::test]
async fn list_keys_sends_active_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/keys"))
        .and(header("X-API-Key", "admin-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"key": "admin-key", "created_at": "2024-05-01T10:00:00", "usage_count": 3, "is_active": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session.replace(Credential::new("admin-key"));

    let keys = h.manager.list_keys().await.expect("keys");

    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].usage_count, 3);
    assert!(keys[0].is_active);
}
