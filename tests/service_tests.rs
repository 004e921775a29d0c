mod auth_support;

use std::sync::{Arc, Mutex};

use devauth::{AuthError, AuthService, ClientConfig, UserPrompt};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_support::InMemoryTokenStore;

#[derive(Default)]
struct RecordingPrompt {
    shown: Mutex<Option<(String, String)>>,
}

impl RecordingPrompt {
    fn shown(&self) -> Option<(String, String)> {
        self.shown.lock().expect("prompt lock poisoned").clone()
    }
}

impl UserPrompt for RecordingPrompt {
    fn display(&self, verification_url: &str, user_code: &str) {
        *self.shown.lock().expect("prompt lock poisoned") =
            Some((verification_url.to_string(), user_code.to_string()));
    }
}

fn service(server: &MockServer, store: Arc<InMemoryTokenStore>) -> AuthService {
    let config = ClientConfig::new("client-123", "secret-456")
        .with_scopes(["email"])
        .with_device_endpoint(format!("{}/device/code", server.uri()))
        .with_token_endpoint(format!("{}/token", server.uri()));
    AuthService::new(config, store)
}

async fn mount_device_endpoint(server: &MockServer, interval: u64) {
    Mock::given(method("POST"))
        .and(path("/device/code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "device_code": "device-123",
            "user_code": "ABCD-EFGH",
            "verification_url": "https://example.com/device",
            "expires_in": 1800,
            "interval": interval
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test(start_paused = true)]
async fn successful_flow_prompts_user_and_persists_token() {
    let server = MockServer::start().await;
    mount_device_endpoint(&server, 5).await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "authorization_pending"
        })))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok123",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-789"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let prompt = RecordingPrompt::default();
    let token = service(&server, store.clone())
        .login(&prompt, CancellationToken::new())
        .await
        .expect("login");

    assert_eq!(token.access_token, "tok123");
    assert_eq!(
        prompt.shown(),
        Some((
            "https://example.com/device".to_string(),
            "ABCD-EFGH".to_string()
        ))
    );

    let stored = store.get().expect("persisted token");
    assert!(!stored.access_token.is_empty());
    assert_eq!(stored.access_token, "tok123");
    assert_eq!(stored.token_type, "Bearer");
    assert_eq!(stored.refresh_token.as_deref(), Some("refresh-789"));
    assert_eq!(stored.client_id, "client-123");
    assert_eq!(stored.client_secret, "secret-456");
    server.verify().await;
}

#[tokio::test(start_paused = true)]
async fn failed_code_request_aborts_before_any_interaction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/device/code"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let prompt = RecordingPrompt::default();
    let result = service(&server, store.clone())
        .login(&prompt, CancellationToken::new())
        .await;

    assert!(matches!(result, Err(AuthError::RequestFailed(_))));
    assert!(prompt.shown().is_none());
    assert!(store.get().is_none());
    server.verify().await;
}

#[tokio::test(start_paused = true)]
async fn denied_flow_leaves_store_untouched() {
    let server = MockServer::start().await;
    mount_device_endpoint(&server, 5).await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "access_denied"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let prompt = RecordingPrompt::default();
    let result = service(&server, store.clone())
        .login(&prompt, CancellationToken::new())
        .await;

    assert!(matches!(result, Err(AuthError::AccessDenied)));
    assert!(prompt.shown().is_some());
    assert!(store.get().is_none());
    server.verify().await;
}

#[tokio::test(start_paused = true)]
async fn expired_flow_leaves_store_untouched() {
    let server = MockServer::start().await;
    mount_device_endpoint(&server, 5).await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "expired_token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let prompt = RecordingPrompt::default();
    let result = service(&server, store.clone())
        .login(&prompt, CancellationToken::new())
        .await;

    assert!(matches!(result, Err(AuthError::Expired)));
    assert!(store.get().is_none());
    server.verify().await;
}

#[tokio::test]
async fn status_reports_seeded_token() {
    let server = MockServer::start().await;
    let store = Arc::new(InMemoryTokenStore::new());
    store.seed(auth_support::token("seeded-access"));

    let svc = service(&server, store);
    let status = svc.status().expect("status");
    assert_eq!(status.expect("token").access_token, "seeded-access");
}

#[tokio::test]
async fn logout_clears_seeded_token() {
    let server = MockServer::start().await;
    let store = Arc::new(InMemoryTokenStore::new());
    store.seed(auth_support::token("seeded-access"));

    let svc = service(&server, store.clone());
    svc.logout().expect("logout");
    assert!(store.get().is_none());
}
