use connekta_login::util::storage::MemoryStore;
use serde_json::json;

use super::*;
use crate::test_server::serve_once;

fn client(base: &str) -> ApiClient {
    ApiClient::new(ApiConfig::new(base))
}

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(Duration::from_secs(5)).unwrap()
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_returns_session_and_writes_store() {
    let (base, server) = serve_once("200 OK", r#"{"token":"abc","user":{"name":"Ada"}}"#).await;
    let store = MemoryStore::new();

    let (session, email) = login(&transport(), &store, &client(&base), " ada@example.com ".to_owned(), "pw".to_owned())
        .await
        .unwrap();

    assert_eq!(session.token, "abc");
    assert_eq!(email, " ada@example.com ");
    assert_eq!(store.get_item("token").as_deref(), Some("abc"));
    server.await.unwrap();
}

#[tokio::test]
async fn login_fails_when_session_file_cannot_be_written() {
    let (base, server) = serve_once("200 OK", r#"{"token":"abc","user":{"id":1}}"#).await;
    let dir = std::env::temp_dir().join(format!("connekta-missing-{}", uuid::Uuid::new_v4()));
    let store = FileStore::new(dir.join("session.json"));

    let err = login(&transport(), &store, &client(&base), "a@b.c".to_owned(), "pw".to_owned())
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Storage(StorageError::Write { .. })), "got {err:?}");
    assert!(!store.path().exists());
    server.await.unwrap();
}

#[tokio::test]
async fn rejected_login_carries_form_error() {
    let (base, server) = serve_once("401 Unauthorized", r#"{"message":"Bad credentials"}"#).await;
    let store = MemoryStore::new();

    let err = login(&transport(), &store, &client(&base), "a@b.c".to_owned(), "pw".to_owned())
        .await
        .unwrap_err();

    assert!(matches!(&err, CliError::LoginFailed(message) if message == "Bad credentials"));
    assert_eq!(store.get_item("token"), None);
    server.await.unwrap();
}

// =============================================================
// response_json
// =============================================================

#[test]
fn success_body_is_returned() {
    let resp = RawResponse::from_text(200, r#"[{"id":1}]"#);
    assert_eq!(response_json(resp).unwrap(), json!([{ "id": 1 }]));
}

#[test]
fn empty_success_body_is_null() {
    let resp = RawResponse::from_text(204, "");
    assert_eq!(response_json(resp).unwrap(), Value::Null);
}

#[test]
fn error_status_keeps_status_and_body() {
    let resp = RawResponse::from_text(401, r#"{"error":"expired"}"#);
    match response_json(resp) {
        Err(CliError::ServerError { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, r#"{"error":"expired"}"#);
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[test]
fn error_status_without_body_has_empty_text() {
    let resp = RawResponse::from_text(500, "");
    assert!(matches!(response_json(resp), Err(CliError::ServerError { status: 500, body }) if body.is_empty()));
}
