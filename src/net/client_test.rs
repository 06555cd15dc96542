use super::*;

fn client() -> ApiClient {
    ApiClient::new(ApiConfig::new("http://localhost:8080"))
}

#[test]
fn new_client_has_no_bearer() {
    let client = client();
    assert_eq!(client.bearer(), None);
    assert_eq!(client.default_headers(), vec![("Accept".to_owned(), "application/json".to_owned())]);
}

#[test]
fn login_request_matches_backend_contract() {
    let req = client()
        .login_request(&LoginRequest::from_input(" a@b.c ", "pw"))
        .unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://localhost:8080/api/auth/login");
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Accept"), Some("application/json"));
    assert!(req.include_credentials);
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.c", "password": "pw" }));
}

#[test]
fn with_bearer_authorizes_later_requests() {
    let authed = client().with_bearer("abc");
    let req = authed.get("/users/all");
    assert_eq!(req.header("Authorization"), Some("Bearer abc"));
    assert_eq!(req.url, "http://localhost:8080/users/all");
    assert_eq!(req.body, None);
}

#[test]
fn with_bearer_leaves_original_untouched() {
    let base = client();
    let _authed = base.with_bearer("abc");
    assert_eq!(base.get("/x").header("Authorization"), None);
}

#[test]
fn without_bearer_drops_authorization() {
    let authed = client().with_bearer("abc");
    let cleared = authed.without_bearer();
    assert_eq!(cleared.bearer(), None);
    assert_eq!(cleared.config(), authed.config());
}
