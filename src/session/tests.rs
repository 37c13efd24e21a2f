use super::store::{MemoryTokens, TokenStore};
use super::*;
use crate::api::transport::mock::MockTransport;
use crate::api::transport::HttpMethod;

fn login_mock(status: u16, body: &str) -> (ApiClient<MockTransport, MemoryTokens>, MockTransport) {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Post, "/api/auth/login", status, body);
    let api = ApiClient::new(transport.clone(), MemoryTokens::new());
    (api, transport)
}

#[tokio::test]
async fn successful_login_stores_the_returned_token() {
    let (api, transport) = login_mock(200, r#"{"token":"issued-token"}"#);

    // LoginForm의 제출 경로: 성공 시 continuation을 정확히 한 번 실행
    let mut continuations = 0;
    if authenticate(&api, "mentor@demo.com", "password123")
        .await
        .is_ok()
    {
        continuations += 1;
    }

    assert_eq!(continuations, 1);
    assert_eq!(api.tokens().get(), Some("issued-token".to_string()));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let (api, _) = login_mock(401, r#"{"message":"invalid credentials"}"#);

    let mut continuations = 0;
    if authenticate(&api, "mentor@demo.com", "wrong").await.is_ok() {
        continuations += 1;
    }

    assert_eq!(continuations, 0);
    assert_eq!(api.tokens().get(), None);
}

#[tokio::test]
async fn login_sends_credentials_as_json() {
    let (api, transport) = login_mock(200, r#"{"token":"t"}"#);
    authenticate(&api, "a@b.c", "pw").await.unwrap();

    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.c", "password": "pw" }));
}

#[test]
fn memory_store_round_trips() {
    let tokens = MemoryTokens::new();
    assert_eq!(tokens.load(), None);

    tokens.save("abc");
    assert_eq!(tokens.load(), Some("abc".to_string()));

    tokens.clear();
    assert_eq!(tokens.load(), None);
}
