use super::transport::mock::MockTransport;
use super::transport::HttpMethod;
use super::*;
use crate::models::Role;
use crate::session::store::MemoryTokens;

fn client(
    transport: MockTransport,
    tokens: MemoryTokens,
) -> ApiClient<MockTransport, MemoryTokens> {
    ApiClient::new(transport, tokens)
}

// =========================================================
// Interceptor contract
// =========================================================

#[tokio::test]
async fn bearer_header_is_attached_when_token_present() {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Get, "/api/auth/profile", 200, "{}");

    let api = client(transport.clone(), MemoryTokens::with_token("tok-123"));
    api.profile().await.unwrap();

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header_value("Authorization"), Some("Bearer tok-123"));
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Get, "/api/auth/profile", 200, "{}");

    let api = client(transport.clone(), MemoryTokens::new());
    api.profile().await.unwrap();

    assert_eq!(transport.requests()[0].header_value("Authorization"), None);
}

// =========================================================
// Error contract
// =========================================================

#[tokio::test]
async fn non_2xx_response_carries_server_message() {
    let transport = MockTransport::new();
    transport.respond(
        HttpMethod::Get,
        "/api/matching/requests",
        400,
        r#"{"message":"이미 처리된 요청입니다."}"#,
    );

    let api = client(transport, MemoryTokens::new());
    let err = api.matching_requests().await.unwrap_err();

    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_deref(), Some("이미 처리된 요청입니다."));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // 표시 규칙: 서버 메시지가 고정 문구보다 우선한다
    assert_eq!(err.display("요청 실패"), "이미 처리된 요청입니다.");
}

#[tokio::test]
async fn display_falls_back_when_body_has_no_message() {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Get, "/api/matching/requests", 500, "oops");

    let api = client(transport, MemoryTokens::new());
    let err = api.matching_requests().await.unwrap_err();
    assert_eq!(err.display("매칭 요청 목록을 불러올 수 없습니다."), "매칭 요청 목록을 불러올 수 없습니다.");
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    // 응답 미등록 = 전송 실패
    let api = client(MockTransport::new(), MemoryTokens::new());
    let err = api.profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn undecodable_body_maps_to_decode_error() {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Get, "/api/auth/mentors/3", 200, "not json");

    let api = client(transport, MemoryTokens::new());
    assert!(matches!(
        api.mentor(3).await.unwrap_err(),
        ApiError::Decode(_)
    ));
}

// =========================================================
// Endpoint shapes
// =========================================================

#[tokio::test]
async fn mentors_query_is_form_urlencoded() {
    let transport = MockTransport::new();
    transport.respond(
        HttpMethod::Get,
        "/api/auth/mentors?techStack=React+%EA%B3%A0%EC%88%98&sortBy=name",
        200,
        "[]",
    );

    let api = client(transport.clone(), MemoryTokens::new());
    let mentors = api.mentors("React 고수", "name").await.unwrap();
    assert!(mentors.is_empty());
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn mentor_list_preserves_backend_order() {
    let transport = MockTransport::new();
    transport.respond(
        HttpMethod::Get,
        "/api/auth/mentors?techStack=&sortBy=name",
        200,
        r#"[
            {"id":2,"name":"이멘토","skills":["Vue"]},
            {"id":1,"name":"김멘토","skills":["React"]},
            {"id":3,"name":"박멘토","skills":[]}
        ]"#,
    );

    let api = client(transport, MemoryTokens::new());
    let mentors = api.mentors("", "name").await.unwrap();
    assert_eq!(
        mentors.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![2, 1, 3]
    );
}

#[tokio::test]
async fn signup_posts_role_and_name() {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Post, "/api/auth/signup", 201, "{}");

    let api = client(transport.clone(), MemoryTokens::new());
    api.signup(&SignupRequest {
        email: "mentor@demo.com".to_string(),
        password: "password123".to_string(),
        role: Role::Mentor,
        name: "김멘토".to_string(),
    })
    .await
    .unwrap();

    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["role"], "mentor");
    assert_eq!(body["name"], "김멘토");
}

#[tokio::test]
async fn save_profile_body_omits_skills_for_mentee() {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Post, "/api/auth/profile", 200, "{}");

    let api = client(transport.clone(), MemoryTokens::with_token("t"));
    api.save_profile(&SaveProfileRequest {
        name: "김멘티".to_string(),
        bio: "열심히 배우겠습니다.".to_string(),
        role: Role::Mentee,
        skills: None,
        profile_image_url: String::new(),
    })
    .await
    .unwrap();

    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert!(body.get("skills").is_none());
}

#[tokio::test]
async fn update_status_patches_the_chosen_status() {
    let transport = MockTransport::new();
    transport.respond(HttpMethod::Patch, "/api/matching/requests/7", 200, "{}");

    let api = client(transport.clone(), MemoryTokens::with_token("t"));
    api.update_request_status(7, MatchingStatus::Rejected)
        .await
        .unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].method, HttpMethod::Patch);
    let body: serde_json::Value =
        serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "rejected" }));
}
