//! 백엔드 HTTP 클라이언트
//!
//! 모든 호출이 고정 베이스 경로(`/api`) 하나를 지나가고, 전송 직전에
//! 토큰 저장소를 읽어 토큰이 있으면 `Authorization: Bearer` 헤더를
//! 붙인다. 응답 인터셉터는 없다: 401을 포함한 모든 비정상 응답은
//! `ApiError`로 돌아가 개별 뷰가 처리한다 (강제 로그아웃 없음).

pub mod transport;

#[cfg(test)]
mod tests;

use crate::models::{
    MatchingRequest, MatchingStatus, MentorSummary, SaveProfileRequest, SignupRequest, UserProfile,
};
use crate::session::store::TokenStore;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use url::form_urlencoded;

/// 고정 API 베이스 경로 (dev 서버 프록시가 백엔드로 넘긴다)
pub const API_BASE: &str = "/api";

/// 모든 엔드포인트 메서드가 돌려주는 오류 계약
///
/// 뷰마다 제각각이던 오류 문자열 처리를 하나의 표시 규칙으로 통일한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 네트워크/전송 실패
    Network(String),
    /// 서버가 돌려준 비정상 상태. `message`는 서버 제공 텍스트
    Status { status: u16, message: Option<String> },
    /// 응답 본문 해석 실패
    Decode(String),
}

impl ApiError {
    /// 표시 규칙: 서버 메시지가 있으면 그것을, 없으면 호출자의 고정
    /// 문구를 보여준다.
    pub fn display(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {}", detail),
            ApiError::Status { status, message } => match message {
                Some(message) => write!(f, "status {}: {}", status, message),
                None => write!(f, "status {}", status),
            },
            ApiError::Decode(detail) => write!(f, "decode error: {}", detail),
        }
    }
}

/// 비정상 응답 본문의 구조화된 메시지 필드
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    url: String,
}

/// 공유 클라이언트 구성 하나로 모든 엔드포인트를 감싼다
///
/// `C`는 전송 계층, `S`는 토큰 저장소. 둘 다 심이라 네이티브 타깃의
/// 테스트에서 mock으로 바꿔 끼울 수 있다.
#[derive(Clone)]
pub struct ApiClient<C, S> {
    transport: C,
    tokens: S,
    base: String,
}

impl<C: HttpTransport, S: TokenStore> ApiClient<C, S> {
    pub fn new(transport: C, tokens: S) -> Self {
        Self {
            transport,
            tokens,
            base: API_BASE.to_string(),
        }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// 요청 인터셉터: 저장소의 토큰을 읽어 bearer 헤더를 붙인다
    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        let mut request = HttpRequest::new(method, self.url(path));
        if let Some(token) = self.tokens.load() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }
        request
    }

    fn with_json_body<B: serde::Serialize>(
        request: HttpRequest,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(request
            .header("Content-Type", "application/json")
            .body(text))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Network)?;

        if !response.ok {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.message);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================
    // Endpoints
    // =========================================================

    /// POST /auth/login — 성공 시 토큰 문자열을 돌려준다.
    /// 저장과 세션 반영은 `session::login`의 몫이다.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let request = Self::with_json_body(
            self.request(HttpMethod::Post, "/auth/login"),
            &serde_json::json!({ "email": email, "password": password }),
        )?;
        let response: TokenResponse = self.send_json(request).await?;
        Ok(response.token)
    }

    /// POST /auth/signup
    pub async fn signup(&self, payload: &SignupRequest) -> Result<(), ApiError> {
        let request =
            Self::with_json_body(self.request(HttpMethod::Post, "/auth/signup"), payload)?;
        self.send(request).await?;
        Ok(())
    }

    /// GET /auth/profile
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.send_json(self.request(HttpMethod::Get, "/auth/profile"))
            .await
    }

    /// POST /auth/profile — 전체 스냅샷을 한 번에 저장한다
    pub async fn save_profile(&self, snapshot: &SaveProfileRequest) -> Result<(), ApiError> {
        let request =
            Self::with_json_body(self.request(HttpMethod::Post, "/auth/profile"), snapshot)?;
        self.send(request).await?;
        Ok(())
    }

    /// GET /auth/mentors?techStack&sortBy — 검색과 정렬은 전부 서버 몫
    pub async fn mentors(
        &self,
        tech_stack: &str,
        sort_by: &str,
    ) -> Result<Vec<MentorSummary>, ApiError> {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("techStack", tech_stack)
            .append_pair("sortBy", sort_by)
            .finish();
        self.send_json(self.request(HttpMethod::Get, &format!("/auth/mentors?{}", query)))
            .await
    }

    /// GET /auth/mentors/:id
    pub async fn mentor(&self, id: u32) -> Result<MentorSummary, ApiError> {
        self.send_json(self.request(HttpMethod::Get, &format!("/auth/mentors/{}", id)))
            .await
    }

    /// POST /auth/matching-requests
    pub async fn send_matching_request(
        &self,
        mentor_id: u32,
        message: &str,
    ) -> Result<(), ApiError> {
        let request = Self::with_json_body(
            self.request(HttpMethod::Post, "/auth/matching-requests"),
            &serde_json::json!({ "mentorId": mentor_id, "message": message }),
        )?;
        self.send(request).await?;
        Ok(())
    }

    /// GET /matching/requests — 현재 사용자의 요청 전체
    pub async fn matching_requests(&self) -> Result<Vec<MatchingRequest>, ApiError> {
        self.send_json(self.request(HttpMethod::Get, "/matching/requests"))
            .await
    }

    /// PATCH /matching/requests/:id — 상태 전이는 서버가 수행한다
    pub async fn update_request_status(
        &self,
        id: u32,
        status: MatchingStatus,
    ) -> Result<(), ApiError> {
        let request = Self::with_json_body(
            self.request(HttpMethod::Patch, &format!("/matching/requests/{}", id)),
            &serde_json::json!({ "status": status }),
        )?;
        self.send(request).await?;
        Ok(())
    }

    /// DELETE /matching/requests/:id
    pub async fn delete_request(&self, id: u32) -> Result<(), ApiError> {
        self.send(self.request(HttpMethod::Delete, &format!("/matching/requests/{}", id)))
            .await?;
        Ok(())
    }

    /// POST /auth/profile/upload — multipart 업로드
    ///
    /// FormData 본문은 텍스트 전송 계층을 지나갈 수 없으므로 `gloo_net`으로
    /// 직접 보낸다. bearer 헤더는 같은 방식으로 붙는다.
    pub async fn upload_profile_image(&self, file: &web_sys::File) -> Result<String, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("FormData 생성 실패: {:?}", e)))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Network(format!("FormData 구성 실패: {:?}", e)))?;

        let mut builder = gloo_net::http::Request::post(&self.url("/auth/profile/upload"));
        if let Some(token) = self.tokens.load() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        // Content-Type은 브라우저가 multipart boundary와 함께 채운다
        let response = builder
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.message);
            return Err(ApiError::Status { status, message });
        }

        let parsed: UploadResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.url)
    }
}
