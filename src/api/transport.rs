//! HTTP 전송 계층
//!
//! `ApiClient` 아래의 교체 가능한 심이다. 프로덕션에서는 `FetchTransport`가
//! `gloo_net`의 fetch를 구동하고, 테스트에서는 `MockTransport`가 나가는
//! 요청을 기록하면서 준비된 응답을 돌려준다.
//!
//! 재시도 없음, 취소 없음, 전송 기본값 이상의 타임아웃 없음.

use async_trait::async_trait;

/// HTTP 요청 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// 전송 계층으로 내려가는 요청 한 건
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// 이름으로 헤더 값을 찾는다 (대소문자 구분 없음)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// 상태 코드와 본문 텍스트만 남긴 응답
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

/// 전송 계층 심
///
/// 단일 스레드 브라우저 환경이므로 `?Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// 브라우저 fetch 기반 프로덕션 전송
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            HttpMethod::Get => gloo_net::http::Request::get(&request.url),
            HttpMethod::Post => gloo_net::http::Request::post(&request.url),
            HttpMethod::Patch => gloo_net::http::Request::patch(&request.url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body).map_err(|e| e.to_string())?,
            None => builder.build().map_err(|e| e.to_string())?,
        };

        let response = built.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(HttpResponse { status, ok, body })
    }
}

// =========================================================
// Test transport
// =========================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// 나가는 요청을 전부 기록하고, (메서드, URL) 키로 등록된 응답을
    /// 돌려주는 테스트용 전송
    #[derive(Clone, Default)]
    pub struct MockTransport {
        inner: Rc<MockInner>,
    }

    #[derive(Default)]
    struct MockInner {
        log: RefCell<Vec<HttpRequest>>,
        responses: RefCell<HashMap<String, (u16, String)>>,
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// (메서드, URL)에 대한 응답 등록
        pub fn respond(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
            self.inner
                .responses
                .borrow_mut()
                .insert(key(method, url), (status, body.to_string()));
        }

        /// 지금까지 기록된 요청 전부
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.inner.log.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.inner.log.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
            let lookup = key(request.method, &request.url);
            self.inner.log.borrow_mut().push(request);

            match self.inner.responses.borrow().get(&lookup) {
                Some((status, body)) => Ok(HttpResponse {
                    status: *status,
                    ok: (200..300).contains(status),
                    body: body.clone(),
                }),
                None => Err(format!("등록되지 않은 요청: {}", lookup)),
            }
        }
    }
}
