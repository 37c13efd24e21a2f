//! 세션 상태 모듈
//!
//! "로그인 여부"의 단일 진실 공급원. 컴포넌트가 localStorage를 직접
//! 읽는 대신 앱 루트에서 제공되는 컨텍스트 시그널을 구독하므로,
//! 한 컴포넌트의 로그인/로그아웃이 이미 마운트된 다른 컴포넌트에도
//! 즉시 반영된다. 쓰기 경로는 `login`과 `logout` 둘뿐이다.

pub mod store;

#[cfg(test)]
mod tests;

use crate::api::{ApiClient, ApiError};
use crate::api::transport::HttpTransport;
use leptos::prelude::*;
use store::TokenStore;

/// 세션 상태
///
/// 토큰의 존재 여부가 "로그인됨" 렌더링 분기를 결정한다. 유효성은
/// 검사하지 않는다 — 만료는 다음 실패하는 요청에서 드러난다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
}

/// 세션 컨텍스트
///
/// 읽기/쓰기 시그널 쌍. `Copy`라 컴포넌트 간 전달이 쉽다.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 인증 여부 파생 시그널 (Navbar, Home이 구독)
    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().token.is_some())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context에서 세션 컨텍스트를 꺼낸다
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 앱 시작 시 저장소의 토큰을 세션으로 끌어온다
pub fn init_session<S: TokenStore>(ctx: &SessionContext, tokens: &S) {
    let token = tokens.load();
    ctx.set_state.update(|state| state.token = token);
}

/// 자격 증명 검증 후 토큰을 저장소에 기록한다
///
/// 시그널을 건드리지 않는 핵심 경로라 네이티브 타깃에서 그대로
/// 테스트된다.
pub async fn authenticate<C, S>(
    api: &ApiClient<C, S>,
    email: &str,
    password: &str,
) -> Result<String, ApiError>
where
    C: HttpTransport,
    S: TokenStore,
{
    let token = api.login(email, password).await?;
    api.tokens().save(&token);
    Ok(token)
}

/// 로그인: 토큰을 저장소와 세션 시그널 양쪽에 기록한다
pub async fn login<C, S>(
    ctx: &SessionContext,
    api: &ApiClient<C, S>,
    email: &str,
    password: &str,
) -> Result<(), ApiError>
where
    C: HttpTransport,
    S: TokenStore,
{
    let token = authenticate(api, email, password).await?;
    ctx.set_state.update(|state| state.token = Some(token));
    Ok(())
}

/// 로그아웃: 저장소와 세션 시그널을 모두 비운다. 리다이렉트는 호출자 몫.
pub fn logout<S: TokenStore>(ctx: &SessionContext, tokens: &S) {
    tokens.clear();
    ctx.set_state.update(|state| state.token = None);
}
