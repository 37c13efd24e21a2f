//! 멘토-멘티 매칭 프런트엔드
//!
//! Context-Driven 구조:
//! - `api`: 백엔드 HTTP 클라이언트 (+ 전송 계층 심)
//! - `session`: 세션 상태의 단일 진실 공급원
//! - `fetch_guard`: 추월된 fetch 응답 무시 (last-request-wins)
//! - `models`: 와이어 타입
//! - `components`: UI 컴포넌트 계층

pub mod api;
pub mod fetch_guard;
pub mod models;
pub mod session;

mod components {
    pub mod home;
    pub mod login;
    pub mod mentor_detail;
    pub mod mentor_list;
    pub mod navbar;
    pub mod profile;
    pub mod request_list;
    pub mod signup;
}

use crate::api::ApiClient;
use crate::api::transport::FetchTransport;
use crate::components::home::HomePage;
use crate::components::login::LoginForm;
use crate::components::mentor_detail::MentorDetailPage;
use crate::components::mentor_list::MentorListPage;
use crate::components::navbar::Navbar;
use crate::components::profile::ProfilePage;
use crate::components::request_list::RequestListPage;
use crate::components::signup::SignupForm;
use crate::session::SessionContext;
use crate::session::store::BrowserTokens;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

/// 프로덕션 API 클라이언트 타입
pub type Api = ApiClient<FetchTransport, BrowserTokens>;

/// Context에서 API 클라이언트를 꺼낸다
pub(crate) fn use_api() -> Api {
    use_context::<Api>().expect("ApiClient should be provided")
}

/// 로그인 라우트: 성공 시 홈으로 이동하는 continuation을 공급한다
#[component]
fn LoginRoute() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <LoginForm on_login=move |_| navigate("/", Default::default()) />
    }
}

/// 회원가입 라우트: 성공 시 로그인 페이지로 이동한다
#[component]
fn SignupRoute() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <SignupForm on_signup=move |_| navigate("/login", Default::default()) />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"페이지를 찾을 수 없습니다."</p>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 공유 API 클라이언트 (고정 베이스 경로 + bearer 인터셉터)
    let api = Api::new(FetchTransport, BrowserTokens);
    provide_context(api);

    // 2. 세션 컨텍스트: 저장소의 토큰으로 초기화
    let session = SessionContext::new();
    provide_context(session);
    session::init_session(&session, &BrowserTokens);

    view! {
        <Router>
            <Navbar />
            <main class="min-h-screen bg-base-200">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginRoute />
                    <Route path=path!("/signup") view=SignupRoute />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/mentors") view=MentorListPage />
                    <Route path=path!("/mentors/:id") view=MentorDetailPage />
                    <Route path=path!("/requests") view=RequestListPage />
                </Routes>
            </main>
        </Router>
    }
}
