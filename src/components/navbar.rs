//! 상단 내비게이션 바
//!
//! 세션 컨텍스트의 인증 시그널을 구독해 인증/비인증 링크 묶음을
//! 전환한다. localStorage를 직접 읽지 않으므로 리마운트 없이도 즉시
//! 갱신된다.

use crate::session::store::BrowserTokens;
use crate::session::{logout, use_session};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let is_authenticated = session.is_authenticated();

    let on_logout = move |_| {
        logout(&session, &BrowserTokens);
        navigate("/login", Default::default());
    };

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1">
                <A href="/" attr:class="btn btn-ghost text-xl">"멘토-멘티 매칭"</A>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || is_authenticated.get()
                    fallback=|| view! {
                        <A href="/login" attr:class="btn btn-ghost">"로그인"</A>
                        <A href="/signup" attr:class="btn btn-ghost">"회원가입"</A>
                    }
                >
                    <A href="/profile" attr:class="btn btn-ghost">"프로필"</A>
                    <A href="/mentors" attr:class="btn btn-ghost">"멘토목록"</A>
                    <A href="/requests" attr:class="btn btn-ghost">"매칭요청"</A>
                    <button class="btn btn-ghost" on:click=on_logout.clone()>
                        "로그아웃"
                    </button>
                </Show>
            </div>
        </div>
    }
}
