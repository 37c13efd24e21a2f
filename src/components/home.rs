//! 홈 페이지
//!
//! 히어로 / 기능 소개 / CTA 섹션. 행동 버튼 묶음은 세션 컨텍스트의
//! 인증 시그널로 전환된다.

use crate::session::use_session;
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "👤",
        "간편한 회원가입",
        "멘토 또는 멘티로 쉽게 가입하고 프로필을 작성하세요.",
    ),
    ("👥", "멘토 검색", "기술 스택별로 원하는 멘토를 찾아보세요."),
    (
        "🤝",
        "매칭 요청",
        "관심 있는 멘토에게 매칭 요청을 보내보세요.",
    ),
    (
        "⚙️",
        "프로필 관리",
        "자신의 프로필과 매칭 상태를 관리하세요.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated();

    view! {
        <div class="max-w-5xl mx-auto px-4 py-16 space-y-16">
            // 히어로 섹션
            <div class="text-center space-y-4">
                <h1 class="text-5xl font-bold">"멘토-멘티 매칭 플랫폼"</h1>
                <p class="text-xl text-base-content/70">
                    "경험 있는 멘토와 성장하고 싶은 멘티를 연결하는 플랫폼"
                </p>
                <div class="flex gap-2 justify-center mt-8">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=|| view! {
                            <A href="/signup" attr:class="btn btn-primary btn-lg">"회원가입"</A>
                            <A href="/login" attr:class="btn btn-outline btn-lg">"로그인"</A>
                        }
                    >
                        <A href="/mentors" attr:class="btn btn-primary btn-lg">"멘토 찾기"</A>
                        <A href="/profile" attr:class="btn btn-outline btn-lg">"내 프로필"</A>
                    </Show>
                </div>
            </div>

            // 기능 소개
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4">
                {FEATURES
                    .iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <div class="card bg-base-100 shadow text-center">
                                <div class="card-body items-center">
                                    <div class="text-4xl">{*icon}</div>
                                    <h3 class="card-title text-lg">{*title}</h3>
                                    <p class="text-sm text-base-content/70">{*description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            // CTA 섹션 (비로그인 상태에서만)
            <Show when=move || !is_authenticated.get()>
                <div class="text-center bg-base-100 rounded-box shadow p-8 space-y-2">
                    <h2 class="text-3xl font-bold">"지금 시작하세요"</h2>
                    <p class="text-base-content/70">
                        "멘토가 되어 경험을 공유하거나, 멘티가 되어 새로운 것을 배워보세요."
                    </p>
                    <A href="/signup" attr:class="btn btn-primary mt-4">"무료로 시작하기"</A>
                </div>
            </Show>
        </div>
    }
}
