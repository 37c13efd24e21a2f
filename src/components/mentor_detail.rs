//! 멘토 상세 뷰
//!
//! 라우트 파라미터의 id로 멘토 한 명을 조회한다. id가 없거나 숫자가
//! 아니면 곧바로 not-found 상태를 렌더링한다. 매칭 요청 작성은
//! `request_dialog`로 분리되어 있다.

mod request_dialog;

use crate::models::MentorSummary;
use crate::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use request_dialog::RequestDialog;
use std::time::Duration;

#[component]
pub fn MentorDetailPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let params = use_params_map();

    let (mentor, set_mentor) = signal(Option::<MentorSummary>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let dialog_open = RwSignal::new(false);

    // 라우트 파라미터의 id로 조회
    Effect::new({
        let api = api.clone();
        move |_| {
            let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));
            let Some(id) = id else {
                // 해석 불가한 id는 not-found로 처리
                set_loading.set(false);
                return;
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.mentor(id).await {
                    Ok(found) => set_mentor.set(Some(found)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("멘토 정보 로드 실패: {}", e).into());
                        set_error_msg.set(Some(e.display("멘토 정보를 불러올 수 없습니다.")));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    // 요청 전송 성공: 확인 문구를 띄우고 3초 후 요청 목록으로 이동
    let on_sent = {
        let navigate = navigate.clone();
        move |_| {
            set_success_msg.set(Some("매칭 요청을 보냈습니다.".to_string()));
            let navigate = navigate.clone();
            set_timeout(
                move || navigate("/requests", Default::default()),
                Duration::from_secs(3),
            );
        }
    };

    let back_nav = navigate.clone();
    let on_back = move |_| back_nav("/mentors", Default::default());
    let on_back_missing = on_back.clone();

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-4">
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| set_error_msg.set(None)>
                        "닫기"
                    </button>
                </div>
            </Show>

            <Show when=move || success_msg.get().is_some()>
                <div role="alert" class="alert alert-success">
                    <span>{move || success_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            // not-found 상태
            <Show when=move || !loading.get() && mentor.get().is_none()>
                <div role="alert" class="alert alert-error">
                    <span>"멘토 정보를 찾을 수 없습니다."</span>
                </div>
                <button class="btn btn-ghost" on:click=on_back_missing.clone()>
                    "멘토 목록으로 돌아가기"
                </button>
            </Show>

            {move || {
                mentor.get().map(|found| {
                    let mentor_id = found.id;
                    let mentor_name = found.name.clone();
                    let introduction = if found.introduction.is_empty() {
                        "소개글이 없습니다.".to_string()
                    } else {
                        found.introduction.clone()
                    };
                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body space-y-4">
                                <div class="flex gap-6 items-center">
                                    <div class="avatar">
                                        <div class="w-28 rounded-full">
                                            <img src=found.profile_image_url.clone() alt=found.name.clone() />
                                        </div>
                                    </div>
                                    <div class="space-y-1">
                                        <h1 class="text-3xl font-bold">{found.name.clone()}</h1>
                                        <p class="text-base-content/70">{found.email.clone()}</p>
                                        <div class="flex flex-wrap gap-1">
                                            {found
                                                .skills
                                                .iter()
                                                .cloned()
                                                .map(|skill| view! {
                                                    <span class="badge badge-outline">{skill}</span>
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>

                                <div>
                                    <h2 class="text-lg font-bold mb-1">"소개"</h2>
                                    <p>{introduction}</p>
                                </div>

                                <div class="card-actions">
                                    <button class="btn btn-primary" on:click=move |_| dialog_open.set(true)>
                                        "매칭 요청하기"
                                    </button>
                                    <button class="btn btn-outline" on:click=on_back.clone()>
                                        "목록으로 돌아가기"
                                    </button>
                                </div>
                            </div>
                        </div>

                        <RequestDialog
                            open=dialog_open
                            mentor_id=mentor_id
                            mentor_name=mentor_name
                            on_sent=on_sent.clone()
                        />
                    }
                })
            }}
        </div>
    }
}
