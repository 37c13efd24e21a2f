//! 멘토 목록 뷰
//!
//! 검색어나 정렬 키가 바뀔 때마다 쿼리 파라미터로 서버에 다시 요청한다.
//! 받은 결과를 클라이언트에서 다시 거르거나 정렬하지 않는다. 디바운스는
//! 없고, 겹친 fetch는 티켓 가드로 최신 요청만 반영된다.

use crate::fetch_guard::FetchGuard;
use crate::models::MentorSummary;
use crate::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn MentorListPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let (mentors, set_mentors) = signal(Vec::<MentorSummary>::new());
    let (search, set_search) = signal(String::new());
    let (sort, set_sort) = signal("name".to_string());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let guard = FetchGuard::new();

    // 검색어/정렬 키 변경마다 재조회
    Effect::new({
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let tech_stack = search.get();
            let sort_by = sort.get();
            let api = api.clone();
            let guard = guard.clone();
            let ticket = guard.begin();
            set_loading.set(true);
            set_error_msg.set(None);
            spawn_local(async move {
                let result = api.mentors(&tech_stack, &sort_by).await;
                // 더 새 요청이 시작됐으면 이 응답은 버린다
                if !guard.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(list) => set_mentors.set(list),
                    Err(e) => {
                        web_sys::console::error_1(&format!("멘토 목록 로드 실패: {}", e).into());
                        set_error_msg.set(Some(e.display("멘토 목록을 불러올 수 없습니다.")));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8 space-y-4">
            <h1 class="text-3xl font-bold">"멘토 목록"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| set_error_msg.set(None)>
                        "닫기"
                    </button>
                </div>
            </Show>

            // 검색 및 정렬 컨트롤
            <div class="flex flex-wrap gap-2">
                <input
                    type="text"
                    placeholder="기술 스택으로 검색 (예: React, JavaScript, Python)"
                    class="input input-bordered w-full max-w-sm"
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    prop:value=search
                />
                <select
                    class="select select-bordered"
                    on:change=move |ev| set_sort.set(event_target_value(&ev))
                >
                    <option value="name" selected=move || sort.get() == "name">"이름순"</option>
                    <option value="techStack" selected=move || sort.get() == "techStack">"기술스택순"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && mentors.with(Vec::is_empty)>
                <div role="alert" class="alert alert-info">
                    <span>"조건에 맞는 멘토가 없습니다."</span>
                </div>
            </Show>

            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4">
                <For
                    each=move || mentors.get()
                    key=|mentor| mentor.id
                    children={
                        let navigate = navigate.clone();
                        move |mentor: MentorSummary| {
                            let card_nav = navigate.clone();
                            let button_nav = navigate.clone();
                            let id = mentor.id;
                            let introduction = if mentor.introduction.is_empty() {
                                "소개글이 없습니다.".to_string()
                            } else {
                                mentor.introduction.clone()
                            };
                            let shown_skills = mentor.skills.iter().take(3).cloned().collect::<Vec<_>>();
                            let overflow = mentor.skills.len().saturating_sub(3);
                            view! {
                                <div
                                    class="card bg-base-100 shadow hover:shadow-lg cursor-pointer transition-shadow"
                                    on:click=move |_| card_nav(&format!("/mentors/{}", id), Default::default())
                                >
                                    <div class="card-body items-center text-center">
                                        <div class="avatar">
                                            <div class="w-20 rounded-full">
                                                <img src=mentor.profile_image_url.clone() alt=mentor.name.clone() />
                                            </div>
                                        </div>
                                        <h2 class="card-title">{mentor.name.clone()}</h2>
                                        <p class="text-sm text-base-content/70 line-clamp-2">{introduction}</p>
                                        <div class="flex flex-wrap gap-1 justify-center">
                                            {shown_skills
                                                .into_iter()
                                                .map(|skill| view! {
                                                    <span class="badge badge-outline">{skill}</span>
                                                })
                                                .collect_view()}
                                            <Show when=move || { overflow > 0 }>
                                                <span class="badge badge-primary badge-outline">
                                                    {format!("+{}", overflow)}
                                                </span>
                                            </Show>
                                        </div>
                                        <button
                                            class="btn btn-primary btn-sm w-full mt-2"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                button_nav(&format!("/mentors/{}", id), Default::default());
                                            }
                                        >
                                            "상세보기"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </div>
    }
}
