//! 매칭 요청 목록 뷰
//!
//! 마운트 시 전체 컬렉션을 한 번 가져온다. 상태 탭은 이미 받아 둔
//! 데이터를 클라이언트에서 거르는 유일한 지점이며, 탭 전환은 네트워크
//! 호출을 일으키지 않는다. 수락/거절/삭제는 호출 한 번 뒤 전체 재조회
//! 한 번이다 — 낙관적 갱신은 없고, 화면은 백엔드가 돌려준 상태만
//! 보여준다.


use crate::api::transport::HttpTransport;
use crate::api::{ApiClient, ApiError};
use crate::fetch_guard::FetchGuard;
use crate::models::{MatchingRequest, MatchingStatus, StatusFilter};
use crate::session::store::TokenStore;
use crate::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

/// 상태 변경 한 번 + 전체 재조회 한 번. 재조회 결과가 새 목록이 된다.
pub async fn resolve_request<C, S>(
    api: &ApiClient<C, S>,
    id: u32,
    status: MatchingStatus,
) -> Result<Vec<MatchingRequest>, ApiError>
where
    C: HttpTransport,
    S: TokenStore,
{
    api.update_request_status(id, status).await?;
    api.matching_requests().await
}

/// 삭제 한 번 + 전체 재조회 한 번
pub async fn remove_request<C, S>(
    api: &ApiClient<C, S>,
    id: u32,
) -> Result<Vec<MatchingRequest>, ApiError>
where
    C: HttpTransport,
    S: TokenStore,
{
    api.delete_request(id).await?;
    api.matching_requests().await
}

#[component]
pub fn RequestListPage() -> impl IntoView {
    let api = use_api();

    let (requests, set_requests) = signal(Vec::<MatchingRequest>::new());
    let (filter, set_filter) = signal(StatusFilter::All);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    // 삭제 확인 대기 중인 요청 id
    let (delete_target, set_delete_target) = signal(Option::<u32>::None);

    let guard = FetchGuard::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 마운트 시 1회 전체 조회
    Effect::new({
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let api = api.clone();
            let guard = guard.clone();
            let ticket = guard.begin();
            set_loading.set(true);
            spawn_local(async move {
                let result = api.matching_requests().await;
                if !guard.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(list) => set_requests.set(list),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("매칭 요청 목록 로드 실패: {}", e).into(),
                        );
                        set_error_msg
                            .set(Some(e.display("매칭 요청 목록을 불러올 수 없습니다.")));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    // 탭 필터는 메모리의 컬렉션에만 적용된다
    let filtered = Signal::derive(move || requests.with(|list| filter.get().apply(list)));

    let handle_action = {
        let api = api.clone();
        let guard = guard.clone();
        move |id: u32, status: MatchingStatus| {
            set_error_msg.set(None);
            let api = api.clone();
            let guard = guard.clone();
            let ticket = guard.begin();
            spawn_local(async move {
                match resolve_request(&api, id, status).await {
                    Ok(list) => {
                        if !guard.is_current(ticket) {
                            return;
                        }
                        set_requests.set(list);
                        let verb = if status == MatchingStatus::Accepted {
                            "수락"
                        } else {
                            "거절"
                        };
                        set_success_msg.set(Some(format!("매칭 요청을 {}했습니다.", verb)));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("매칭 요청 처리 실패: {}", e).into());
                        set_error_msg.set(Some(e.display("매칭 요청 처리에 실패했습니다.")));
                    }
                }
            });
        }
    };

    // 삭제는 다이얼로그에서 확인된 뒤에만 전송된다
    let handle_delete_confirmed = {
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let Some(id) = delete_target.get() else {
                return;
            };
            set_error_msg.set(None);
            set_delete_target.set(None);
            let api = api.clone();
            let guard = guard.clone();
            let ticket = guard.begin();
            spawn_local(async move {
                match remove_request(&api, id).await {
                    Ok(list) => {
                        if !guard.is_current(ticket) {
                            return;
                        }
                        set_requests.set(list);
                        set_success_msg.set(Some("매칭 요청을 삭제했습니다.".to_string()));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("매칭 요청 삭제 실패: {}", e).into());
                        set_error_msg.set(Some(e.display("매칭 요청 삭제에 실패했습니다.")));
                    }
                }
            });
        }
    };

    // 확인 다이얼로그 열기/닫기
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if delete_target.get().is_some() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    // 3초 후 성공 메시지 제거
    Effect::new(move |_| {
        if success_msg.get().is_some() {
            set_timeout(
                move || set_success_msg.set(None),
                Duration::from_secs(3),
            );
        }
    });

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8 space-y-4">
            <h1 class="text-3xl font-bold">"매칭 요청 관리"</h1>

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

            // 상태별 탭 (클라이언트측 필터)
            <div role="tablist" class="tabs tabs-boxed w-fit">
                {StatusFilter::TABS
                    .iter()
                    .map(|&tab| {
                        view! {
                            <a
                                role="tab"
                                class=move || if filter.get() == tab { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_filter.set(tab)
                            >
                                {tab.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && filtered.with(Vec::is_empty)>
                <div role="alert" class="alert alert-info">
                    <span>{move || filter.get().empty_message()}</span>
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <For
                    each=move || filtered.get()
                    key=|request| request.id
                    children={
                        let handle_action = handle_action.clone();
                        move |request: MatchingRequest| {
                            let id = request.id;
                            let accept = handle_action.clone();
                            let reject = handle_action.clone();
                            let is_pending = request.status == MatchingStatus::Pending;
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body space-y-2">
                                        <div class="flex items-center gap-3">
                                            <div class="avatar">
                                                <div class="w-12 rounded-full">
                                                    <img src=request.display_image().unwrap_or_default().to_string() alt="프로필" />
                                                </div>
                                            </div>
                                            <div class="flex-1">
                                                <h2 class="font-bold">{request.display_name().to_string()}</h2>
                                                <p class="text-sm text-base-content/70">
                                                    {request.created_date().to_string()}
                                                </p>
                                            </div>
                                            <span class=request.status.badge_class()>
                                                {request.status.label()}
                                            </span>
                                        </div>

                                        <p class="text-sm">
                                            <strong>"메시지: "</strong>
                                            {request.message.clone()}
                                        </p>

                                        <div class="card-actions">
                                            <Show when=move || is_pending>
                                                <button
                                                    class="btn btn-success btn-sm"
                                                    on:click={
                                                        let accept = accept.clone();
                                                        move |_| accept(id, MatchingStatus::Accepted)
                                                    }
                                                >
                                                    "수락"
                                                </button>
                                                <button
                                                    class="btn btn-error btn-sm"
                                                    on:click={
                                                        let reject = reject.clone();
                                                        move |_| reject(id, MatchingStatus::Rejected)
                                                    }
                                                >
                                                    "거절"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn btn-outline btn-error btn-sm"
                                                on:click=move |_| set_delete_target.set(Some(id))
                                            >
                                                "삭제"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    }
                />
            </div>

            // 삭제 확인 다이얼로그
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_delete_target.set(None)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"매칭 요청 삭제"</h3>
                    <p class="py-4">
                        "정말로 이 매칭 요청을 삭제하시겠습니까? 삭제된 요청은 복구할 수 없습니다."
                    </p>
                    <div class="modal-action">
                        <button class="btn btn-ghost" on:click=move |_| set_delete_target.set(None)>
                            "취소"
                        </button>
                        <button class="btn btn-error" on:click=handle_delete_confirmed>
                            "삭제"
                        </button>
                    </div>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
