//! 매칭 요청 작성 다이얼로그
//!
//! 기본 장문 메시지가 미리 채워져 있고, 비어 있지 않아야 전송된다.
//! 전송 실패는 다이얼로그 안에서 서버 메시지 우선으로 표시된다.

use crate::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 제품 기본 요청 메시지
const DEFAULT_REQUEST_MESSAGE: &str = "안녕하세요! 프론트엔드 개발을 배우고 있는 신입 개발자입니다. \
React와 TypeScript를 더 깊이 있게 학습하고 싶어서 멘토링을 신청합니다. \
현재 개인 프로젝트를 진행 중이며, 실무 경험이 풍부한 멘토님께 코드 리뷰와 \
개발 방향성에 대한 조언을 받고 싶습니다.";

#[component]
pub fn RequestDialog(
    open: RwSignal<bool>,
    mentor_id: u32,
    mentor_name: String,
    #[prop(into)] on_sent: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (message, set_message) = signal(DEFAULT_REQUEST_MESSAGE.to_string());
    let (submitting, set_submitting) = signal(false);
    let (dialog_error, set_dialog_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_send = move |_| {
        // 필수 입력: 공백뿐인 메시지는 전송하지 않는다
        if message.get().trim().is_empty() {
            set_dialog_error.set(Some("메시지를 입력해주세요.".to_string()));
            return;
        }

        set_submitting.set(true);
        set_dialog_error.set(None);

        let api = api.clone();
        let text = message.get();
        spawn_local(async move {
            match api.send_matching_request(mentor_id, &text).await {
                Ok(()) => {
                    open.set(false);
                    set_message.set(DEFAULT_REQUEST_MESSAGE.to_string());
                    on_sent.run(());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("매칭 요청 실패: {}", e).into());
                    set_dialog_error.set(Some(e.display("매칭 요청을 보낼 수 없습니다.")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"매칭 요청 보내기"</h3>
                <p class="py-2 text-base-content/70">
                    {mentor_name} " 멘토에게 매칭 요청을 보냅니다."
                </p>

                <Show when=move || dialog_error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || dialog_error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="form-control">
                    <label class="label" for="request-message">
                        <span class="label-text">"요청 메시지"</span>
                    </label>
                    <textarea
                        id="request-message"
                        rows="5"
                        class="textarea textarea-bordered"
                        placeholder="자기소개와 함께 멘토링을 받고 싶은 이유를 간단히 작성해주세요."
                        prop:value=message
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        disabled=move || submitting.get()
                    ></textarea>
                </div>

                <div class="modal-action">
                    <button
                        type="button"
                        class="btn btn-ghost"
                        disabled=move || submitting.get()
                        on:click=move |_| open.set(false)
                    >
                        "취소"
                    </button>
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled=move || submitting.get() || message.get().trim().is_empty()
                        on:click=on_send
                    >
                        {move || if submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "전송 중..." }.into_any()
                        } else {
                            "요청 보내기".into_any()
                        }}
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
