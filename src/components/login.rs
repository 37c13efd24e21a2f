//! 로그인 폼
//!
//! 성공 시 토큰을 세션에 기록하고 caller가 공급한 continuation을
//! 정확히 한 번 실행한다. 실패는 종류를 가리지 않고 고정 문구 하나로
//! 표시한다.

use crate::session::{self, use_session};
use crate::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginForm(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let api = use_api();
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let email_value = email.get();
        let password_value = password.get();
        spawn_local(async move {
            match session::login(&session, &api, &email_value, &password_value).await {
                Ok(()) => on_login.run(()),
                Err(e) => {
                    web_sys::console::error_1(&format!("로그인 실패: {}", e).into());
                    set_error_msg.set(Some("로그인 실패".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-4">"로그인"</h1>
                <div class="card shrink-0 w-full shadow-xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"이메일"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"비밀번호"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button id="login" class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "로그인 중..." }.into_any()
                                } else {
                                    "로그인".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
