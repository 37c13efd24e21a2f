//! 회원가입 폼
//!
//! 데모 기본값이 미리 채워져 있다. 성공 시 continuation(로그인 페이지로
//! 이동)을 실행하고, 실패는 고정 문구로 표시한다.

use crate::models::{Role, SignupRequest};
use crate::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SignupForm(#[prop(into)] on_signup: Callback<()>) -> impl IntoView {
    let api = use_api();

    // 데모 기본값
    let (email, set_email) = signal("mentor@demo.com".to_string());
    let (password, set_password) = signal("password123".to_string());
    let (role, set_role) = signal(Role::Mentor);
    let (name, set_name) = signal("김멘토".to_string());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let payload = SignupRequest {
            email: email.get(),
            password: password.get(),
            role: role.get(),
            name: name.get(),
        };
        spawn_local(async move {
            match api.signup(&payload).await {
                Ok(()) => on_signup.run(()),
                Err(e) => {
                    web_sys::console::error_1(&format!("회원가입 실패: {}", e).into());
                    set_error_msg.set(Some("회원가입 실패".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-4">"회원가입"</h1>
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
                        <div class="form-control">
                            <label class="label" for="role">
                                <span class="label-text">"역할"</span>
                            </label>
                            <select
                                id="role"
                                class="select select-bordered"
                                on:change=move |ev| set_role.set(Role::from_value(&event_target_value(&ev)))
                            >
                                <option value="mentor" selected=move || role.get() == Role::Mentor>"멘토"</option>
                                <option value="mentee" selected=move || role.get() == Role::Mentee>"멘티"</option>
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"이름"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button id="signup" class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "가입 중..." }.into_any()
                                } else {
                                    "회원가입".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
