//! 프로필 뷰
//!
//! 마운트 시 현재 프로필을 불러와 폼을 채운다. 로드 실패는 조용히
//! 무시하고 기본값을 유지한다 (다른 뷰와 달리 의도적으로 오류를
//! 표시하지 않는 유일한 지점). 저장은 스냅샷 전체를 한 번에 보낸다.

mod form_state;
mod image_rules;

use crate::models::Role;
use crate::use_api;
use form_state::ProfileFormState;
use image_rules::{check_dimensions, check_size, probe_dimensions};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let form = ProfileFormState::new();

    // File은 Send가 아니라서 로컬 저장 시그널에 담는다
    let (file, set_file) = signal_local(Option::<web_sys::File>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 기존 프로필 불러오기. 실패는 조용히 무시한다.
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(profile) = api.profile().await {
                    form.load(&profile);
                }
            });
        }
    });

    let on_file_change = move |ev: leptos::web_sys::Event| {
        set_error_msg.set(None);
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        set_file.set(input.files().and_then(|list| list.get(0)));
    };

    // 업로드: 용량 → 해상도 순으로 로컬 검증을 통과해야 전송한다.
    // 성공한 URL은 로컬 상태에만 머물고, 다음 저장 때 프로필에 붙는다.
    let on_upload = {
        let api = api.clone();
        move |_| {
            set_error_msg.set(None);
            let Some(file) = file.get() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                // 용량 제한 (1MB)
                if let Err(rule) = check_size(file.size()) {
                    set_error_msg.set(Some(rule.message().to_string()));
                    return;
                }
                // 해상도 제한 (500~1000px)
                let (width, height) = match probe_dimensions(&file).await {
                    Ok(dimensions) => dimensions,
                    Err(rule) => {
                        set_error_msg.set(Some(rule.message().to_string()));
                        return;
                    }
                };
                if let Err(rule) = check_dimensions(width, height) {
                    set_error_msg.set(Some(rule.message().to_string()));
                    return;
                }

                match api.upload_profile_image(&file).await {
                    Ok(url) => {
                        form.image_url.set(url);
                        set_success_msg.set(Some("이미지 업로드 완료".to_string()));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("이미지 업로드 실패: {}", e).into());
                        set_error_msg.set(Some(e.display("이미지 업로드에 실패했습니다.")));
                    }
                }
            });
        }
    };

    let on_save = {
        let api = api.clone();
        move |_| {
            set_error_msg.set(None);
            let api = api.clone();
            let snapshot = form.to_save_request();
            spawn_local(async move {
                match api.save_profile(&snapshot).await {
                    Ok(()) => set_success_msg.set(Some("프로필 저장 완료".to_string())),
                    Err(e) => {
                        web_sys::console::error_1(&format!("프로필 저장 실패: {}", e).into());
                        set_error_msg.set(Some(e.display("프로필 저장에 실패했습니다.")));
                    }
                }
            });
        }
    };

    view! {
        <div class="max-w-md mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-3">
                    <h1 class="text-2xl font-bold text-center">"프로필 등록"</h1>

                    <div class="form-control">
                        <label class="label" for="role">
                            <span class="label-text">"역할"</span>
                        </label>
                        <select
                            id="role"
                            class="select select-bordered"
                            on:change=move |ev| form.role.set(Role::from_value(&event_target_value(&ev)))
                        >
                            <option value="mentor" selected=move || form.role.get() == Role::Mentor>"멘토"</option>
                            <option value="mentee" selected=move || form.role.get() == Role::Mentee>"멘티"</option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">"이름"</span>
                        </label>
                        <input
                            id="name"
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            prop:value=form.name
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="bio">
                            <span class="label-text">"소개글"</span>
                        </label>
                        <input
                            id="bio"
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| form.bio.set(event_target_value(&ev))
                            prop:value=form.bio
                        />
                    </div>

                    // 기술 스택은 멘토일 때만 편집된다
                    <Show when=move || form.role.get() == Role::Mentor>
                        <div class="form-control">
                            <label class="label" for="skills">
                                <span class="label-text">"기술 스택"</span>
                            </label>
                            <input
                                id="skills"
                                type="text"
                                placeholder="예: React,Spring"
                                class="input input-bordered"
                                on:input=move |ev| form.skills.set(event_target_value(&ev))
                                prop:value=form.skills
                            />
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="profile">
                            <span class="label-text">"프로필 이미지 업로드"</span>
                        </label>
                        <input
                            id="profile"
                            type="file"
                            accept=".jpg,.png"
                            class="file-input file-input-bordered"
                            on:change=on_file_change
                        />
                    </div>

                    <div class="avatar justify-center">
                        <div class="w-24 rounded-full">
                            <img src=move || form.avatar_url() alt="프로필" />
                        </div>
                    </div>

                    <button
                        id="upload"
                        class="btn btn-primary"
                        disabled=move || file.get().is_none()
                        on:click=on_upload
                    >
                        "이미지 업로드"
                    </button>
                    <button id="save" class="btn btn-success" on:click=on_save>
                        "저장"
                    </button>

                    <Show when=move || success_msg.get().is_some()>
                        <div role="alert" class="alert alert-success text-sm py-2">
                            <span>{move || success_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
