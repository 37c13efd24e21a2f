//! 프로필 폼 상태
//!
//! 흩어진 signal을 하나의 구조체로 모은다. `RwSignal`은 `Copy`라서
//! Props로 넘기기 좋다. 서버 프로필 로드 시 통째로 덮어쓰고, 저장
//! 시점에 스냅샷 하나로 변환한다.

use crate::models::{Role, SaveProfileRequest, UserProfile, split_skills};
use leptos::prelude::*;

/// 저장 스냅샷 구성 규칙
///
/// `skills`는 역할이 멘토일 때만 포함되고, 콤마 구분 문자열에서
/// 항목별 trim을 거쳐 목록이 된다.
pub fn build_save_request(
    name: String,
    bio: String,
    role: Role,
    skills_raw: &str,
    image_url: String,
) -> SaveProfileRequest {
    SaveProfileRequest {
        name,
        bio,
        role,
        skills: (role == Role::Mentor).then(|| split_skills(skills_raw)),
        profile_image_url: image_url,
    }
}

#[derive(Clone, Copy)]
pub struct ProfileFormState {
    pub name: RwSignal<String>,
    pub bio: RwSignal<String>,
    pub role: RwSignal<Role>,
    /// 콤마 구분 문자열로 편집하고 저장 시점에 목록으로 변환한다
    pub skills: RwSignal<String>,
    /// 업로드가 성공해도 다음 저장 전까지는 로컬 상태에만 머문다
    pub image_url: RwSignal<String>,
}

impl ProfileFormState {
    /// 데모 기본값으로 초기화
    pub fn new() -> Self {
        Self {
            name: RwSignal::new("김멘토".to_string()),
            bio: RwSignal::new(
                "10년차 프론트엔드 개발자입니다. React와 TypeScript 전문가로 활동하고 있습니다."
                    .to_string(),
            ),
            role: RwSignal::new(Role::Mentor),
            skills: RwSignal::new("React,TypeScript,JavaScript,Node.js".to_string()),
            image_url: RwSignal::new(String::new()),
        }
    }

    /// 서버 프로필로 폼을 덮어쓴다 (빠진 필드는 이미 기본값으로 채워져 있다)
    pub fn load(&self, profile: &UserProfile) {
        self.name.set(profile.name.clone());
        self.bio.set(profile.bio.clone());
        self.role.set(profile.role);
        self.skills.set(profile.skills.join(","));
        self.image_url.set(profile.profile_image_url.clone());
    }

    /// 저장 요청 스냅샷
    pub fn to_save_request(&self) -> SaveProfileRequest {
        build_save_request(
            self.name.get(),
            self.bio.get(),
            self.role.get(),
            &self.skills.get(),
            self.image_url.get(),
        )
    }

    /// 표시할 아바타 URL: 업로드된 이미지가 없으면 역할별 기본 이미지
    pub fn avatar_url(&self) -> String {
        let url = self.image_url.get();
        if url.is_empty() {
            self.role.get().placeholder_image().to_string()
        } else {
            url
        }
    }
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentor_snapshot_splits_and_trims_skills() {
        let snapshot = build_save_request(
            "김멘토".to_string(),
            "소개".to_string(),
            Role::Mentor,
            "React, TypeScript ,,Node.js",
            String::new(),
        );
        assert_eq!(
            snapshot.skills,
            Some(vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string()
            ])
        );
    }

    #[test]
    fn mentee_snapshot_has_no_skills() {
        let snapshot = build_save_request(
            "김멘티".to_string(),
            String::new(),
            Role::Mentee,
            "React,Vue",
            String::new(),
        );
        assert_eq!(snapshot.skills, None);
    }
}
