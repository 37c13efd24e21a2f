//! 백엔드와 주고받는 와이어 타입
//!
//! JSON 필드 이름은 camelCase. 디코딩은 관대하게 처리한다:
//! 빠진 필드는 기본값으로 채우고, `skills`는 배열과 콤마 구분 문자열
//! 두 형태를 모두 받는다 (백엔드가 두 형태를 모두 내보낸 적이 있음).

use serde::{Deserialize, Deserializer, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    #[default]
    Mentee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Mentor => "mentor",
            Role::Mentee => "mentee",
        }
    }

    /// select 요소의 value 문자열에서 변환
    pub fn from_value(value: &str) -> Self {
        match value {
            "mentor" => Role::Mentor,
            _ => Role::Mentee,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Mentor => "멘토",
            Role::Mentee => "멘티",
        }
    }

    /// 프로필 이미지가 없을 때 쓰는 역할별 기본 아바타
    pub fn placeholder_image(&self) -> &'static str {
        match self {
            Role::Mentor => "https://placehold.co/500x500.jpg?text=MENTOR",
            Role::Mentee => "https://placehold.co/500x500.jpg?text=MENTEE",
        }
    }
}

/// 콤마 구분 문자열을 스킬 목록으로 변환
///
/// 항목별로 trim 하고 빈 항목은 버린다.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn skills_lenient<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(list) => list,
        Raw::Joined(joined) => split_skills(&joined),
    })
}

/// 현재 사용자 프로필 (GET /auth/profile)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub bio: String,
    pub role: Role,
    #[serde(deserialize_with = "skills_lenient")]
    pub skills: Vec<String>,
    pub profile_image_url: String,
}

/// 회원가입 요청 (POST /auth/signup)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

/// 프로필 저장 스냅샷 (POST /auth/profile)
///
/// `skills`는 역할이 멘토일 때만 직렬화된다. 멘티 저장 요청의 JSON에는
/// skills 키 자체가 없다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    pub name: String,
    pub bio: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    pub profile_image_url: String,
}

/// 멘토 목록/상세의 읽기 전용 프로젝션
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MentorSummary {
    pub id: u32,
    pub name: String,
    pub introduction: String,
    pub profile_image_url: String,
    pub skills: Vec<String>,
    pub email: String,
}

/// 매칭 요청 상태
///
/// 전이(pending → accepted/rejected)는 전부 서버에서 일어난다.
/// 클라이언트는 전이를 계산하거나 검증하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl MatchingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchingStatus::Pending => "대기중",
            MatchingStatus::Accepted => "수락됨",
            MatchingStatus::Rejected => "거절됨",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MatchingStatus::Pending => "badge badge-warning badge-outline",
            MatchingStatus::Accepted => "badge badge-success badge-outline",
            MatchingStatus::Rejected => "badge badge-error badge-outline",
        }
    }
}

/// 매칭 요청 한 건 (GET /matching/requests)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchingRequest {
    pub id: u32,
    pub mentor_id: u32,
    pub mentee_id: u32,
    pub mentor_name: String,
    pub mentee_name: String,
    pub mentor_profile_image_url: Option<String>,
    pub mentee_profile_image_url: Option<String>,
    pub message: String,
    pub status: MatchingStatus,
    pub created_at: String,
}

impl MatchingRequest {
    /// 카드에 표시할 상대방 이름
    pub fn display_name(&self) -> &str {
        if !self.mentor_name.is_empty() {
            &self.mentor_name
        } else {
            &self.mentee_name
        }
    }

    pub fn display_image(&self) -> Option<&str> {
        self.mentor_profile_image_url
            .as_deref()
            .or(self.mentee_profile_image_url.as_deref())
    }

    /// createdAt ISO-8601 문자열의 날짜 부분만 표시한다
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or("")
    }
}

/// 요청 목록의 클라이언트측 상태 필터 (탭)
///
/// 이미 받아 둔 컬렉션에만 적용된다. 탭 전환은 네트워크 호출을
/// 일으키지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Accepted,
    Rejected,
}

impl StatusFilter {
    pub const TABS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Accepted,
        StatusFilter::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "전체",
            StatusFilter::Pending => "대기중",
            StatusFilter::Accepted => "수락됨",
            StatusFilter::Rejected => "거절됨",
        }
    }

    fn status(&self) -> Option<MatchingStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(MatchingStatus::Pending),
            StatusFilter::Accepted => Some(MatchingStatus::Accepted),
            StatusFilter::Rejected => Some(MatchingStatus::Rejected),
        }
    }

    /// 메모리에 있는 컬렉션을 현재 탭으로 거른다
    pub fn apply(&self, requests: &[MatchingRequest]) -> Vec<MatchingRequest> {
        match self.status() {
            None => requests.to_vec(),
            Some(status) => requests
                .iter()
                .filter(|r| r.status == status)
                .cloned()
                .collect(),
        }
    }

    /// 탭별 빈 목록 안내 문구
    pub fn empty_message(&self) -> String {
        match self {
            StatusFilter::All => "매칭 요청이 없습니다.".to_string(),
            other => format!("{} 상태의 요청이 없습니다.", other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(id: u32, status: MatchingStatus) -> MatchingRequest {
        MatchingRequest {
            id,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn skills_decode_accepts_array_and_joined_string() {
        let from_array: UserProfile =
            serde_json::from_str(r#"{"name":"김멘토","skills":["React","Vue"]}"#).unwrap();
        assert_eq!(from_array.skills, vec!["React", "Vue"]);

        let from_string: UserProfile =
            serde_json::from_str(r#"{"skills":"React, Vue ,Node.js"}"#).unwrap();
        assert_eq!(from_string.skills, vec!["React", "Vue", "Node.js"]);
    }

    #[test]
    fn missing_profile_fields_fall_back_to_defaults() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.name, "");
        assert_eq!(profile.role, Role::Mentee);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.profile_image_url, "");
    }

    #[test]
    fn split_skills_trims_and_drops_empty_entries() {
        assert_eq!(
            split_skills(" React , ,TypeScript,"),
            vec!["React", "TypeScript"]
        );
        assert!(split_skills("").is_empty());
    }

    #[test]
    fn mentee_save_request_serializes_without_skills_key() {
        let snapshot = SaveProfileRequest {
            name: "김멘티".to_string(),
            bio: "소개".to_string(),
            role: Role::Mentee,
            skills: None,
            profile_image_url: String::new(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("skills").is_none());
        assert_eq!(json["role"], "mentee");
    }

    #[test]
    fn mentor_save_request_serializes_skills_array() {
        let snapshot = SaveProfileRequest {
            name: "김멘토".to_string(),
            bio: String::new(),
            role: Role::Mentor,
            skills: Some(vec!["React".to_string()]),
            profile_image_url: "/img/1.jpg".to_string(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["skills"][0], "React");
        assert_eq!(json["profileImageUrl"], "/img/1.jpg");
    }

    #[test]
    fn matching_request_decodes_camel_case_fields() {
        let request: MatchingRequest = serde_json::from_str(
            r#"{
                "id": 3,
                "mentorId": 7,
                "menteeId": 9,
                "mentorName": "김멘토",
                "message": "멘토링 부탁드립니다.",
                "status": "accepted",
                "createdAt": "2024-05-01T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(request.mentor_id, 7);
        assert_eq!(request.status, MatchingStatus::Accepted);
        assert_eq!(request.created_date(), "2024-05-01");
        assert_eq!(request.display_name(), "김멘토");
    }

    #[test]
    fn status_filter_keeps_only_matching_entries() {
        let requests = vec![
            request_with(1, MatchingStatus::Pending),
            request_with(2, MatchingStatus::Accepted),
            request_with(3, MatchingStatus::Pending),
        ];

        let all = StatusFilter::All.apply(&requests);
        assert_eq!(all.len(), 3);

        let pending = StatusFilter::Pending.apply(&requests);
        assert_eq!(
            pending.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 3]
        );

        assert!(StatusFilter::Rejected.apply(&requests).is_empty());
    }

    #[test]
    fn empty_messages_mention_the_selected_tab() {
        assert_eq!(StatusFilter::All.empty_message(), "매칭 요청이 없습니다.");
        assert_eq!(
            StatusFilter::Accepted.empty_message(),
            "수락됨 상태의 요청이 없습니다."
        );
    }
}
