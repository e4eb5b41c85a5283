//! 사용자 신원 모델
//!
//! 인증 제공자 네임스페이스 내의 사용자 식별자와 인증된 신원 레코드.

use serde::{Deserialize, Serialize};

/// 제공자별 사용자 식별자
///
/// 제공자 id + 제공자 내 사용자 id의 조합으로 불변 조회 키로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId {
    pub provider_id: String,
    pub user_id: String,
}

impl UserId {
    pub fn new(provider_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            user_id: user_id.into(),
        }
    }
}

/// 인증 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    OAuth1,
    OAuth2,
    OpenId,
    UserPassword,
}

impl AuthMethod {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "oauth1" => Some(AuthMethod::OAuth1),
            "oauth2" => Some(AuthMethod::OAuth2),
            "openid" => Some(AuthMethod::OpenId),
            "userpassword" => Some(AuthMethod::UserPassword),
            _ => None,
        }
    }
}

/// 비밀번호 계정의 자격 증명 자료
///
/// 이 계층은 비밀번호를 검증하지 않습니다. 해시/솔트는 불투명한 값으로만 보관됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordInfo {
    pub hasher: String,
    pub password: String,
    pub salt: Option<String>,
}

/// 인증된 신원 레코드
///
/// 사용자가 처음 인증/가입할 때 생성되며, 이후 변경은 `save` 업서트로만 일어납니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub auth_method: AuthMethod,
    pub password_info: Option<PasswordInfo>,
}

impl SocialUser {
    /// 최소 필드만 채운 레코드 생성 (프로필은 비어 있음)
    pub fn new(id: UserId, auth_method: AuthMethod) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            full_name: String::new(),
            email: None,
            avatar_url: None,
            auth_method,
            password_info: None,
        }
    }
}
