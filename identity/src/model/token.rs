//! 일회성 토큰 모델
//!
//! 이메일 인증, 비밀번호 재설정 같은 지연 확인 플로우에 쓰이는
//! 수명 제한 자격 증명입니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 일회성 토큰
///
/// 성공적으로 사용되면 삭제되고, 만료된 토큰은 스위퍼가 정리합니다.
/// 만료 시간이 지난 토큰은 물리적으로 삭제되기 전이라도
/// 유효한 것으로 반환되어서는 안 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub uuid: String,
    pub email: String,
    pub creation_time: DateTime<Utc>,
    pub expiration_time: DateTime<Utc>,
    pub is_sign_up: bool,
}

impl Token {
    /// 새 토큰 생성
    ///
    /// uuid v4 식별자를 발급하고 생성 시각 기준으로 만료 시간을 설정합니다.
    pub fn new(email: impl Into<String>, is_sign_up: bool, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            uuid: Uuid::new_v4().to_string(),
            email: email.into(),
            creation_time: now,
            expiration_time: now + Duration::minutes(ttl_minutes),
            is_sign_up,
        }
    }

    /// 만료 여부 확인 (호출 시점 기준)
    pub fn is_expired(&self) -> bool {
        self.expiration_time <= Utc::now()
    }
}
