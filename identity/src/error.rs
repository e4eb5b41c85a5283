//! Identity Error Management
//!
//! 신원 백엔드 계층의 모든 에러를 체계적으로 관리합니다.
//! 심각도에 따라 적절한 로깅 레벨로 기록됩니다.

use thiserror::Error;
use tracing::{error, info, warn};

/// 신원 백엔드 공통 에러 정의
#[derive(Error, Debug, Clone)]
pub enum IdentityError {
    /// UserService 델리게이트가 등록되기 전에 호출됨 (배포/초기화 결함)
    #[error("등록된 UserService가 없습니다 (초기화 전 호출)")]
    NotInitialized,

    /// 백엔드 내부 실패 (스토리지 장애 등) - 이 계층은 감싸지 않고 전달만 합니다
    #[error("백엔드 에러: {0}")]
    Backend(String),

    /// 설정 오류
    #[error("설정 오류: {0}")]
    Configuration(String),
}

/// 에러 심각도 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Critical, // 배포/시스템 결함
    High,     // 백엔드 실패
    Medium,   // 설정 오류
    Low,      // 일반적인 경고
}

impl IdentityError {
    /// 에러의 심각도를 반환합니다.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Critical: 델리게이트 미등록은 재시도로 복구되지 않는 배포 결함
            IdentityError::NotInitialized => ErrorSeverity::Critical,

            // High: 백엔드 실패
            IdentityError::Backend(_) => ErrorSeverity::High,

            // Medium: 설정 오류
            IdentityError::Configuration(_) => ErrorSeverity::Medium,
        }
    }

    /// 에러를 로깅합니다.
    ///
    /// 심각도에 따라 적절한 로깅 레벨을 사용합니다.
    pub fn log(&self, context: &str) {
        let severity = self.severity();
        let error_msg = self.to_string();

        match severity {
            ErrorSeverity::Critical => {
                error!("[CRITICAL] {} - {}", context, error_msg);
            }
            ErrorSeverity::High => {
                error!("[HIGH] {} - {}", context, error_msg);
            }
            ErrorSeverity::Medium => {
                warn!("[MEDIUM] {} - {}", context, error_msg);
            }
            ErrorSeverity::Low => {
                info!("[LOW] {} - {}", context, error_msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            IdentityError::NotInitialized.severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            IdentityError::Backend("storage down".into()).severity(),
            ErrorSeverity::High
        );
        assert_eq!(
            IdentityError::Configuration("bad interval".into()).severity(),
            ErrorSeverity::Medium
        );
    }
}
