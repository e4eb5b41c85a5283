//! 스위퍼 설정
//!
//! .env 파일에서 만료 토큰 정리 주기를 읽어옵니다.
//! 환경 변수가 없거나 잘못되었으면 기본값을 사용합니다.

use dotenv::dotenv;
use std::env;
use std::time::Duration;
use tracing::warn;

/// 정리 주기 기본값 (분)
pub const DEFAULT_CLEANUP_INTERVAL_MINUTES: u64 = 5;

/// 정리 주기 환경 변수 이름
pub const CLEANUP_INTERVAL_ENV: &str = "CLEANUP_INTERVAL_MINUTES";

/// 만료 토큰 정리 설정
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub interval_minutes: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_CLEANUP_INTERVAL_MINUTES,
        }
    }
}

impl CleanupConfig {
    /// 주어진 주기(분)로 설정 생성
    pub fn new(interval_minutes: u64) -> Self {
        Self { interval_minutes }
    }

    /// 환경 변수에서 설정 로드
    ///
    /// 값이 없거나 파싱할 수 없거나 0이면 기본값 5분으로 대체합니다.
    pub fn from_env() -> Self {
        dotenv().ok();

        let interval_minutes = match env::var(CLEANUP_INTERVAL_ENV) {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    warn!(
                        "{} 값이 잘못되어 기본값 {}분을 사용합니다: '{}'",
                        CLEANUP_INTERVAL_ENV, DEFAULT_CLEANUP_INTERVAL_MINUTES, raw
                    );
                    DEFAULT_CLEANUP_INTERVAL_MINUTES
                }
            },
            Err(_) => DEFAULT_CLEANUP_INTERVAL_MINUTES,
        };

        Self { interval_minutes }
    }

    /// 정리 주기를 Duration으로 반환
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes * 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let config = CleanupConfig::default();
        assert_eq!(config.interval_minutes, 5);
        assert_eq!(config.interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_explicit_interval() {
        let config = CleanupConfig::new(1);
        assert_eq!(config.interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_env_falls_back_to_default() {
        // 환경 변수 기반 테스트는 프로세스 전역 상태를 건드리므로
        // 잘못된 값 하나만 직렬로 확인
        env::set_var(CLEANUP_INTERVAL_ENV, "not-a-number");
        let config = CleanupConfig::from_env();
        assert_eq!(config.interval_minutes, DEFAULT_CLEANUP_INTERVAL_MINUTES);
        env::remove_var(CLEANUP_INTERVAL_ENV);
    }
}
