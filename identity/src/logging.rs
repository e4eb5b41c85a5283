//! 로깅 초기화
//!
//! 호스트 애플리케이션이 자체 구독자를 설치하지 않는 경우를 위한
//! 기본 tracing 설정입니다.

/// tracing 구독자 초기화
///
/// RUST_LOG가 없으면 info 레벨을 사용합니다. 이미 전역 구독자가
/// 설치되어 있으면 조용히 무시합니다.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
