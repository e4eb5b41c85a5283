//! 플러그형 사용자 신원 백엔드
//!
//! 웹 인증 애드온을 위한 사용자 레코드/일회성 토큰 저장 추상화입니다.
//! 구체 백엔드는 `UserService`를 구현해 레지스트리에 등록되고,
//! 나머지 시스템은 레지스트리라는 단일 접근점을 통해 호출합니다.
//! `ExpiredTokenSweeper`가 설정된 주기로 만료 토큰을 정리합니다.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;

pub use config::CleanupConfig;
pub use error::{ErrorSeverity, IdentityError};
pub use model::{AuthMethod, PasswordInfo, SocialUser, Token, UserId};
pub use service::{
    registry, ExpiredTokenSweeper, MemoryUserService, SweeperStatus, UserService,
    UserServiceRegistry,
};
