//! 신원 레코드 모델
//!
//! 사용자 신원과 일회성 토큰 값 타입 정의

pub mod token;
pub mod user;

pub use token::Token;
pub use user::{AuthMethod, PasswordInfo, SocialUser, UserId};
