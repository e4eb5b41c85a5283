//! 신원 서비스 계층
//!
//! UserService 계약, 델리게이트 레지스트리, 만료 토큰 스위퍼

pub mod memory;
pub mod registry;
pub mod sweeper;
pub mod traits;

pub use memory::MemoryUserService;
pub use registry::{registry, UserServiceRegistry};
pub use sweeper::{ExpiredTokenSweeper, SweeperStatus};
pub use traits::UserService;
