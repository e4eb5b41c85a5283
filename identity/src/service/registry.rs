//! 델리게이트 레지스트리
//!
//! 프로세스 전역에서 최대 하나의 UserService 구현체를 보관하고,
//! 모든 계약 호출을 현재 등록된 델리게이트로 전달합니다.
//! 호출자는 구체 백엔드 핸들 없이 이 단일 접근점만 알면 됩니다.

use crate::error::IdentityError;
use crate::model::{SocialUser, Token, UserId};
use crate::service::traits::UserService;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info};

/// 프로세스 전역 레지스트리 인스턴스
static REGISTRY: Lazy<Arc<UserServiceRegistry>> =
    Lazy::new(|| Arc::new(UserServiceRegistry::new()));

/// 전역 레지스트리 핸들 반환
///
/// 자체 인스턴스를 주입하고 싶은 호스트/테스트는 `UserServiceRegistry::new`를
/// 직접 사용하면 됩니다.
pub fn registry() -> Arc<UserServiceRegistry> {
    REGISTRY.clone()
}

/// UserService 델리게이트 레지스트리
///
/// 슬롯 교체는 원자적입니다 (읽는 쪽이 절반만 설정된 델리게이트를 보는 일은 없음).
/// 시작 시 정확히 한 번 등록하는 것을 전제로 하며, 트래픽 중 재등록은
/// last-writer-wins 이상을 보장하지 않습니다.
pub struct UserServiceRegistry {
    delegate: RwLock<Option<Arc<dyn UserService>>>,
}

impl Default for UserServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UserServiceRegistry {
    pub fn new() -> Self {
        Self {
            delegate: RwLock::new(None),
        }
    }

    /// 델리게이트 등록
    ///
    /// 기존 델리게이트는 경고 없이 통째로 교체됩니다.
    pub fn register(&self, service: Arc<dyn UserService>) {
        info!("Registered UserService: {}", service.name());
        *self.delegate.write() = Some(service);
    }

    /// 델리게이트 등록 여부
    pub fn is_initialized(&self) -> bool {
        self.delegate.read().is_some()
    }

    /// 현재 델리게이트 클론 (await 전에 락을 놓기 위해 Arc만 꺼냄)
    fn resolve(&self, operation: &str) -> Result<Arc<dyn UserService>, IdentityError> {
        match self.delegate.read().clone() {
            Some(service) => Ok(service),
            None => {
                error!(
                    "UserService가 등록되지 않았습니다: {} 호출을 처리할 수 없습니다 \
                     (시작 시 register 호출 누락)",
                    operation
                );
                Err(IdentityError::NotInitialized)
            }
        }
    }

    /// UserId로 사용자 조회
    pub async fn find(&self, id: &UserId) -> Result<Option<SocialUser>, IdentityError> {
        self.resolve("find")?.find(id).await
    }

    /// 이메일 + 제공자로 사용자 조회
    pub async fn find_by_email_and_provider(
        &self,
        email: &str,
        provider_id: &str,
    ) -> Result<Option<SocialUser>, IdentityError> {
        self.resolve("find_by_email_and_provider")?
            .find_by_email_and_provider(email, provider_id)
            .await
    }

    /// 사용자 저장 (업서트)
    pub async fn save(&self, user: SocialUser) -> Result<(), IdentityError> {
        self.resolve("save")?.save(user).await
    }

    /// 토큰 저장
    pub async fn save_token(&self, token: Token) -> Result<(), IdentityError> {
        self.resolve("save_token")?.save_token(token).await
    }

    /// 토큰 조회
    pub async fn find_token(&self, token_id: &str) -> Result<Option<Token>, IdentityError> {
        self.resolve("find_token")?.find_token(token_id).await
    }

    /// 토큰 삭제
    pub async fn delete_token(&self, token_id: &str) -> Result<(), IdentityError> {
        self.resolve("delete_token")?.delete_token(token_id).await
    }

    /// 만료 토큰 일괄 삭제
    pub async fn delete_expired_tokens(&self) -> Result<(), IdentityError> {
        self.resolve("delete_expired_tokens")?
            .delete_expired_tokens()
            .await
    }
}
