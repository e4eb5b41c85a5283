//! 인메모리 UserService 백엔드
//!
//! DashMap 기반 기본 백엔드. 테스트와 데모의 기본 구현체로 사용되며
//! 프로세스 종료 시 데이터는 사라집니다.

use crate::error::IdentityError;
use crate::model::{SocialUser, Token, UserId};
use crate::service::traits::UserService;
use async_trait::async_trait;
use dashmap::DashMap;

/// 인메모리 백엔드
#[derive(Debug, Default)]
pub struct MemoryUserService {
    users: DashMap<UserId, SocialUser>,
    tokens: DashMap<String, Token>,
}

impl MemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수 (테스트/점검용)
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// 저장된 토큰 수 (테스트/점검용)
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl UserService for MemoryUserService {
    fn name(&self) -> &'static str {
        "MemoryUserService"
    }

    async fn find(&self, id: &UserId) -> Result<Option<SocialUser>, IdentityError> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn find_by_email_and_provider(
        &self,
        email: &str,
        provider_id: &str,
    ) -> Result<Option<SocialUser>, IdentityError> {
        let found = self.users.iter().find_map(|entry| {
            let user = entry.value();
            let matches = user.id.provider_id == provider_id
                && user.email.as_deref() == Some(email);
            matches.then(|| user.clone())
        });
        Ok(found)
    }

    async fn save(&self, user: SocialUser) -> Result<(), IdentityError> {
        // UserId 기준 업서트 - 기존 레코드는 통째로 교체
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn save_token(&self, token: Token) -> Result<(), IdentityError> {
        self.tokens.insert(token.uuid.clone(), token);
        Ok(())
    }

    async fn find_token(&self, token_id: &str) -> Result<Option<Token>, IdentityError> {
        // 만료된 토큰은 아직 삭제 전이라도 반환하지 않음 (사전 필터링)
        let token = self
            .tokens
            .get(token_id)
            .map(|t| t.clone())
            .filter(|t| !t.is_expired());
        Ok(token)
    }

    async fn delete_token(&self, token_id: &str) -> Result<(), IdentityError> {
        self.tokens.remove(token_id);
        Ok(())
    }

    async fn delete_expired_tokens(&self) -> Result<(), IdentityError> {
        self.tokens.retain(|_, t| !t.is_expired());
        Ok(())
    }
}
