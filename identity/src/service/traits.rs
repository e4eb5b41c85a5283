//! UserService 계약 정의
//!
//! 저장소에 독립적인 사용자 신원/토큰 연산 인터페이스를 제공합니다.
//! 구체 백엔드(DB, 메모리 등)는 이 트레이트를 구현하여 레지스트리에 등록됩니다.

use crate::error::IdentityError;
use crate::model::{SocialUser, Token, UserId};
use async_trait::async_trait;

/// 사용자 신원 백엔드 계약
///
/// 조회 연산은 일치하는 레코드가 없을 때 실패 대신 `Ok(None)`으로 해석되고,
/// 백엔드 I/O 실패 시에만 `Err`를 반환합니다.
///
/// 비밀번호 기반 가입을 지원하지 않는 백엔드는 토큰/이메일 조회 메서드를
/// 기본 구현(항상 빈 결과/no-op) 그대로 두면 됩니다. 이것은 에러가 아니라
/// 허용된 축소 구현입니다.
#[async_trait]
pub trait UserService: Send + Sync {
    /// 구현체 이름 (등록 로그에 사용)
    fn name(&self) -> &'static str;

    /// UserId로 사용자 조회
    async fn find(&self, id: &UserId) -> Result<Option<SocialUser>, IdentityError>;

    /// 비밀번호 계정용 이메일 + 제공자 조회
    async fn find_by_email_and_provider(
        &self,
        _email: &str,
        _provider_id: &str,
    ) -> Result<Option<SocialUser>, IdentityError> {
        Ok(None)
    }

    /// 사용자 저장 (업서트)
    ///
    /// 신규면 삽입, 동일 UserId가 있으면 덮어씁니다. 같은 사용자를 반복
    /// 저장해도 레코드가 중복되지 않아야 합니다.
    async fn save(&self, user: SocialUser) -> Result<(), IdentityError>;

    /// 토큰 저장
    async fn save_token(&self, _token: Token) -> Result<(), IdentityError> {
        Ok(())
    }

    /// 토큰 id로 조회
    ///
    /// 만료 시간이 지난 토큰은 아직 삭제되지 않았더라도 유효한 값으로
    /// 반환해서는 안 됩니다 (백엔드 사전 필터링 또는 호출자 만료 확인).
    async fn find_token(&self, _token_id: &str) -> Result<Option<Token>, IdentityError> {
        Ok(None)
    }

    /// 토큰 단건 삭제 (멱등 - 없는 id 삭제는 에러가 아님)
    async fn delete_token(&self, _token_id: &str) -> Result<(), IdentityError> {
        Ok(())
    }

    /// 만료된 토큰 전체 삭제 (멱등, 조회와 동시 실행 가능)
    async fn delete_expired_tokens(&self) -> Result<(), IdentityError> {
        Ok(())
    }
}
