//! 등록 → 주기 정리 → 중지 전체 수명주기 통합 테스트

use chrono::{Duration as ChronoDuration, Utc};
use identity::{
    AuthMethod, CleanupConfig, ExpiredTokenSweeper, MemoryUserService, SocialUser, SweeperStatus,
    Token, UserId, UserService, UserServiceRegistry,
};
use std::sync::Arc;
use tokio::time::{advance, Duration};

async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

fn expired_token(email: &str) -> Token {
    let mut token = Token::new(email, false, 60);
    token.expiration_time = Utc::now() - ChronoDuration::minutes(1);
    token
}

#[tokio::test(start_paused = true)]
async fn test_full_lifecycle_register_sweep_stop() {
    let registry = Arc::new(UserServiceRegistry::new());
    let backend = Arc::new(MemoryUserService::new());

    // 시작 전에는 모든 호출이 크게 실패함
    assert!(registry.find(&UserId::new("google", "1")).await.is_err());

    // 만료 토큰 하나, 살아있는 토큰 하나
    let live = Token::new("live@example.com", true, 60);
    let dead = expired_token("dead@example.com");
    backend.save_token(live.clone()).await.unwrap();
    backend.save_token(dead.clone()).await.unwrap();
    assert_eq!(backend.token_count(), 2);

    // 스위퍼 시작 = 백엔드 등록 + 스케줄 (초기 지연 0)
    let mut sweeper = ExpiredTokenSweeper::new(CleanupConfig::new(1), registry.clone());
    sweeper.start(backend.clone());
    assert_eq!(sweeper.status(), SweeperStatus::Scheduled);
    settle().await;

    // 첫 tick이 만료 토큰만 걷어냄
    assert_eq!(backend.token_count(), 1);
    assert_eq!(
        registry.find_token(&live.uuid).await.unwrap(),
        Some(live.clone())
    );
    assert!(registry.find_token(&dead.uuid).await.unwrap().is_none());

    // 등록 이후에는 레지스트리를 통한 사용자 업서트가 동작함
    let mut user = SocialUser::new(
        UserId::new("userpass", "a@example.com"),
        AuthMethod::UserPassword,
    );
    user.email = Some("a@example.com".into());
    registry.save(user.clone()).await.unwrap();

    user.full_name = "Second Save".into();
    registry.save(user.clone()).await.unwrap();
    assert_eq!(backend.user_count(), 1);
    assert_eq!(
        registry
            .find_by_email_and_provider("a@example.com", "userpass")
            .await
            .unwrap()
            .map(|u| u.full_name),
        Some("Second Save".into())
    );

    // 다음 주기에 새로 만료된 토큰도 정리됨
    let dead2 = expired_token("dead2@example.com");
    backend.save_token(dead2.clone()).await.unwrap();
    advance(Duration::from_secs(60)).await;
    settle().await;
    assert!(registry.find_token(&dead2.uuid).await.unwrap().is_none());
    assert_eq!(backend.token_count(), 1);

    // 중지 후에는 시간이 흘러도 더 이상 정리가 일어나지 않음
    sweeper.stop().await;
    assert_eq!(sweeper.status(), SweeperStatus::Stopped);

    let dead3 = expired_token("dead3@example.com");
    backend.save_token(dead3.clone()).await.unwrap();
    advance(Duration::from_secs(600)).await;
    settle().await;

    // 물리 레코드는 남아 있음 (스위퍼 중지) - 조회만 사전 필터링됨
    assert_eq!(backend.token_count(), 2);
    assert!(registry.find_token(&dead3.uuid).await.unwrap().is_none());
}

#[tokio::test]
async fn test_registry_survives_backend_swap() {
    let registry = Arc::new(UserServiceRegistry::new());
    let first = Arc::new(MemoryUserService::new());
    let second = Arc::new(MemoryUserService::new());

    registry.register(first.clone());
    let token = Token::new("a@example.com", false, 60);
    registry.save_token(token.clone()).await.unwrap();
    assert!(registry.find_token(&token.uuid).await.unwrap().is_some());

    // 재등록은 last-writer-wins - 이후 호출은 새 백엔드로 감
    registry.register(second.clone());
    assert!(registry.find_token(&token.uuid).await.unwrap().is_none());
    assert_eq!(first.token_count(), 1);
    assert_eq!(second.token_count(), 0);
}
