//! 만료 토큰 스위퍼
//!
//! 호스트가 타이머를 직접 관리하지 않아도 되도록, 설정된 주기마다
//! 만료된 토큰을 백그라운드에서 정리하는 반복 태스크입니다.
//! start 시 백엔드를 레지스트리에 등록하고, stop 시 스케줄을 취소합니다.

use crate::config::CleanupConfig;
use crate::service::registry::UserServiceRegistry;
use crate::service::traits::UserService;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

/// 스위퍼 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweeperStatus {
    /// 중지됨 (재시작 전까지 유지)
    Stopped,
    /// 반복 태스크가 스케줄됨
    Scheduled,
}

/// 만료 토큰 정리 스위퍼
///
/// 상태 전이: Stopped -> (start) -> Scheduled -> (stop) -> Stopped.
/// 주기 변경은 재시작이 필요합니다 (라이브 리로드 없음).
pub struct ExpiredTokenSweeper {
    config: CleanupConfig,
    registry: Arc<UserServiceRegistry>,
    shutdown: Option<watch::Sender<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl ExpiredTokenSweeper {
    pub fn new(config: CleanupConfig, registry: Arc<UserServiceRegistry>) -> Self {
        Self {
            config,
            registry,
            shutdown: None,
            handle: None,
        }
    }

    /// 현재 상태 조회
    pub fn status(&self) -> SweeperStatus {
        if self.handle.is_some() {
            SweeperStatus::Scheduled
        } else {
            SweeperStatus::Stopped
        }
    }

    /// 스위퍼 시작
    ///
    /// 백엔드를 레지스트리의 활성 델리게이트로 등록한 뒤, 초기 지연 0과
    /// 설정된 주기로 반복 정리 태스크를 스케줄합니다.
    /// 이미 스케줄된 상태에서 다시 호출하면 무시됩니다.
    pub fn start(&mut self, backend: Arc<dyn UserService>) {
        if self.handle.is_some() {
            warn!("스위퍼가 이미 스케줄되어 있습니다 (주기 변경은 재시작 필요)");
            return;
        }

        self.registry.register(backend);

        let period = self.config.interval();
        let registry = self.registry.clone();
        let (tx, mut rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            // 첫 tick은 즉시 발화 (초기 지연 0)
            let mut ticker = interval(period);

            info!(
                "만료 토큰 스위퍼 시작: 주기 {}분",
                period.as_secs() / 60
            );

            loop {
                tokio::select! {
                    // 취소는 다음 tick 발화보다 먼저 관찰되어야 함
                    biased;

                    _ = rx.changed() => {
                        info!("만료 토큰 스위퍼 중지됨");
                        return;
                    }

                    _ = ticker.tick() => {
                        if tracing::enabled!(tracing::Level::DEBUG) {
                            debug!("만료 토큰 정리 tick 발화");
                        }

                        // tick은 fire-and-forget - 느리거나 실패한 tick이
                        // 스케줄을 막거나 취소하지 않도록 태스크로 격리
                        let registry = registry.clone();
                        tokio::spawn(async move {
                            if let Err(e) = registry.delete_expired_tokens().await {
                                error!("만료 토큰 정리 실패 (다음 tick은 계속됨): {}", e);
                            }
                        });
                    }
                }
            }
        });

        self.shutdown = Some(tx);
        self.handle = Some(handle);
    }

    /// 스위퍼 중지
    ///
    /// 이후 tick을 억제하고 루프 태스크 종료를 기다립니다. 이미 발화되어
    /// 실행 중인 tick은 강제로 중단하지 않습니다 (best-effort 취소).
    /// 시작되지 않은 상태에서 호출하면 no-op입니다.
    pub async fn stop(&mut self) {
        let Some(tx) = self.shutdown.take() else {
            return;
        };
        let _ = tx.send(true);

        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for ExpiredTokenSweeper {
    fn drop(&mut self) {
        // Drop에서는 await 불가 - 종료 신호만 전송
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(true);
        }
    }
}
