//! 死活監視
//!
//! ヘルスチェックの失敗は呼び出し側に伝播させず、オフライン扱いにする。

use crate::client::ApiClient;
use mirqab_common::{HealthResponse, SystemStatus};
use std::time::Duration;

/// デフォルトのポーリング間隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// 1回分のヘルスチェック結果
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSnapshot {
    pub status: SystemStatus,
    /// 取得できなかった場合は None
    pub health: Option<HealthResponse>,
}

/// ヘルスチェックを1回実行（エラーはオフラインに変換）
pub async fn probe(client: &ApiClient) -> HealthSnapshot {
    match client.health().await {
        Ok(health) => HealthSnapshot {
            status: SystemStatus::from(Some(&health)),
            health: Some(health),
        },
        Err(e) => {
            tracing::warn!(error = %e, "ヘルスチェック失敗、オフライン扱い");
            HealthSnapshot {
                status: SystemStatus::Offline,
                health: None,
            }
        }
    }
}

/// 定期ヘルスチェック
pub struct HealthMonitor {
    client: ApiClient,
    interval: Duration,
}

impl HealthMonitor {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 即時に1回、以降は `interval` ごとに `on_update` を呼ぶ（終了しない）
    pub async fn run(&self, mut on_update: impl FnMut(&HealthSnapshot)) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let snapshot = probe(&self.client).await;
            on_update(&snapshot);
        }
    }

    /// `count` 回だけ監視して結果を返す
    pub async fn run_for(&self, count: usize) -> Vec<HealthSnapshot> {
        let mut ticker = tokio::time::interval(self.interval);
        let mut snapshots = Vec::with_capacity(count);
        for _ in 0..count {
            ticker.tick().await;
            snapshots.push(probe(&self.client).await);
        }
        snapshots
    }
}
