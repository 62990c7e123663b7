//! ダッシュボード用データ取得
//!
//! 統計と直近レポートを並行して取得する。両者は独立しており、片方の失敗は
//! もう片方に影響しない。

use crate::client::ApiClient;
use mirqab_common::{ApiOutcome, DetectionReport, Pagination, Stats, TimeRange};

/// 直近レポートの表示件数
pub const RECENT_LIMIT: u32 = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub time_range: TimeRange,
    pub stats: Option<Stats>,
    pub recent: Vec<DetectionReport>,
    pub total: u64,
}

pub async fn fetch_dashboard(client: &ApiClient, time_range: TimeRange) -> DashboardData {
    let (stats, reports) = tokio::join!(
        client.detection_stats(time_range),
        client.detection_reports(time_range, Pagination::first(RECENT_LIMIT)),
    );

    let mut data = DashboardData {
        time_range,
        ..Default::default()
    };

    match stats {
        Ok(ApiOutcome::Success(s)) => data.stats = Some(s),
        Ok(ApiOutcome::Failure { message }) => {
            tracing::warn!(error = ?message, "統計の取得に失敗");
        }
        Err(e) => tracing::warn!(error = %e, "統計の取得に失敗"),
    }

    match reports {
        Ok(ApiOutcome::Success(page)) => {
            data.total = page.total;
            data.recent = page.detections;
        }
        Ok(ApiOutcome::Failure { message }) => {
            tracing::warn!(error = ?message, "レポートの取得に失敗");
        }
        Err(e) => tracing::warn!(error = %e, "レポートの取得に失敗"),
    }

    data
}
