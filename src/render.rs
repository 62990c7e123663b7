//! CLI向けの表示整形
//!
//! 文言はすべて `LanguageContext` から取得する。

use crate::config::{BaseUrl, Config};
use crate::health::HealthSnapshot;
use crate::locale::LanguageContext;
use mirqab_common::{
    AnalysisResult, AnalysisSummary, ChatMessage, DetectionReport, Role, Stats, TextKey,
};
use std::path::Path;

/// ISO 8601 のタイムスタンプを `YYYY-MM-DD HH:MM` に整形（解析できなければそのまま）
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

pub fn health_line(ctx: &LanguageContext, snapshot: &HealthSnapshot) -> String {
    let mut line = format!(
        "{}: {}",
        ctx.t(TextKey::SystemStatus),
        ctx.t(snapshot.status.label_key())
    );
    if let Some(health) = &snapshot.health {
        line.push_str(&format!(
            " | {}: {} | {}: {}",
            ctx.t(TextKey::ModelLoaded),
            yes_no(health.model_loaded),
            ctx.t(TextKey::AiAvailable),
            yes_no(health.gemini_api_available),
        ));
    }
    line
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "✔" } else { "✘" }
}

pub fn analysis_lines(ctx: &LanguageContext, result: &AnalysisResult) -> Vec<String> {
    let summary = AnalysisSummary::from_result(result, ctx.language());
    let mut lines = vec![format!("{}: {}", summary.title, summary.description)];

    for det in &result.detections {
        lines.push(format!(
            "  - {} ({}: {:.0}%) [{:.0}, {:.0}, {:.0}, {:.0}]",
            det.class_name,
            ctx.t(TextKey::Confidence),
            det.confidence * 100.0,
            det.bbox[0],
            det.bbox[1],
            det.bbox[2],
            det.bbox[3],
        ));
    }

    if let Some(report) = &result.report {
        lines.push(format!("{}: #{}", ctx.t(TextKey::ReportId), report.report_id));
        if let Some(analysis) = &report.analysis {
            lines.push(format!("{}: {}", ctx.t(TextKey::Environment), analysis.environment));
            lines.push(format!(
                "{}: {}",
                ctx.t(TextKey::Camouflage),
                analysis.attire_and_camouflage
            ));
            lines.push(format!("{}: {}", ctx.t(TextKey::Equipment), analysis.equipment));
            if !analysis.summary.is_empty() {
                lines.push(analysis.summary.clone());
            }
        }
    }

    lines
}

pub fn report_line(ctx: &LanguageContext, report: &DetectionReport, image_url: &str) -> String {
    format!(
        "#{} | {} | {:.4}, {:.4} | {}: {} | {}: {} | {}: {} | {}",
        report.report_id,
        format_timestamp(&report.timestamp),
        report.location.latitude,
        report.location.longitude,
        ctx.t(TextKey::SoldierCount),
        report.soldier_count,
        ctx.t(TextKey::Severity),
        ctx.t(report.severity.label_key()),
        ctx.t(TextKey::Status),
        ctx.t(report.status.label_key()),
        image_url,
    )
}

pub fn report_detail_lines(ctx: &LanguageContext, report: &DetectionReport) -> Vec<String> {
    vec![
        format!("  {}: {}", ctx.t(TextKey::Environment), report.environment),
        format!("  {}: {}", ctx.t(TextKey::Camouflage), report.attire_and_camouflage),
        format!("  {}: {}", ctx.t(TextKey::Equipment), report.equipment),
    ]
}

pub fn stats_lines(ctx: &LanguageContext, stats: &Stats) -> Vec<String> {
    vec![
        format!("{}: {}", ctx.t(TextKey::TotalDetections), stats.total_detections),
        format!("{}: {}", ctx.t(TextKey::CriticalAlerts), stats.critical_alerts),
        format!("{}: {}", ctx.t(TextKey::MeanTimeToDetect), stats.mttd),
        format!("{}: {}", ctx.t(TextKey::MeanTimeToRespond), stats.mttr),
        format!(
            "{}: {} {} / {} {} / {} {}",
            ctx.t(TextKey::Status),
            ctx.t(TextKey::New),
            stats.alerts_by_status.new,
            ctx.t(TextKey::InProgress),
            stats.alerts_by_status.in_progress,
            ctx.t(TextKey::Closed),
            stats.alerts_by_status.closed,
        ),
    ]
}

pub fn chat_line(ctx: &LanguageContext, message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => "›",
        Role::Assistant => ctx.t(TextKey::Assistant),
    };
    let mut line = format!("{}: {}", speaker, message.content);
    let ids = message.report_ids();
    if !ids.is_empty() {
        line.push_str(&format!("\n  {}: {}", ctx.t(TextKey::Reports), ids.join(", ")));
    }
    line
}

/// 設定変更の保存通知
pub fn saved_line(ctx: &LanguageContext, label: TextKey, value: &str) -> String {
    format!("✔ {}: {} = {}", ctx.t(TextKey::Saved), ctx.t(label), value)
}

pub fn config_lines(
    ctx: &LanguageContext,
    config: &Config,
    base: &BaseUrl,
    config_path: &Path,
) -> Vec<String> {
    vec![
        format!("{}:", ctx.t(TextKey::Settings)),
        format!("  {}: {}", ctx.t(TextKey::ApiAddress), base),
        format!("  {}: {}", ctx.t(TextKey::DisplayLanguage), config.language),
        format!(
            "  {}: {} {}",
            ctx.t(TextKey::RequestTimeout),
            config.timeout_seconds,
            ctx.t(TextKey::SecondsUnit)
        ),
        format!("  {}: {}", ctx.t(TextKey::ConfigFile), config_path.display()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirqab_common::{HealthResponse, Language, ReportRef, Severity, SystemStatus};

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-01-02T03:04:05Z"), "2025-01-02 03:04");
        assert_eq!(format_timestamp("2025-01-02T03:04:05.123456"), "2025-01-02 03:04");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_health_line_offline() {
        let ctx = LanguageContext::new(Language::En);
        let snapshot = HealthSnapshot {
            status: SystemStatus::Offline,
            health: None,
        };
        assert_eq!(health_line(&ctx, &snapshot), "System Status: Offline");
    }

    #[test]
    fn test_health_line_online() {
        let ctx = LanguageContext::new(Language::En);
        let snapshot = HealthSnapshot {
            status: SystemStatus::Online,
            health: Some(HealthResponse {
                status: Some("healthy".into()),
                model_loaded: true,
                gemini_api_available: false,
            }),
        };
        let line = health_line(&ctx, &snapshot);
        assert!(line.starts_with("System Status: Online"));
        assert!(line.contains("Model Loaded: ✔"));
        assert!(line.contains("AI Available: ✘"));
    }

    #[test]
    fn test_analysis_lines_follow_language() {
        let result = AnalysisResult {
            detection: Some(true),
            soldier_count: Some(4),
            ..Default::default()
        };
        let ctx = LanguageContext::new(Language::En);
        assert_eq!(analysis_lines(&ctx, &result)[0], "Camouflage Detected: 4 soldiers");

        ctx.set_language(Language::Ar);
        assert_eq!(analysis_lines(&ctx, &result)[0], "تم الكشف عن تمويه: 4 جنود");
    }

    #[test]
    fn test_report_line_labels() {
        let ctx = LanguageContext::new(Language::En);
        let report = DetectionReport {
            report_id: "R-1".into(),
            severity: Severity::High,
            soldier_count: 2,
            ..Default::default()
        };
        let line = report_line(&ctx, &report, "http://localhost:8000/s.jpg");
        assert!(line.starts_with("#R-1"));
        assert!(line.contains("Severity: High"));
        assert!(line.contains("Status: New"));
        assert!(line.ends_with("http://localhost:8000/s.jpg"));
    }

    #[test]
    fn test_config_lines_localized() {
        let config = Config::default();
        let base = BaseUrl::default();
        let path = Path::new("/tmp/mirqab/config.json");

        let ctx = LanguageContext::new(Language::En);
        let lines = config_lines(&ctx, &config, &base, path);
        assert_eq!(lines[0], "Settings:");
        assert_eq!(lines[1], "  API Address: http://localhost:8000");
        assert_eq!(lines[2], "  Display Language: ar");
        assert_eq!(lines[3], "  Request Timeout: 120 s");

        ctx.set_language(Language::Ar);
        let lines = config_lines(&ctx, &config, &base, path);
        assert_eq!(lines[0], "الإعدادات:");
        assert!(lines[1].contains("عنوان الخادم"));
    }

    #[test]
    fn test_saved_line() {
        let ctx = LanguageContext::new(Language::En);
        assert_eq!(
            saved_line(&ctx, TextKey::DisplayLanguage, "en"),
            "✔ Saved: Display Language = en"
        );
    }

    #[test]
    fn test_chat_line_with_reports() {
        let ctx = LanguageContext::new(Language::En);
        let mut msg = ChatMessage::assistant("two");
        msg.reports.push(ReportRef {
            report_id: "R-7".into(),
            ..Default::default()
        });
        let line = chat_line(&ctx, &msg);
        assert!(line.starts_with("Assistant: two"));
        assert!(line.contains("Reports: R-7"));
    }
}
