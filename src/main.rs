use clap::Parser;
use mirqab::{
    ApiClient, Config, LanguageContext, MediaFile, Result, assistant,
    cli::{Cli, Commands},
    dashboard, health, logging, render,
};
use mirqab_common::{ApiOutcome, LocationInput, Pagination, TextKey, decode_image_payload};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // config コマンドは壊れた設定ファイルの修復にも使うため、読み込み失敗を許容
    let config = if matches!(cli.command, Commands::Config { .. }) {
        Config::load_lenient()?
    } else {
        Config::load()?
    };
    let lang = LanguageContext::new(cli.lang.unwrap_or(config.language));

    match cli.command {
        Commands::Health { watch, interval } => {
            let client = ApiClient::from_config(&config)?;
            if watch {
                let monitor = health::HealthMonitor::new(client)
                    .with_interval(Duration::from_secs(interval.max(1)));
                tokio::select! {
                    _ = monitor.run(|snapshot| println!("{}", render::health_line(&lang, snapshot))) => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            } else {
                let snapshot = health::probe(&client).await;
                println!("{}", render::health_line(&lang, &snapshot));
            }
        }

        Commands::Analyze { file, lat, lng, save_overlay } => {
            let client = ApiClient::from_config(&config)?;
            let media = MediaFile::from_path(&file).await?;
            let processing = if media.is_video() {
                TextKey::ProcessingVideo
            } else {
                TextKey::ProcessingImage
            };
            println!("{}", lang.t(processing));

            let location = lat.zip(lng).map(|(lat, lng)| LocationInput::new(lat, lng));
            match client.analyze_media(media, location).await? {
                ApiOutcome::Success(result) => {
                    for line in render::analysis_lines(&lang, &result) {
                        println!("{}", line);
                    }
                    save_overlay_image(result.overlay_image.as_deref(), save_overlay.as_deref())?;
                }
                failure => print_failure(&lang, &failure),
            }
        }

        Commands::Segment { file, save_overlay } => {
            let client = ApiClient::from_config(&config)?;
            let media = MediaFile::from_path(&file).await?;
            println!("{}", lang.t(TextKey::ProcessingImage));

            match client.test_segmentation(media).await? {
                ApiOutcome::Success(seg) => {
                    let result = seg.into_analysis_result();
                    println!("✔ {}", lang.t(TextKey::AnalysisComplete));
                    save_overlay_image(result.overlay_image.as_deref(), save_overlay.as_deref())?;
                }
                failure => print_failure(&lang, &failure),
            }
        }

        Commands::Video { file, output } => {
            let client = ApiClient::from_config(&config)?;
            let media = MediaFile::from_path(&file).await?;
            println!("{}", lang.t(TextKey::ProcessingVideo));

            let video = client.process_video(media).await?;
            tokio::fs::write(&output, &video.bytes).await?;
            println!("✔ {}: {}", lang.t(TextKey::AnalysisComplete), output.display());
        }

        Commands::Reports { time_range, limit, offset, details } => {
            let client = ApiClient::from_config(&config)?;
            println!("{} | {}", lang.t(TextKey::Reports), lang.t(time_range.label_key()));

            match client.detection_reports(time_range, Pagination::new(limit, offset)).await? {
                ApiOutcome::Success(page) => {
                    if page.detections.is_empty() {
                        println!("{}", lang.t(TextKey::NoData));
                    }
                    for report in &page.detections {
                        let url = client.storage_url(&report.image_snapshot_url);
                        println!("{}", render::report_line(&lang, report, &url));
                        if details {
                            for line in render::report_detail_lines(&lang, report) {
                                println!("{}", line);
                            }
                        }
                    }
                    println!("({}/{})", page.detections.len(), page.total);
                }
                failure => print_failure(&lang, &failure),
            }
        }

        Commands::Stats { time_range } => {
            let client = ApiClient::from_config(&config)?;
            println!("{} | {}", lang.t(TextKey::Dashboard), lang.t(time_range.label_key()));

            match client.detection_stats(time_range).await? {
                ApiOutcome::Success(stats) => {
                    for line in render::stats_lines(&lang, &stats) {
                        println!("{}", line);
                    }
                }
                failure => print_failure(&lang, &failure),
            }
        }

        Commands::Dashboard { time_range } => {
            let client = ApiClient::from_config(&config)?;
            println!("{} | {}", lang.t(TextKey::AppName), lang.t(TextKey::AppTagline));
            println!("{} | {}\n", lang.t(TextKey::Dashboard), lang.t(time_range.label_key()));

            let data = dashboard::fetch_dashboard(&client, time_range).await;
            match &data.stats {
                Some(stats) => {
                    for line in render::stats_lines(&lang, stats) {
                        println!("{}", line);
                    }
                }
                None => println!("{}", lang.t(TextKey::NoData)),
            }

            println!("\n{}:", lang.t(TextKey::RecentDetections));
            if data.recent.is_empty() {
                println!("{}", lang.t(TextKey::NoData));
            }
            for report in &data.recent {
                let url = client.storage_url(&report.image_snapshot_url);
                println!("{}", render::report_line(&lang, report, &url));
            }
        }

        Commands::Ask { query, examples } => {
            let client = ApiClient::from_config(&config)?;
            let mut session = assistant::AssistantSession::new(client, lang.clone());

            if examples || query.is_empty() {
                println!("{}:", lang.t(TextKey::ExampleQueries));
                for example in session.examples() {
                    println!("  - {}", example);
                }
            }

            if let Some(reply) = session.ask(&query.join(" ")).await {
                println!("{}", render::chat_line(&lang, reply));
            }
        }

        Commands::Config { set_api_url, set_language, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(&url)?;
                let base = config.api_base_url()?;
                println!("{}", render::saved_line(&lang, TextKey::ApiAddress, base.as_str()));
            }

            if let Some(language) = set_language {
                config.set_language(language)?;
                lang.set_language(language);
                println!("{}", render::saved_line(&lang, TextKey::DisplayLanguage, language.code()));
            }

            if show {
                let base = config.api_base_url()?;
                let path = Config::config_path()?;
                for line in render::config_lines(&lang, &config, &base, &path) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}

fn print_failure<T>(lang: &LanguageContext, outcome: &ApiOutcome<T>) {
    if let Some(text) = outcome.failure_text(lang.t(TextKey::ErrorOccurred)) {
        eprintln!("✘ {}", text);
    }
}

fn save_overlay_image(payload: Option<&str>, output: Option<&Path>) -> Result<()> {
    let (Some(payload), Some(output)) = (payload, output) else {
        return Ok(());
    };
    let bytes = decode_image_payload(payload)?;
    std::fs::write(output, bytes)?;
    println!("✔ {}", output.display());
    Ok(())
}
