use clap::{Parser, Subcommand};
use mirqab_common::{Language, Pagination, TimeRange};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mirqab")]
#[command(about = "Mirqab camouflage detection client / مرقاب", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 表示言語 (ar/en)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub lang: Option<Language>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// バックエンドの死活確認
    Health {
        /// 定期的に監視し続ける
        #[arg(short, long)]
        watch: bool,

        /// 監視間隔（秒）
        #[arg(long, default_value = "30")]
        interval: u64,
    },

    /// 画像・動画を解析
    Analyze {
        /// 解析するファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 緯度
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// 経度
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// オーバーレイ画像の保存先
        #[arg(long)]
        save_overlay: Option<PathBuf>,
    },

    /// セグメンテーションのみのクイックテスト
    Segment {
        #[arg(required = true)]
        file: PathBuf,

        /// オーバーレイ画像の保存先
        #[arg(long)]
        save_overlay: Option<PathBuf>,
    },

    /// 動画を処理して結果動画を保存
    Video {
        #[arg(required = true)]
        file: PathBuf,

        /// 出力ファイル
        #[arg(short, long, required = true)]
        output: PathBuf,
    },

    /// 検知レポート一覧
    Reports {
        /// 期間 (24h/7d/30d/all)
        #[arg(short, long, default_value = "24h")]
        time_range: TimeRange,

        /// 取得件数
        #[arg(short, long, default_value_t = Pagination::DEFAULT_LIMIT)]
        limit: u32,

        /// 開始位置
        #[arg(short, long, default_value = "0")]
        offset: u32,

        /// 詳細（環境・迷彩・装備）も表示
        #[arg(long)]
        details: bool,
    },

    /// 検知統計
    Stats {
        /// 期間 (24h/7d/30d/all)
        #[arg(short, long, default_value = "24h")]
        time_range: TimeRange,
    },

    /// 統計と直近の検知をまとめて表示
    Dashboard {
        /// 期間 (24h/7d/30d/all)
        #[arg(short, long, default_value = "24h")]
        time_range: TimeRange,
    },

    /// アシスタントに質問
    Ask {
        /// 質問文
        query: Vec<String>,

        /// 質問例を表示
        #[arg(long)]
        examples: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIアドレスを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 表示言語を設定 (ar/en)
        #[arg(long)]
        set_language: Option<Language>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
