//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// 設定ファイルの既定パス
pub const DEFAULT_CONFIG_PATH: &str = "./csae-utils.json";

/// 研究データ用のヘルパーCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "csae-utils")]
#[command(
    about = "Load JSON files, fetch public spreadsheets and upload files to ownCloud",
    long_about = None
)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Load a JSON file and print it (key order preserved)
    LoadJson {
        /// Path to the JSON file
        path: String,

        /// Text encoding of the file
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
    },

    /// Download a public Google Sheet as CSV and print its rows as JSON
    FetchSheet {
        /// Sheet id (the part of the sheet URL between /d/ and /edit)
        sheet_id: String,

        /// Treat non-2xx HTTP status codes as errors
        #[arg(long)]
        strict_status: bool,

        /// Override the CSV export base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Upload files to a collection on the ownCloud server
    Upload {
        /// Files or directories to upload (directories expand to their files)
        #[arg(required = true)]
        paths: Vec<String>,

        /// Destination collection [default: pfp-data]
        #[arg(short, long)]
        folder: Option<String>,

        /// ownCloud user name
        #[arg(short, long)]
        user: Option<String>,

        /// ownCloud password
        #[arg(long)]
        password: Option<String>,

        /// ownCloud endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Dry run mode - print the plan without connecting
        #[arg(long)]
        dry_run: bool,
    },
}

impl Args {
    /// 使用する設定ファイルのパスと、明示指定かどうか
    pub fn config_path(&self) -> (&str, bool) {
        match &self.config {
            Some(path) => (path.as_str(), true),
            None => (DEFAULT_CONFIG_PATH, false),
        }
    }
}
