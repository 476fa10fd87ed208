//! CLI Configuration
//!
//! CLIの設定ファイル（JSON）

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::adapter::repositories::json_config_loader::load_json;
use crate::adapter::webdav::DEFAULT_ENDPOINT;
use crate::domain::entities::config_map::Encoding;
use crate::domain::services::remote_name::DEFAULT_FOLDER;
use crate::domain::services::sheet_url::DEFAULT_SHEET_BASE_URL;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

fn default_sheet_base_url() -> String {
    DEFAULT_SHEET_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // ownCloud
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default = "default_folder")]
    pub folder: String,

    // Spreadsheet export
    #[serde(default = "default_sheet_base_url")]
    pub sheet_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user: None,
            password: None,
            folder: default_folder(),
            sheet_base_url: default_sheet_base_url(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let map = load_json(Path::new(expanded.as_ref()), Encoding::Utf8)
            .with_context(|| format!("Failed to load config file: {}", path))?;
        let config: Config = serde_json::from_value(serde_json::Value::Object(map))
            .with_context(|| format!("Invalid config file: {}", path))?;
        Ok(config)
    }

    /// 設定ファイルを読み込む（存在しなければ既定値）
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        if Path::new(expanded.as_ref()).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
