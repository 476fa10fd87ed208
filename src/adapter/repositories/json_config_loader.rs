//! JSON Config Loader
//!
//! JSONファイルを読み込み、キー順序を保ったマッピングとして返す

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::domain::entities::config_map::{ConfigMap, Encoding};
use crate::domain::error::{UtilsError, UtilsResult};

/// JSONファイルベースの設定ローダー
pub struct JsonConfigLoader {
    encoding: Encoding,
}

impl JsonConfigLoader {
    /// 新しいローダーを作成（UTF-8）
    pub fn new() -> Self {
        Self {
            encoding: Encoding::default(),
        }
    }

    /// 文字エンコーディングを指定
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self { encoding }
    }

    /// ファイルを読み込む（同期処理）
    pub fn load_sync(path: &Path, encoding: Encoding) -> UtilsResult<ConfigMap> {
        let bytes = fs::read(path).map_err(|e| UtilsError::not_found(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let content = encoding.decode(&bytes).map_err(|e| match e {
            UtilsError::Parse(message) => {
                UtilsError::Parse(format!("{}: {}", path.display(), message))
            }
            other => other,
        })?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| UtilsError::Parse(format!("{}: {}", path.display(), e)))?;

        match value {
            serde_json::Value::Object(map) => {
                info!("Loaded {} top-level keys from {}", map.len(), path.display());
                Ok(map)
            }
            other => Err(UtilsError::Parse(format!(
                "{}: expected a JSON object at top level, found {}",
                path.display(),
                json_kind(&other)
            ))),
        }
    }

    /// ファイルを読み込む
    ///
    /// 読み込みはブロッキングスレッドで行う
    pub async fn load(&self, path: &Path) -> UtilsResult<ConfigMap> {
        let path = path.to_path_buf();
        let encoding = self.encoding;
        tokio::task::spawn_blocking(move || Self::load_sync(&path, encoding))
            .await
            .map_err(join_error)?
    }
}

impl Default for JsonConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONファイルを読み込む
///
/// # Errors
///
/// - ファイルが存在しない、読めない場合は `UtilsError::NotFound`
/// - JSONとして不正、またはトップレベルがオブジェクトでない場合は `UtilsError::Parse`
///
/// # 例
///
/// ```no_run
/// use csae_utils::adapter::repositories::json_config_loader::load_json;
/// use csae_utils::domain::entities::config_map::Encoding;
///
/// let config = load_json("config.json", Encoding::Utf8).unwrap();
/// for (key, value) in &config {
///     println!("{} = {}", key, value);
/// }
/// ```
pub fn load_json(path: impl AsRef<Path>, encoding: Encoding) -> UtilsResult<ConfigMap> {
    JsonConfigLoader::load_sync(path.as_ref(), encoding)
}

fn join_error(error: tokio::task::JoinError) -> UtilsError {
    UtilsError::Internal(format!("Failed to run blocking task: {}", error))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
