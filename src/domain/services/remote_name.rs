//! # Remote Name Service
//!
//! アップロード先のコレクション名とリモートパスの導出

use std::path::Path;

use crate::domain::error::UtilsError;

/// 既定のアップロード先コレクション
pub const DEFAULT_FOLDER: &str = "pfp-data";

/// リモート名の導出
pub struct RemoteNameService;

impl RemoteNameService {
    /// コレクション名を正規化する（空のセグメントを除去）
    ///
    /// # Errors
    ///
    /// 空のコレクション名、`.` / `..` を含む名前は `UtilsError::InvalidInput`
    pub fn collection(folder: &str) -> Result<String, UtilsError> {
        let segments: Vec<&str> = folder
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(UtilsError::invalid_input(
                "destination folder must not be empty",
            ));
        }
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(UtilsError::invalid_input(format!(
                "destination folder must not contain '.' or '..' segments: {}",
                folder
            )));
        }

        Ok(segments.join("/"))
    }

    /// `collection/<basename>` を返す
    ///
    /// # Errors
    ///
    /// パスにファイル名がない場合（`/`、`..` など）は `UtilsError::InvalidInput`
    pub fn remote_path(collection: &str, local: &Path) -> Result<String, UtilsError> {
        let name = local
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                UtilsError::invalid_input(format!("path has no file name: {}", local.display()))
            })?;

        Ok(format!("{}/{}", collection, name))
    }
}
