//! # Upload Request DTO
//!
//! バッチアップロードの入力

use std::path::PathBuf;

use crate::domain::entities::credentials::Credentials;
use crate::domain::services::remote_name::DEFAULT_FOLDER;

/// アップロード要求
///
/// ファイルは入力順にアップロードされる
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// アップロードするローカルファイル
    pub files: Vec<PathBuf>,
    /// リモートストレージの認証情報
    pub credentials: Credentials,
    /// アップロード先コレクション名
    pub folder: String,
}

impl UploadRequest {
    /// 既定のコレクション（`pfp-data`）宛ての要求を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use csae_utils::application::dto::upload_request::UploadRequest;
    /// use csae_utils::domain::entities::credentials::Credentials;
    ///
    /// let request = UploadRequest::new(
    ///     vec!["/path/to/file1.txt".into(), "/path/to/file2.pdf".into()],
    ///     Credentials::new("your_username", "your_password"),
    /// )
    /// .with_folder("my-uploads");
    ///
    /// assert_eq!(request.files.len(), 2);
    /// assert_eq!(request.folder, "my-uploads");
    /// ```
    pub fn new(files: Vec<PathBuf>, credentials: Credentials) -> Self {
        Self {
            files,
            credentials,
            folder: DEFAULT_FOLDER.to_string(),
        }
    }

    /// アップロード先コレクションを変更
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }
}
