//! # Error Taxonomy
//!
//! ライブラリ全体で使うエラー型

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::upload::FileUploadOutcome;

/// ユーティリティ操作のエラー
#[derive(Error, Debug)]
pub enum UtilsError {
    /// ファイルが存在しない、または読めない
    #[error("File not found or unreadable: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 構造化データ（JSON）または表形式データ（CSV）として解釈できない
    #[error("Parse error: {0}")]
    Parse(String),

    /// 取得した表にデータ行がない
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// 通信レベルの失敗
    #[error("Network error: {0}")]
    Network(String),

    /// セッション確立時の認証失敗
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// リモートが想定外のステータスを返した
    #[error("Remote rejected {operation} on {target} with status {status}")]
    Remote {
        operation: String,
        target: String,
        status: u16,
    },

    /// バッチ内のファイルのアップロード失敗
    ///
    /// `completed` には失敗位置より前に成功したファイルの結果が入る
    #[error("Upload of file #{index} ({}) to {remote} failed: {cause}", local.display())]
    Upload {
        index: usize,
        local: PathBuf,
        remote: String,
        completed: Vec<FileUploadOutcome>,
        #[source]
        cause: Box<UtilsError>,
    },

    /// 呼び出し側の入力が不正
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// ライブラリ内部の失敗（バックグラウンドタスクのパニックなど）
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UtilsError {
    pub fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn remote(operation: &str, target: &str, status: u16) -> Self {
        Self::Remote {
            operation: operation.to_string(),
            target: target.to_string(),
            status,
        }
    }
}

impl From<reqwest::Error> for UtilsError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

/// ライブラリ共通のResult型
pub type UtilsResult<T> = Result<T, UtilsError>;
