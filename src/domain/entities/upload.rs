//! # Upload Outcomes
//!
//! ファイルアップロードの結果を表すバリューオブジェクト

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// 1ファイル分のアップロード結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileUploadOutcome {
    /// ローカルファイルのパス
    pub local_path: PathBuf,
    /// コレクション相対のリモートパス（`folder/name`）
    pub remote_path: String,
    /// 送信したバイト数
    pub bytes: u64,
    /// リモートが返したHTTPステータス
    pub status: u16,
    /// リモートが返したETag（あれば）
    pub etag: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// コレクション作成ステップの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionStatus {
    Created,
    AlreadyExisted,
}

/// バッチアップロードの結果
#[derive(Debug, Clone, Serialize)]
pub struct BatchUploadReport {
    /// バッチID（UUID v4）
    pub batch_id: String,
    /// アップロード先コレクション
    pub collection: String,
    pub collection_status: CollectionStatus,
    /// 入力順のファイルごとの結果
    pub outcomes: Vec<FileUploadOutcome>,
}

impl BatchUploadReport {
    /// アップロードされたファイル数
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// 最後にアップロードしたファイルの結果
    pub fn last(&self) -> Option<&FileUploadOutcome> {
        self.outcomes.last()
    }

    /// 送信した総バイト数
    pub fn total_bytes(&self) -> u64 {
        self.outcomes.iter().map(|o| o.bytes).sum()
    }
}
