//! # Diagnostics
//!
//! 取得・アップロード中に発生する観測用イベントと、その受け口

use std::path::PathBuf;

use super::upload::CollectionStatus;

/// 観測用イベント
///
/// エラー検出には使わないこと（エラーは戻り値で返る）
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// シート取得のHTTPステータス
    HttpStatus { url: String, status: u16 },
    /// ストレージセッションを開いた
    SessionOpened { endpoint: String, user: String },
    /// コレクション作成ステップの結果
    Collection {
        name: String,
        status: CollectionStatus,
    },
    /// ファイルのアップロード開始
    FileUploading {
        index: usize,
        local: PathBuf,
        remote: String,
    },
    /// ファイルのアップロード完了
    FileUploaded {
        index: usize,
        remote: String,
        bytes: u64,
    },
    /// ストレージセッションを閉じた
    SessionClosed { endpoint: String },
}

/// 診断イベントの受け口
///
/// 呼び出し側が任意に渡す。クロージャもそのまま使える
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn emit(&self, event: &Diagnostic) {
        self(event)
    }
}

/// シンクが渡されていればイベントを送る
pub(crate) fn emit(sink: Option<&dyn DiagnosticSink>, event: Diagnostic) {
    if let Some(sink) = sink {
        sink.emit(&event);
    }
}
