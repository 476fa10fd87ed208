//! # Remote Storage Traits
//!
//! ファイル同期サーバー（コレクションとファイル）を抽象化

use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::upload::CollectionStatus;
use crate::domain::error::UtilsResult;

/// PUTの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutReceipt {
    /// 送信したバイト数
    pub bytes: u64,
    pub status: u16,
    pub etag: Option<String>,
}

/// 認証済みのストレージセッション
///
/// 1回のバッチアップロードの間だけ使われ、終了時に必ず `close` される
#[async_trait]
pub trait StorageSession: Send + Sync {
    /// 接続先のエンドポイント
    fn endpoint(&self) -> &str;

    /// コレクションを作成する
    ///
    /// # Returns
    ///
    /// 作成した場合は `Created`、既に存在した場合は `AlreadyExisted`
    ///
    /// # Errors
    ///
    /// 既存以外の理由で作成できなかった場合
    async fn create_collection(&self, name: &str) -> UtilsResult<CollectionStatus>;

    /// ローカルファイルをリモートパスに書き込む
    ///
    /// # Arguments
    ///
    /// * `remote_path` - コレクション相対のパス（`folder/name`）
    /// * `local_path` - 送信するローカルファイル
    async fn put_file(&self, remote_path: &str, local_path: &Path) -> UtilsResult<PutReceipt>;

    /// セッションを閉じる
    async fn close(&self);
}

/// ストレージセッションのファクトリ
#[async_trait]
pub trait StorageConnector: Send + Sync {
    /// 認証済みセッションを開く
    ///
    /// # Errors
    ///
    /// 認証情報が拒否された場合は `UtilsError::Auth`、
    /// 到達できない場合は `UtilsError::Network`
    async fn connect(&self, credentials: &Credentials) -> UtilsResult<Box<dyn StorageSession>>;
}
