//! # Upload Files Use Case
//!
//! ローカルファイルをリモートのコレクションへ順にアップロードするユースケース

use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::dto::upload_request::UploadRequest;
use crate::domain::entities::diagnostic::{emit, Diagnostic, DiagnosticSink};
use crate::domain::entities::upload::{BatchUploadReport, FileUploadOutcome};
use crate::domain::error::{UtilsError, UtilsResult};
use crate::domain::repositories::storage_repository::{StorageConnector, StorageSession};
use crate::domain::services::remote_name::RemoteNameService;

/// ファイルアップロードユースケース
///
/// 1回の実行につき1つのセッションを開き、終了時（成功・失敗とも）に閉じる
pub struct UploadFilesUseCase<C: StorageConnector> {
    connector: Arc<C>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl<C: StorageConnector> UploadFilesUseCase<C> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `connector` - ストレージセッションのファクトリ
    pub fn new(connector: Arc<C>) -> Self {
        Self {
            connector,
            sink: None,
        }
    }

    /// 診断イベントの受け口を設定
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// ファイルを入力順にアップロードする
    ///
    /// # Returns
    ///
    /// ファイルごとの結果を含むバッチレポート
    ///
    /// # Errors
    ///
    /// - 入力が不正な場合は `UtilsError::InvalidInput`（通信前に検出）
    /// - セッション確立の失敗は `UtilsError::Auth` / `UtilsError::Network`
    /// - コレクション作成の失敗（既存を除く）はそのまま返す
    /// - ファイルの失敗は `UtilsError::Upload`。それ以降のファイルは試行しない
    pub async fn execute(&self, request: &UploadRequest) -> UtilsResult<BatchUploadReport> {
        let collection = RemoteNameService::collection(&request.folder)?;
        let plan = Self::plan(request, &collection)?;

        let session = self.connector.connect(&request.credentials).await?;
        let endpoint = session.endpoint().to_string();
        emit(
            self.sink.as_deref(),
            Diagnostic::SessionOpened {
                endpoint: endpoint.clone(),
                user: request.credentials.user.clone(),
            },
        );

        let result = self.upload_all(session.as_ref(), &collection, plan).await;

        session.close().await;
        emit(self.sink.as_deref(), Diagnostic::SessionClosed { endpoint });

        result
    }

    /// ローカルパスとリモートパスの組を作る
    fn plan(request: &UploadRequest, collection: &str) -> UtilsResult<Vec<(PathBuf, String)>> {
        if request.files.is_empty() {
            return Err(UtilsError::invalid_input("no files to upload"));
        }

        request
            .files
            .iter()
            .map(|local| {
                let remote = RemoteNameService::remote_path(collection, local)?;
                Ok((local.clone(), remote))
            })
            .collect()
    }

    async fn upload_all(
        &self,
        session: &dyn StorageSession,
        collection: &str,
        plan: Vec<(PathBuf, String)>,
    ) -> UtilsResult<BatchUploadReport> {
        let collection_status = session.create_collection(collection).await?;
        emit(
            self.sink.as_deref(),
            Diagnostic::Collection {
                name: collection.to_string(),
                status: collection_status,
            },
        );

        let mut outcomes = Vec::with_capacity(plan.len());

        for (index, (local, remote)) in plan.into_iter().enumerate() {
            emit(
                self.sink.as_deref(),
                Diagnostic::FileUploading {
                    index,
                    local: local.clone(),
                    remote: remote.clone(),
                },
            );

            match session.put_file(&remote, &local).await {
                Ok(receipt) => {
                    emit(
                        self.sink.as_deref(),
                        Diagnostic::FileUploaded {
                            index,
                            remote: remote.clone(),
                            bytes: receipt.bytes,
                        },
                    );
                    outcomes.push(FileUploadOutcome {
                        local_path: local,
                        remote_path: remote,
                        bytes: receipt.bytes,
                        status: receipt.status,
                        etag: receipt.etag,
                        uploaded_at: Utc::now(),
                    });
                }
                Err(cause) => {
                    return Err(UtilsError::Upload {
                        index,
                        local,
                        remote,
                        completed: outcomes,
                        cause: Box::new(cause),
                    });
                }
            }
        }

        Ok(BatchUploadReport {
            batch_id: uuid::Uuid::new_v4().to_string(),
            collection: collection.to_string(),
            collection_status,
            outcomes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    use crate::domain::entities::credentials::Credentials;
    use crate::domain::entities::upload::CollectionStatus;
    use crate::domain::repositories::storage_repository::PutReceipt;

    #[derive(Clone, Copy)]
    enum CollectionBehavior {
        Create,
        Exists,
        Forbidden,
    }

    /// 呼び出しを記録するフェイクのセッション
    struct FakeSession {
        calls: Arc<Mutex<Vec<String>>>,
        collection: CollectionBehavior,
        fail_on: Option<String>,
    }

    #[async_trait]
    impl StorageSession for FakeSession {
        fn endpoint(&self) -> &str {
            "https://cloud.example.org"
        }

        async fn create_collection(&self, name: &str) -> UtilsResult<CollectionStatus> {
            self.calls.lock().unwrap().push(format!("MKCOL {}", name));
            match self.collection {
                CollectionBehavior::Create => Ok(CollectionStatus::Created),
                CollectionBehavior::Exists => Ok(CollectionStatus::AlreadyExisted),
                CollectionBehavior::Forbidden => Err(UtilsError::remote("MKCOL", name, 403)),
            }
        }

        async fn put_file(&self, remote_path: &str, _local_path: &Path) -> UtilsResult<PutReceipt> {
            self.calls.lock().unwrap().push(format!("PUT {}", remote_path));
            if self.fail_on.as_deref() == Some(remote_path) {
                return Err(UtilsError::remote("PUT", remote_path, 507));
            }
            Ok(PutReceipt {
                bytes: 4,
                status: 201,
                etag: Some(format!("\"{}\"", remote_path)),
            })
        }

        async fn close(&self) {
            self.calls.lock().unwrap().push("CLOSE".to_string());
        }
    }

    struct FakeConnector {
        calls: Arc<Mutex<Vec<String>>>,
        reject: bool,
        collection: CollectionBehavior,
        fail_on: Option<String>,
    }

    impl FakeConnector {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                reject: false,
                collection: CollectionBehavior::Create,
                fail_on: None,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StorageConnector for FakeConnector {
        async fn connect(&self, credentials: &Credentials) -> UtilsResult<Box<dyn StorageSession>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("CONNECT {}", credentials.user));
            if self.reject {
                return Err(UtilsError::Auth("401 Unauthorized".to_string()));
            }
            Ok(Box::new(FakeSession {
                calls: self.calls.clone(),
                collection: self.collection,
                fail_on: self.fail_on.clone(),
            }))
        }
    }

    fn request(files: &[&str]) -> UploadRequest {
        UploadRequest::new(
            files.iter().map(PathBuf::from).collect(),
            Credentials::new("alice", "pw"),
        )
    }

    #[tokio::test]
    async fn test_upload_files_success_returns_every_outcome() {
        let connector = Arc::new(FakeConnector::new());
        let use_case = UploadFilesUseCase::new(connector.clone());

        let report = use_case
            .execute(&request(&["/data/a.csv", "/data/b.csv"]))
            .await
            .unwrap();

        assert_eq!(report.collection, "pfp-data");
        assert_eq!(report.collection_status, CollectionStatus::Created);
        assert_eq!(report.len(), 2);
        assert_eq!(report.outcomes[0].remote_path, "pfp-data/a.csv");
        assert_eq!(report.last().unwrap().remote_path, "pfp-data/b.csv");
        assert_eq!(report.total_bytes(), 8);
        assert!(!report.batch_id.is_empty());

        assert_eq!(
            connector.calls(),
            vec![
                "CONNECT alice",
                "MKCOL pfp-data",
                "PUT pfp-data/a.csv",
                "PUT pfp-data/b.csv",
                "CLOSE",
            ]
        );
    }

    #[tokio::test]
    async fn test_upload_files_existing_collection_does_not_fail() {
        let mut connector = FakeConnector::new();
        connector.collection = CollectionBehavior::Exists;
        let connector = Arc::new(connector);
        let use_case = UploadFilesUseCase::new(connector.clone());

        let report = use_case
            .execute(&request(&["/data/a.csv"]).with_folder("my-uploads"))
            .await
            .unwrap();

        assert_eq!(report.collection_status, CollectionStatus::AlreadyExisted);
        assert_eq!(report.outcomes[0].remote_path, "my-uploads/a.csv");
    }

    #[tokio::test]
    async fn test_upload_files_collection_failure_propagates_and_closes() {
        let mut connector = FakeConnector::new();
        connector.collection = CollectionBehavior::Forbidden;
        let connector = Arc::new(connector);
        let use_case = UploadFilesUseCase::new(connector.clone());

        let result = use_case.execute(&request(&["/data/a.csv"])).await;

        assert!(matches!(result, Err(UtilsError::Remote { status: 403, .. })));
        assert_eq!(
            connector.calls(),
            vec!["CONNECT alice", "MKCOL pfp-data", "CLOSE"]
        );
    }

    #[tokio::test]
    async fn test_upload_files_stops_at_first_failure() {
        let mut connector = FakeConnector::new();
        connector.fail_on = Some("pfp-data/2.txt".to_string());
        let connector = Arc::new(connector);
        let use_case = UploadFilesUseCase::new(connector.clone());

        let result = use_case
            .execute(&request(&["/tmp/1.txt", "/tmp/2.txt", "/tmp/3.txt"]))
            .await;

        match result {
            Err(UtilsError::Upload {
                index,
                local,
                remote,
                completed,
                cause,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(local, PathBuf::from("/tmp/2.txt"));
                assert_eq!(remote, "pfp-data/2.txt");
                assert_eq!(completed.len(), 1);
                assert_eq!(completed[0].remote_path, "pfp-data/1.txt");
                assert!(matches!(*cause, UtilsError::Remote { status: 507, .. }));
            }
            other => panic!("expected upload error, got {:?}", other),
        }

        // the third file is never attempted, the session is still closed
        assert_eq!(
            connector.calls(),
            vec![
                "CONNECT alice",
                "MKCOL pfp-data",
                "PUT pfp-data/1.txt",
                "PUT pfp-data/2.txt",
                "CLOSE",
            ]
        );
    }

    #[tokio::test]
    async fn test_upload_files_auth_failure_uploads_nothing() {
        let mut connector = FakeConnector::new();
        connector.reject = true;
        let connector = Arc::new(connector);
        let use_case = UploadFilesUseCase::new(connector.clone());

        let result = use_case.execute(&request(&["/data/a.csv"])).await;

        assert!(matches!(result, Err(UtilsError::Auth(_))));
        assert_eq!(connector.calls(), vec!["CONNECT alice"]);
    }

    #[tokio::test]
    async fn test_upload_files_rejects_invalid_input_before_connecting() {
        let connector = Arc::new(FakeConnector::new());
        let use_case = UploadFilesUseCase::new(connector.clone());

        let empty = use_case.execute(&request(&[])).await;
        assert!(matches!(empty, Err(UtilsError::InvalidInput(_))));

        let no_name = use_case.execute(&request(&["/data/a.csv", "/"])).await;
        assert!(matches!(no_name, Err(UtilsError::InvalidInput(_))));

        let no_folder = use_case
            .execute(&request(&["/data/a.csv"]).with_folder("/"))
            .await;
        assert!(matches!(no_folder, Err(UtilsError::InvalidInput(_))));

        let escaping_folder = use_case
            .execute(&request(&["/data/a.csv"]).with_folder("../../x"))
            .await;
        assert!(matches!(escaping_folder, Err(UtilsError::InvalidInput(_))));

        assert!(connector.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_files_emits_diagnostics_in_order() {
        let connector = Arc::new(FakeConnector::new());
        let seen: Arc<Mutex<Vec<Diagnostic>>> = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let use_case = UploadFilesUseCase::new(connector).with_sink(Arc::new(
            move |event: &Diagnostic| recorder.lock().unwrap().push(event.clone()),
        ));

        use_case.execute(&request(&["/data/a.csv"])).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 5);
        assert!(matches!(seen[0], Diagnostic::SessionOpened { .. }));
        assert!(matches!(
            seen[1],
            Diagnostic::Collection {
                status: CollectionStatus::Created,
                ..
            }
        ));
        assert_eq!(
            seen[2],
            Diagnostic::FileUploading {
                index: 0,
                local: PathBuf::from("/data/a.csv"),
                remote: "pfp-data/a.csv".to_string(),
            }
        );
        assert!(matches!(seen[3], Diagnostic::FileUploaded { bytes: 4, .. }));
        assert!(matches!(seen[4], Diagnostic::SessionClosed { .. }));
    }
}
