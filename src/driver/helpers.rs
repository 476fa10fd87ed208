//! Helper Functions
//!
//! 実アダプターを組み立てて各ユースケースを呼ぶ関数API

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::http::ReqwestHttpGetter;
use crate::adapter::webdav::WebDavConnector;
use crate::application::dto::upload_request::UploadRequest;
use crate::application::use_cases::fetch_sheet::FetchSheetUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::diagnostic::DiagnosticSink;
use crate::domain::entities::table::Table;
use crate::domain::entities::upload::BatchUploadReport;
use crate::domain::error::UtilsResult;

pub use crate::adapter::repositories::json_config_loader::load_json;

/// 公開シートをCSVとして取得し、表を返す
///
/// # Errors
///
/// `FetchSheetUseCase::execute` と同じ
///
/// # 例
///
/// ```no_run
/// # async fn run() -> csae_utils::domain::error::UtilsResult<()> {
/// let table = csae_utils::fetch_sheet("1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms", None).await?;
/// println!("{} rows", table.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_sheet(
    sheet_id: &str,
    sink: Option<Arc<dyn DiagnosticSink>>,
) -> UtilsResult<Table> {
    let mut use_case = FetchSheetUseCase::new(Arc::new(ReqwestHttpGetter::new()));
    if let Some(sink) = sink {
        use_case = use_case.with_sink(sink);
    }
    use_case.execute(sheet_id).await
}

/// ファイルを既定のownCloudインスタンスのコレクションへアップロードする
///
/// `folder` が `None` の場合は `pfp-data`
///
/// # Errors
///
/// `UploadFilesUseCase::execute` と同じ
pub async fn upload_files(
    files: Vec<PathBuf>,
    user: &str,
    password: &str,
    folder: Option<&str>,
    sink: Option<Arc<dyn DiagnosticSink>>,
) -> UtilsResult<BatchUploadReport> {
    let mut request = UploadRequest::new(files, Credentials::new(user, password));
    if let Some(folder) = folder {
        request = request.with_folder(folder);
    }

    let mut use_case = UploadFilesUseCase::new(Arc::new(WebDavConnector::default()));
    if let Some(sink) = sink {
        use_case = use_case.with_sink(sink);
    }
    use_case.execute(&request).await
}
