//! # Fetch Sheet Use Case
//!
//! 公開シートをCSVとして取得し、表にデコードするユースケース

use std::sync::Arc;

use crate::domain::entities::diagnostic::{emit, Diagnostic, DiagnosticSink};
use crate::domain::entities::table::Table;
use crate::domain::error::{UtilsError, UtilsResult};
use crate::domain::repositories::sheet_repository::HttpGetter;
use crate::domain::services::sheet_url::{SheetUrlService, DEFAULT_SHEET_BASE_URL};
use crate::domain::services::table_decoder::TableDecoder;

/// シート取得ユースケース
pub struct FetchSheetUseCase<G: HttpGetter> {
    http: Arc<G>,
    base_url: String,
    strict_status: bool,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl<G: HttpGetter> FetchSheetUseCase<G> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `http` - HTTP GETを行うリポジトリ
    pub fn new(http: Arc<G>) -> Self {
        Self {
            http,
            base_url: DEFAULT_SHEET_BASE_URL.to_string(),
            strict_status: false,
            sink: None,
        }
    }

    /// ダウンロードURLのベースを差し替える
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 非2xxのステータスをエラーとして扱う
    pub fn with_strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// 診断イベントの受け口を設定
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// シートを取得して表を返す
    ///
    /// # Arguments
    ///
    /// * `sheet_id` - シートID（URLの `/d/` と `/edit` の間の部分）
    ///
    /// # Errors
    ///
    /// - IDが空の場合は `UtilsError::InvalidInput`
    /// - 通信失敗は `UtilsError::Network`
    /// - データ行がない場合は `UtilsError::EmptyResult`
    /// - CSVとして解釈できない場合は `UtilsError::Parse`
    pub async fn execute(&self, sheet_id: &str) -> UtilsResult<Table> {
        let url = SheetUrlService::build(&self.base_url, sheet_id)?;
        let response = self.http.get(&url).await?;

        emit(
            self.sink.as_deref(),
            Diagnostic::HttpStatus {
                url: url.clone(),
                status: response.status,
            },
        );

        if self.strict_status && !response.is_success() {
            return Err(UtilsError::Network(format!(
                "GET {} returned status {}",
                url, response.status
            )));
        }

        TableDecoder::decode(&response.body)
    }
}
