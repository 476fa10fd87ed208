//! Workflow Orchestration
//!
//! サブコマンドごとのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

use crate::adapter::config::Config;
use crate::adapter::http::ReqwestHttpGetter;
use crate::adapter::logging::LogSink;
use crate::adapter::repositories::json_config_loader::JsonConfigLoader;
use crate::adapter::webdav::WebDavConnector;
use crate::application::dto::upload_request::UploadRequest;
use crate::application::use_cases::fetch_sheet::FetchSheetUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::domain::entities::config_map::Encoding;
use crate::domain::entities::credentials::Credentials;
use crate::domain::error::UtilsError;
use crate::domain::services::remote_name::RemoteNameService;

use super::cli::Command;

/// `~` を展開したパス
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// アップロード対象を集める
///
/// ディレクトリはその下の通常ファイル（名前順）に展開する。
/// それ以外のパスはそのまま残す（存在しなければアップロード時にエラー）
pub fn collect_upload_paths(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = expand_path(path);
        if path.is_dir() {
            for entry in WalkDir::new(&path)
                .follow_links(true)
                .sort_by_file_name()
            {
                let entry = entry
                    .with_context(|| format!("Failed to read directory {}", path.display()))?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

/// Utility Workflow
pub struct UtilsWorkflow {
    config: Config,
}

impl UtilsWorkflow {
    /// Create a new workflow instance with the loaded configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute one subcommand
    pub async fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::LoadJson { path, encoding } => self.load_json(&path, &encoding).await,
            Command::FetchSheet {
                sheet_id,
                strict_status,
                base_url,
            } => self.fetch_sheet(&sheet_id, strict_status, base_url).await,
            Command::Upload {
                paths,
                folder,
                user,
                password,
                endpoint,
                dry_run,
            } => {
                let files = collect_upload_paths(&paths)?;
                let folder = folder.unwrap_or_else(|| self.config.folder.clone());
                if dry_run {
                    return self.print_upload_plan(&files, &folder);
                }
                self.upload(files, folder, user, password, endpoint).await
            }
        }
    }

    async fn load_json(&self, path: &str, encoding: &str) -> Result<()> {
        let encoding: Encoding = encoding.parse()?;
        let path = expand_path(path);

        let map = JsonConfigLoader::with_encoding(encoding)
            .load(&path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?;

        println!("{}", serde_json::to_string_pretty(&map)?);
        Ok(())
    }

    async fn fetch_sheet(
        &self,
        sheet_id: &str,
        strict_status: bool,
        base_url: Option<String>,
    ) -> Result<()> {
        let base_url = base_url.unwrap_or_else(|| self.config.sheet_base_url.clone());
        let use_case = FetchSheetUseCase::new(Arc::new(ReqwestHttpGetter::new()))
            .with_base_url(base_url)
            .with_strict_status(strict_status)
            .with_sink(Arc::new(LogSink));

        let table = use_case
            .execute(sheet_id)
            .await
            .with_context(|| format!("Failed to fetch sheet {}", sheet_id))?;

        info!(
            "Fetched {} rows x {} columns",
            table.len(),
            table.columns().len()
        );
        println!("{}", serde_json::to_string_pretty(&table.to_json_rows())?);
        Ok(())
    }

    fn print_upload_plan(&self, files: &[PathBuf], folder: &str) -> Result<()> {
        let collection = RemoteNameService::collection(folder)?;

        println!("✓ Dry-run mode (not actually uploading)");
        println!("  Endpoint: {}", self.config.endpoint);
        println!("  Would upload {} files:", files.len());
        for local in files {
            let remote = RemoteNameService::remote_path(&collection, local)?;
            println!("    - {} -> {}", local.display(), remote);
        }
        Ok(())
    }

    async fn upload(
        &self,
        files: Vec<PathBuf>,
        folder: String,
        user: Option<String>,
        password: Option<String>,
        endpoint: Option<String>,
    ) -> Result<()> {
        let user = user
            .or_else(|| self.config.user.clone())
            .context("No ownCloud user given (use --user or the config file)")?;
        let password = password
            .or_else(|| self.config.password.clone())
            .context("No ownCloud password given (use --password or the config file)")?;
        let endpoint = endpoint.unwrap_or_else(|| self.config.endpoint.clone());

        let request =
            UploadRequest::new(files, Credentials::new(user, password)).with_folder(folder);
        let use_case = UploadFilesUseCase::new(Arc::new(WebDavConnector::new(endpoint)))
            .with_sink(Arc::new(LogSink));

        match use_case.execute(&request).await {
            Ok(report) => {
                for outcome in &report.outcomes {
                    println!(
                        "✓ Uploaded {} to {} ({} bytes)",
                        outcome.local_path.display(),
                        outcome.remote_path,
                        outcome.bytes
                    );
                }
                println!(
                    "✓ Upload complete! {} files, {} bytes (batch {})",
                    report.len(),
                    report.total_bytes(),
                    report.batch_id
                );
                Ok(())
            }
            Err(UtilsError::Upload {
                index,
                local,
                remote,
                completed,
                cause,
            }) => {
                for outcome in &completed {
                    println!(
                        "✓ Uploaded {} to {}",
                        outcome.local_path.display(),
                        outcome.remote_path
                    );
                }
                println!(
                    "✗ Stopped at file #{} ({} -> {}); {} files were already uploaded",
                    index,
                    local.display(),
                    remote,
                    completed.len()
                );
                Err(anyhow::Error::new(*cause)
                    .context(format!("Failed to upload {}", local.display())))
            }
            Err(e) => Err(e).context("Upload failed"),
        }
    }
}
