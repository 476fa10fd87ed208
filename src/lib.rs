//! # csae-utils
//!
//! 研究データのワークフロー向けヘルパー集
//!
//! - JSONファイルをキー順序を保ったマッピングとして読み込む
//! - 公開されたGoogleスプレッドシートをCSVとして取得し、表にデコードする
//! - ローカルファイルをownCloud（WebDAV）のコレクションへ順にアップロードする
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、エラー型、外部システムのtrait、純粋なロジック
//! - **Application層**: ユースケース（シート取得、バッチアップロード）
//! - **Adapter層**: 外部システムとの統合（reqwest, WebDAV, ファイルシステム）
//! - **Driver層**: CLI、依存性注入、関数API

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use domain::entities::config_map::{ConfigMap, Encoding};
pub use domain::entities::diagnostic::{Diagnostic, DiagnosticSink};
pub use domain::entities::table::{Cell, ColumnType, Table};
pub use domain::entities::upload::{BatchUploadReport, CollectionStatus, FileUploadOutcome};
pub use domain::error::{UtilsError, UtilsResult};
pub use driver::helpers::{fetch_sheet, load_json, upload_files};
