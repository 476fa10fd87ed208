//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ConfigMap / Encoding**: JSONから読み込んだ設定マッピング
//! - **Table**: シートから取得した表形式データ
//! - **Credentials**: リモートストレージの認証情報
//! - **FileUploadOutcome / BatchUploadReport**: アップロード結果
//! - **Diagnostic**: 観測用イベント

pub mod config_map;
pub mod credentials;
pub mod diagnostic;
pub mod table;
pub mod upload;
