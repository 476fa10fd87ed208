//! # Domain Layer
//!
//! このモジュールはユーティリティの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPクライアントやWebDAVの詳細を知らない
//! - 外部システムとの境界はtraitとして定義
//! - 純粋なロジック（URL組み立て、リモート名の導出、CSVの型推定）
//!
//! ## 構成要素
//!
//! - **entities**: エンティティ（Table, BatchUploadReportなど）
//! - **repositories**: 外部システムの抽象（HTTP取得、リモートストレージ）
//! - **services**: Domain Service
//! - **error**: エラー型

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
