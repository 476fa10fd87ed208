//! # Use Cases
//!
//! アプリケーションのフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **FetchSheetUseCase**: 公開シートの取得と表へのデコード
//! - **UploadFilesUseCase**: ファイルのバッチアップロード

pub mod fetch_sheet;
pub mod upload_files;
