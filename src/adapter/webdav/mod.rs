//! ownCloud (WebDAV) Adapter Modules
//!
//! ファイル同期サーバーとの統合のためのアダプターモジュール

pub mod client;
pub mod status;

pub use client::{WebDavConnector, WebDavSession, DEFAULT_ENDPOINT};
