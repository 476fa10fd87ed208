//! Repository Implementations
//!
//! ローカルファイルシステム上のリポジトリ実装

pub mod json_config_loader;
