//! Adapter Layer
//!
//! 外部システム（HTTP, ownCloud, ファイルシステム）との統合

pub mod config;
pub mod http;
pub mod logging;
pub mod repositories;
pub mod webdav;
