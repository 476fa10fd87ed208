//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: サブコマンドのオーケストレーション
//! - **helpers**: ライブラリ利用者向けの関数API

pub mod cli;
pub mod helpers;
pub mod workflow;

pub use cli::{Args, Command};
pub use workflow::UtilsWorkflow;
