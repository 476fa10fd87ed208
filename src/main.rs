//! csae-utils - Research data helpers
//!
//! JSON読み込み、公開シートの取得、ownCloudへのアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use csae_utils::adapter::config::Config;
use csae_utils::driver::{Args, UtilsWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (a missing default config file means defaults)
    let config = match args.config_path() {
        (path, true) => Config::load(path)?,
        (path, false) => Config::load_or_default(path)?,
    };

    let workflow = UtilsWorkflow::new(config);

    workflow.execute(args.command).await
}
