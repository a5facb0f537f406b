//! Courtbook - Court Rental CLI
//!
//! コートレンタルの作成と検索

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use courtbook::adapter::config::Config;
use courtbook::driver::{Args, BookingWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Open the store and wire the services
    let workflow = BookingWorkflow::open(config).await?;

    let output = workflow.execute(args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
