// File logger. The terminal belongs to the UI, so logs go to
// <cache_dir>/selectbox/selectbox.log, truncated on every run.
// ref: simplelog — https://github.com/drakulix/simplelog.rs

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("selectbox").join("selectbox.log"))
}

pub fn init(level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let path = log_path().context("no cache dir")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file).context("logger already set")?;
    log::info!("selectbox {} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
