// selectbox — terminal select box
// Single / multiple selection with delayed, animated commits, driven by
// keyboard and mouse through a ratatui interface.

mod action;
mod app;
mod config;
mod event;
mod logging;
mod model;
mod select;
mod tui;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::global::GlobalConfig;

fn main() -> Result<()> {
    let config = GlobalConfig::load().context("loading config")?;

    if let Err(e) = logging::init(config.level_filter()?) {
        eprintln!("selectbox: logging disabled: {:#}", e);
    }

    let mut terminal = tui::init().context("terminal init failed")?;

    let result = run(&mut terminal, &config);

    // Always restore terminal, even on error
    let _ = tui::restore(&mut terminal);

    result
}

fn run(terminal: &mut tui::Tui, config: &GlobalConfig) -> Result<()> {
    let mut app = App::new(config);
    app.run(terminal)
}
