//! Headless mode: compute the dashboard once and write it as JSON.

use std::path::Path;

use anyhow::{Context, Result};

use crate::analytics::dashboard::Dashboard;
use crate::config::Config;
use crate::data::filter::GenreSelection;
use crate::data::loader::{parse_upload, Upload};

/// Build the dashboard for `file` with the given interaction.
pub fn build(file: &Path, genre: &str, query: &str, config: &Config) -> Result<Dashboard> {
    let upload = Upload::from_path(file)?;
    let raw = parse_upload(&upload).with_context(|| format!("loading {}", file.display()))?;
    let dashboard = Dashboard::build(
        &upload.name,
        &raw,
        &GenreSelection::from_choice(genre),
        query,
        &config.dashboard_options(),
    )?;
    Ok(dashboard)
}

/// Write `dashboard` as pretty JSON to `out`, or stdout when `out` is `-`.
pub fn write(dashboard: &Dashboard, out: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(dashboard).context("serializing dashboard")?;
    if out == Path::new("-") {
        println!("{json}");
    } else {
        std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
        log::info!("Wrote dashboard report to {}", out.display());
    }
    Ok(())
}
