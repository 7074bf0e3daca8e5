//! Initialize .unitgate.toml configuration

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use unitgate_core::config::{UnitgateConfig, BACKEND_URL_ENV, CONFIG_FILENAME};

pub fn run(target_path: &Path) -> Result<()> {
    let config_path = target_path.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "  {} {} already exists, leaving it untouched.",
            "\u{26a1}".yellow(),
            config_path.display()
        );
        return Ok(());
    }

    let config = UnitgateConfig::default();
    config.save(&config_path)?;

    eprintln!("  {} Wrote {}", "\u{2713}".green(), config_path.display());
    eprintln!(
        "  Backend: {} (override with {} or {})",
        config.backend.url.bold(),
        "--backend".bold(),
        BACKEND_URL_ENV.bold(),
    );
    eprintln!("  Check your plan with {}", "unitgate status".bold());

    Ok(())
}
