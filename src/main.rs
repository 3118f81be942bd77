use anyhow::Context;
use plotkit::settings::Config;
use plotkit::{init_logging, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::info;

/// Loads the config named on the command line, else the default config file
/// if it exists, else built-in defaults.
fn load_config() -> anyhow::Result<Config> {
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let path = match explicit {
        Some(path) => path,
        None => match Config::default_config_path() {
            Ok(path) if path.exists() => path,
            _ => {
                info!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let mut config = Config::load_from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    if let Some(dir) = path.parent() {
        config.resolve_relative_to(dir);
    }
    info!("Using config {}", path.display());
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!("PlotKit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config()?;
    for path in plotkit::run(&config)? {
        println!("{}", path.display());
    }

    Ok(())
}
