mod app;
mod courts;
mod keymap;
mod paths;
mod terminal;

use std::fs::{self, File};
use std::io;
use std::time::Duration;

use combobox::{ComboboxConfig, ConfigError, Controller};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use tokio::sync::mpsc;

use app::App;
use courts::SlowSource;
use terminal::Terminal;

/// Simulated round trip of the court lookup.
const LOOKUP_LATENCY: Duration = Duration::from_millis(350);

#[derive(Debug, Error)]
enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn default_config() -> ComboboxConfig {
    ComboboxConfig::new("court")
        .aria_label("Gericht")
        .manual_entry(true)
        .debounce(Duration::from_millis(200))
}

/// Read `combobox.json` from the config directory, if there is one.
fn load_config() -> Result<ComboboxConfig, AppError> {
    let Some(path) = paths::config_file() else {
        return Ok(default_config());
    };
    match fs::read_to_string(&path) {
        Ok(json) => {
            info!("Loading config from {}", path.display());
            Ok(ComboboxConfig::from_json(&json)?)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(default_config()),
        Err(e) => Err(e.into()),
    }
}

fn init_logger() -> Result<(), AppError> {
    let path = paths::log_file();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    init_logger()?;
    let config = load_config()?;

    let (tx, rx) = mpsc::unbounded_channel();
    let combobox = Controller::new(config, SlowSource::courts(LOOKUP_LATENCY), move |value| {
        if tx.send(value).is_err() {
            warn!("Update dropped, host has shut down");
        }
    })?;

    let mut terminal = Terminal::new()?;
    App::new(combobox, rx).run(&mut terminal).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
