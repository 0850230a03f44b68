use clap::Parser;
use prepdeck::LogLevel;
use prepdeck::core::catalog::{self, Catalog, StaticCatalog};
use prepdeck::core::config::{self, PrepConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "prepdeck", about = "Terminal dashboard for interview preparation")]
struct Args {
    /// JSON deck to load instead of the built-in sample deck
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Log verbosity (overrides PREPDECK_LOG_LEVEL)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Where to write the log
    #[arg(long, default_value = "prepdeck.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let level = args
        .log_level
        .or_else(|| {
            std::env::var("PREPDECK_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevel::from_env_value(&v))
        })
        .unwrap_or_default();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level.filter(), log_config, log_file);
    }

    log::info!("Prepdeck starting up (log level {:?})", level);

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}; using default settings");
        log::warn!("Config error: {e}");
        PrepConfig::default()
    });
    let resolved = config::resolve(&file_config, args.deck.as_deref());

    let catalog: Arc<dyn Catalog> = match &resolved.deck_file {
        Some(path) => {
            let deck = catalog::load_deck(path).map_err(|e| {
                log::error!("Failed to load deck {}: {e}", path.display());
                std::io::Error::other(format!("{}: {e}", path.display()))
            })?;
            Arc::new(deck)
        }
        None => {
            log::info!("No deck file configured, using built-in deck");
            Arc::new(StaticCatalog::builtin())
        }
    };

    prepdeck::tui::run(catalog, &resolved)
}
