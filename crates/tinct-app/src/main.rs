mod cli;
mod commands;

use std::process::ExitCode;

use tinct_common::{ConfigError, TinctError};
use tinct_config::TinctConfig;
use tinct_palette::{FileStore, PaletteStore};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn init_logging(directive: &str) {
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("tinct: ignoring invalid log directive '{directive}': {e}");
            EnvFilter::new("tinct=warn")
        }
    };

    // Logs go to stderr so command output on stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_palette(args: &Args, config: &TinctConfig) -> Result<PaletteStore<FileStore>, TinctError> {
    let storage = match args.store_dir.as_ref().or(config.palette.store_dir.as_ref()) {
        Some(dir) => FileStore::new(dir),
        None => FileStore::open_default()?,
    };
    tracing::debug!(?storage, "opening palette store");

    Ok(PaletteStore::with_options(
        storage,
        config.palette.storage_key.clone(),
        config.palette.capacity,
    ))
}

fn run(args: &Args, config: &TinctConfig) -> Result<(), TinctError> {
    let mut stdout = std::io::stdout().lock();

    match &args.command {
        Command::Convert { color, json } => commands::convert(color, *json, &mut stdout),
        Command::Palette(command) => {
            let mut store = open_palette(args, config)?;
            commands::palette(&mut store, command, &mut stdout)
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config decides the default log level, so load it before logging is up
    // and report any failure once it is.
    let loaded = tinct_config::load_config(args.config.as_deref());
    let directive = match &args.log_level {
        Some(directive) => directive.clone(),
        None => loaded
            .as_ref()
            .map(|config| config.logging.level)
            .unwrap_or_default()
            .directive()
            .to_string(),
    };
    init_logging(&directive);

    let config = match resolve_config(args.config.is_some(), loaded) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

/// A config named on the command line must load; the implicit default may
/// fall back to built-in settings.
fn resolve_config(
    explicit: bool,
    loaded: Result<TinctConfig, ConfigError>,
) -> Result<TinctConfig, TinctError> {
    match loaded {
        Ok(config) => Ok(config),
        Err(e) if explicit => Err(e.into()),
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            Ok(TinctConfig::default())
        }
    }
}

fn fail(e: &TinctError) -> ExitCode {
    tracing::error!("{e}");
    ExitCode::FAILURE
}
