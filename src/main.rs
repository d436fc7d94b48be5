use anyhow::Result;
use clap::{CommandFactory, Parser};
use releve::app;
use releve::cli::{Cli, Commands};
use releve::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "releve", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(language) = cli.language {
        config.interpretation.language = language;
    }
    if let Some(window) = cli.echo_window {
        config.session.echo_window_ms = window;
    }
    tracing::debug!(
        language = %config.interpretation.language,
        echo_window_ms = config.session.echo_window_ms,
        "configuration loaded"
    );

    match cli.command {
        Commands::Parse { text, file, json } => {
            app::run_parse(&config, text, file.as_deref(), json, cli.quiet)?;
        }
        Commands::Add { text, store } => {
            app::run_add(&config, text, store, cli.quiet)?;
        }
        Commands::Replay { log, store, json } => {
            app::run_replay(&config, &log, store, json, cli.quiet).await?;
        }
        Commands::Export {
            store,
            format,
            output,
        } => {
            app::run_export(&config, store, format, output, cli.quiet)?;
        }
        Commands::Rows { store } => {
            app::run_rows(&config, store)?;
        }
        Commands::Remove { index, store } => {
            app::run_remove(&config, index, store, cli.quiet)?;
        }
        Commands::Reset { store } => {
            app::run_reset(&config, store, cli.quiet)?;
        }
        Commands::Config { action } => {
            app::run_config(&config, action)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-q`/`-v`.
fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Load configuration from file, applying environment overrides.
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };

    Ok(config.with_env_overrides())
}
