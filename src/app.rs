//! Command handlers behind the `releve` binary.
//!
//! Each `run_*` function prints its result; the functions they build on
//! return values so they can be tested without capturing stdout.

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::error::{ReleveError, Result};
use crate::export::{self, ExportFormat};
use crate::interpret::{Interpretation, Interpreter};
use crate::inventory::Inventory;
use crate::lexicon::Lexicon;
use crate::session::{DictationSession, FeedEvent, SessionAction, SessionUpdate, read_feed_log};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Interpreter for the configured language and numbering options.
pub fn build_interpreter(config: &Config) -> Result<Interpreter> {
    let lexicon = Lexicon::new(config.interpretation.language)?;
    Ok(Interpreter::new(lexicon, config.interpret_options()))
}

/// `--store` if given, else the configured or default store.
pub fn resolve_store(config: &Config, store: Option<PathBuf>) -> Result<PathBuf> {
    store.or_else(|| config.store_path()).ok_or_else(|| {
        ReleveError::Other("Could not determine data directory; pass --store".to_string())
    })
}

/// Transcript from the argument, a file, or stdin.
pub fn read_transcript(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    Ok(std::io::read_to_string(std::io::stdin())?)
}

pub fn run_parse(
    config: &Config,
    text: Option<String>,
    file: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let transcript = read_transcript(text, file)?;
    let interpretation = build_interpreter(config)?.parse(&transcript);

    if json {
        println!("{}", serde_json::to_string_pretty(&interpretation)?);
    } else {
        print_interpretation(&interpretation, quiet);
    }
    Ok(())
}

/// Parse `transcript` and append its rows to the store. Returns rows added.
pub fn add_transcript(config: &Config, transcript: &str, store: &Path) -> Result<usize> {
    let interpretation = build_interpreter(config)?.parse(transcript);
    if interpretation.rooms.is_empty() {
        tracing::warn!("No rooms recognized, inventory unchanged");
        return Ok(0);
    }

    let mut inventory = Inventory::load(store)?;
    let added = inventory.append(&interpretation);
    inventory.save(store)?;
    Ok(added)
}

pub fn run_add(config: &Config, text: Option<String>, store: Option<PathBuf>, quiet: bool) -> Result<()> {
    let store = resolve_store(config, store)?;
    let transcript = read_transcript(text, None)?;
    let added = add_transcript(config, &transcript, &store)?;
    if !quiet {
        println!("Added {} row(s) to {}", added, store.display());
    }
    Ok(())
}

/// Outcome of replaying a feed log.
pub struct ReplayReport {
    pub session: DictationSession,
    /// Engine actions requested along the way, in order.
    pub actions: Vec<SessionAction>,
}

/// Drive a listening session with `events` and wait for the feed to drain.
pub async fn replay(config: &Config, events: Vec<FeedEvent>) -> Result<ReplayReport> {
    let mut session = DictationSession::new(build_interpreter(config)?, config.session.echo_window_ms);
    session.start()?;

    let (feed_tx, feed_rx) = mpsc::channel(64);
    let (update_tx, mut update_rx) = mpsc::channel(64);
    let runner = tokio::spawn(session.run(feed_rx, update_tx));

    let producer = tokio::spawn(async move {
        for event in events {
            if feed_tx.send(event).await.is_err() {
                break;
            }
        }
    });

    let mut actions = Vec::new();
    while let Some(update) = update_rx.recv().await {
        match update {
            SessionUpdate::Action(action) => {
                tracing::info!(?action, "engine action");
                actions.push(action);
            }
            SessionUpdate::Parsed(parsed) => {
                tracing::debug!(summary = %parsed.summary(), "transcript re-parsed");
            }
        }
    }

    producer
        .await
        .map_err(|e| ReleveError::Other(format!("Feed task failed: {}", e)))?;
    let session = runner
        .await
        .map_err(|e| ReleveError::Other(format!("Session task failed: {}", e)))?;

    Ok(ReplayReport { session, actions })
}

pub async fn run_replay(
    config: &Config,
    log: &Path,
    store: Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let events = read_feed_log(log)?;
    tracing::info!(events = events.len(), log = %log.display(), "replaying feed log");

    let report = replay(config, events).await?;
    let session = &report.session;
    if let Some(error) = session.failure() {
        eprintln!("Recognition stopped: {}", error);
    }

    if json {
        let value = serde_json::json!({
            "buffer": session.buffer().as_str(),
            "location": session.interpretation().location,
            "rooms": session.interpretation().rooms,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        if !quiet {
            println!("{}", session.buffer());
            println!();
        }
        print_interpretation(session.interpretation(), quiet);
    }

    if store.is_some() {
        let store = resolve_store(config, store)?;
        let mut inventory = Inventory::load(&store)?;
        let added = inventory.append(session.interpretation());
        inventory.save(&store)?;
        if !quiet {
            println!("Added {} row(s) to {}", added, store.display());
        }
    }
    Ok(())
}

/// Render the store in `format` (or the configured one).
pub fn export_inventory(config: &Config, store: &Path, format: Option<ExportFormat>) -> Result<String> {
    let inventory = Inventory::load(store)?;
    let lexicon = Lexicon::new(config.interpretation.language)?;
    export::render(
        inventory.rows(),
        format.unwrap_or(config.export.format),
        lexicon.export_header(),
        config.export.delimiter,
    )
}

pub fn run_export(
    config: &Config,
    store: Option<PathBuf>,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let store = resolve_store(config, store)?;
    let rendered = export_inventory(config, &store, format)?;
    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            if !quiet {
                eprintln!("Exported to {}", path.display());
            }
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

pub fn run_rows(config: &Config, store: Option<PathBuf>) -> Result<()> {
    let store = resolve_store(config, store)?;
    let inventory = Inventory::load(&store)?;
    if inventory.is_empty() {
        eprintln!("Inventory is empty");
        return Ok(());
    }
    let color = std::io::stdout().is_terminal();
    for (idx, row) in inventory.rows().iter().enumerate() {
        let location = if row.location.is_empty() { "—" } else { row.location.as_str() };
        if color {
            println!("  [{}] {} ; {}", idx, location.dimmed(), row.room.bold());
        } else {
            println!("  [{}] {} ; {}", idx, location, row.room);
        }
    }
    Ok(())
}

pub fn run_remove(config: &Config, index: usize, store: Option<PathBuf>, quiet: bool) -> Result<()> {
    let store = resolve_store(config, store)?;
    let mut inventory = Inventory::load(&store)?;
    let removed = inventory.remove(index)?;
    inventory.save(&store)?;
    if !quiet {
        println!("Removed [{}] {} ; {}", index, removed.location, removed.room);
    }
    Ok(())
}

pub fn run_reset(config: &Config, store: Option<PathBuf>, quiet: bool) -> Result<()> {
    let store = resolve_store(config, store)?;
    let mut inventory = Inventory::load(&store)?;
    let count = inventory.len();
    inventory.clear();
    inventory.save(&store)?;
    if !quiet {
        println!("Removed {} row(s)", count);
    }
    Ok(())
}

pub fn run_config(config: &Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Get { key } => println!("{}", config.get_value_by_path(&key)?),
        ConfigAction::List => {
            for (key, value) in config.entries()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Dump => print!("{}", config.dump()?),
    }
    Ok(())
}

fn print_interpretation(interpretation: &Interpretation, quiet: bool) {
    let color = std::io::stdout().is_terminal();
    let location = if interpretation.location.is_empty() {
        "(unspecified)"
    } else {
        interpretation.location.as_str()
    };

    if color {
        println!("{} {}", "Location:".bold(), location);
    } else {
        println!("Location: {}", location);
    }
    for room in &interpretation.rooms {
        println!("  - {}", room);
    }
    if !quiet {
        let summary = interpretation.summary();
        if color {
            eprintln!("{}", summary.dimmed());
        } else {
            eprintln!("{}", summary);
        }
    }
}
