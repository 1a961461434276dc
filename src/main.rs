//! scene-search - drive a scene heading search from the command line
//!
//! # Usage
//!
//! ```bash
//! # One-shot: print the scenes matching a query
//! scene-search --outline outline.json --query kitchen
//!
//! # Interactive: JSONL commands on stdin, one state line per command
//! echo '{"type": "setFilter", "text": "kitchen"}
//! {"type": "simulateKey", "key": "enter"}' | scene-search --outline outline.json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use scene_heading_search::config;
use scene_heading_search::logging;
use scene_heading_search::outline::{filter_outline, load_outline};
use scene_heading_search::session::SceneSearchSession;
use scene_heading_search::stdin_commands::run_commands;

#[derive(Parser, Debug)]
#[command(name = "scene-search", version, about = "Search a screenplay's scene outline")]
struct Cli {
    /// Outline snapshot (JSON array of scene records)
    #[arg(long)]
    outline: PathBuf,
    /// Config file to use instead of ~/.scene-search/config.json
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print matching scenes and exit
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    let scenes = load_outline(&cli.outline)
        .with_context(|| format!("loading outline {}", cli.outline.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(query) = &cli.query {
        for scene in filter_outline(&scenes, query) {
            writeln!(out, "{}", serde_json::to_string(scene)?)?;
        }
        return Ok(());
    }

    info!(
        backspace_on_empty = ?config.backspace_on_empty,
        "Reading search commands from stdin"
    );
    let session = SceneSearchSession::from_config(scenes, &config);
    let outcome = run_commands(session, io::stdin().lock(), &mut out)?;
    writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
    Ok(())
}
