//! svgcfg — batch front end for the SVG-to-config pipeline.
//!
//! Ingests SVG files (one background, any number of interaction
//! regions), applies list edits, and writes the merged configuration to
//! `config.json`. Interaction files are read concurrently; entries land
//! in the store in read-completion order, which is the ordering contract
//! the configuration carries.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use svgcfg_core::{
    ConfigStore, DEFAULT_EXPORT_NAME, ExportError, IdPolicy, background_from_svg, export_config,
    interaction_from_svg,
};
use tokio::task::JoinSet;

#[derive(Debug, Parser)]
#[command(name = "svgcfg", about = "Convert SVG documents into a canvas configuration")]
struct Cli {
    /// Interaction-region SVG files, one group per file.
    files: Vec<PathBuf>,

    /// Background SVG. Given twice, the last one wins.
    #[arg(short, long)]
    background: Option<PathBuf>,

    /// Assign random collision-resistant identifiers instead of
    /// sequential positions.
    #[arg(long)]
    random_ids: bool,

    /// Rename a group's identifier, as FILE=ID. Applied after ingest,
    /// before removals. May be repeated.
    #[arg(long, value_name = "FILE=ID", value_parser = parse_rename)]
    rename: Vec<(String, String)>,

    /// Remove the group ingested from FILE. May be repeated.
    #[arg(long, value_name = "FILE")]
    remove: Vec<String>,

    /// Output path for the configuration.
    #[arg(short, long, default_value = DEFAULT_EXPORT_NAME)]
    output: PathBuf,
}

fn parse_rename(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(file, id)| (file.to_string(), id.to_string()))
        .ok_or_else(|| format!("expected FILE=ID, got {value:?}"))
}

/// The Upload UI's `image/svg+xml` gate, rendered as an extension check.
/// Files failing it never reach the pipeline.
fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let mut store = ConfigStore::new();

    if let Some(path) = &cli.background {
        ingest_background(&mut store, path).await;
    }

    // Read interaction files concurrently. Insertion order is completion
    // order, not argument order.
    let mut reads = JoinSet::new();
    for path in &cli.files {
        if !is_svg_path(path) {
            log::warn!("{} is not an svg file, skipping", path.display());
            continue;
        }
        let path = path.clone();
        reads.spawn(async move {
            let text = tokio::fs::read_to_string(&path).await;
            (base_name(&path), text)
        });
    }
    while let Some(joined) = reads.join_next().await {
        let Ok((name, text)) = joined else {
            continue;
        };
        match text {
            Ok(text) => match interaction_from_svg(&text, &name) {
                Ok(group) => store.add_interaction(group),
                Err(err) => log::warn!("{name}: {err}, skipping"),
            },
            Err(err) => log::warn!("{name}: {err}, skipping"),
        }
    }

    for (file, id) in &cli.rename {
        if !store.rename_interaction(file, id) {
            log::warn!("rename target {file:?} not found");
        }
    }
    for file in &cli.remove {
        if !store.remove_interaction(file) {
            log::warn!("remove target {file:?} not found");
        }
    }

    let policy = if cli.random_ids {
        IdPolicy::Random
    } else {
        IdPolicy::Sequential
    };
    let config = store.merged_config(policy);

    match export_config(&config) {
        Ok(blob) => {
            if let Err(err) = std::fs::write(&cli.output, blob) {
                log::error!("failed to write {}: {err}", cli.output.display());
                return ExitCode::FAILURE;
            }
            log::info!("wrote {} ({} groups)", cli.output.display(), config.len());
            ExitCode::SUCCESS
        }
        Err(ExportError::EmptyConfig) => {
            log::warn!("nothing to export — upload at least one svg first");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn ingest_background(store: &mut ConfigStore, path: &Path) {
    if !is_svg_path(path) {
        log::warn!("{} is not an svg file, skipping", path.display());
        return;
    }
    match tokio::fs::read_to_string(path).await {
        Ok(text) => match background_from_svg(&text) {
            Ok(group) => store.set_background(group),
            Err(err) => log::warn!("{}: {err}, skipping", path.display()),
        },
        Err(err) => log::warn!("{}: {err}, skipping", path.display()),
    }
}
