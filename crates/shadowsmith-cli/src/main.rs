//! Command line entry point: build shadow layers and print the CSS.

mod args;

use anyhow::{Context, Result};
use args::{LayerSpec, MoveSpec, parse_layer, parse_move};
use clap::Parser;
use shadowsmith_core::{EditorAction, EditorConfig, EditorState};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shadowsmith")]
#[command(about = "Compose CSS box-shadow layers and print the declaration")]
struct Cli {
    /// Layer description, e.g. "x=2,y=4,blur=10,spread=0,color=#000000,opacity=0.3,inset".
    /// Repeat for more layers; the first one is painted on top.
    #[arg(long = "layer", short, value_parser = parse_layer)]
    layers: Vec<LayerSpec>,

    /// Move a layer, as FROM:TO (zero-based). Applied after all layers are added.
    #[arg(long = "move", short, value_parser = parse_move)]
    moves: Vec<MoveSpec>,

    /// JSON file with the editor configuration (default layer values).
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print only the property value, without `box-shadow:`.
    #[arg(long, conflicts_with = "json")]
    value: bool,

    /// Print the layers as JSON instead of CSS.
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<EditorConfig> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = EditorConfig::from_json(&json)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Build the editor state described by the command line.
fn build_state(cli: &Cli, config: &EditorConfig) -> Result<EditorState> {
    let mut state = EditorState::new(config);

    for (index, spec) in cli.layers.iter().enumerate() {
        if index > 0 {
            state = state.apply_all([
                EditorAction::AddLayer,
                EditorAction::LoadParams(config.initial),
            ])?;
        }
        state = state
            .apply_all(spec.edits.iter().copied().map(EditorAction::Edit))
            .with_context(|| format!("Invalid layer #{}", index + 1))?;
    }

    for mv in &cli.moves {
        state = state
            .apply(EditorAction::MoveLayer {
                from: mv.from,
                to: mv.to,
            })
            .with_context(|| format!("Cannot move layer {}:{}", mv.from, mv.to))?;
    }

    log::debug!("Built {} layer(s)", state.layers().len());
    Ok(state)
}

fn render(cli: &Cli, state: &EditorState) -> Result<String> {
    if cli.json {
        return state
            .layers()
            .to_json()
            .context("Failed to serialize layers");
    }
    Ok(if cli.value {
        state.css_value()
    } else {
        state.css_declaration()
    })
}

fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli.config.as_ref())?;
    let state = build_state(cli, &config)?;
    render(cli, &state)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
