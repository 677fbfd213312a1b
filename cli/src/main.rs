use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use fourline::{
    best_move, find_four_in_a_row, parse_history, Board, MoveRequest, MoveResponse, SearchConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Ask the engine for its next column given a move history.
#[derive(Debug, Parser)]
#[command(name = "fourline", version, about)]
struct Cli {
    /// Move history such as `R3B3R2`; empty for a fresh board.
    #[arg(default_value = "")]
    position: String,

    /// Half-moves to look ahead; overrides the config file.
    #[arg(short, long)]
    depth: Option<usize>,

    /// JSON file with search settings and heuristic weights.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the board before the answer.
    #[arg(long)]
    show: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    if cli.show {
        print!("{}", replay(&cli.position)?);
    }
    let response = run(&cli)?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<MoveResponse> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(depth) = cli.depth {
        config.max_ply = depth;
    }

    let board = replay(&cli.position)?;
    if let Some((winner, line)) = find_four_in_a_row(&board) {
        bail!("game is over: {winner:?} already has four in a row at {line:?}");
    }

    let request = MoveRequest {
        position: cli.position.clone(),
    };
    let response = best_move(&request, &config)?;
    info!(
        position = %cli.position,
        side = ?board.turn(),
        depth = config.max_ply,
        column = response.column,
        score = response.score,
        "move chosen"
    );
    Ok(response)
}

fn replay(position: &str) -> anyhow::Result<Board> {
    let moves = parse_history(position)?;
    Ok(Board::from_history(&moves)?)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
