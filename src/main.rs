//! One-shot decision tool: reads a position, asks the agent for a move once.

use anyhow::{bail, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_ai::core::{board_from_strings, Board, Color};
use reversi_ai::{AgentConfig, MinimaxAgent, Othello, PlayerController, RemainingTimes};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

const DEFAULT_REMAINING_MS: u64 = 10_000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: reversi-ai <board-file> <black|white> [config.json] [remaining-ms]");
        std::process::exit(1);
    }

    let board = load_board(Path::new(&args[1]))?;
    let color = parse_color(&args[2])?;
    let config = match args.get(3) {
        Some(path) => AgentConfig::load_from(path)?,
        None => AgentConfig::load_or_default(),
    };
    let remaining_ms = match args.get(4) {
        Some(ms) => ms
            .parse::<u64>()
            .with_context(|| format!("invalid remaining time {:?}", ms))?,
        None => DEFAULT_REMAINING_MS,
    };

    print!("{}", board);
    let mut agent = MinimaxAgent::new(color, board, StdRng::from_entropy(), Othello, config);
    let remaining = RemainingTimes::uniform(Duration::from_millis(remaining_ms));
    let action = agent.decide(None, &remaining)?;
    let stats = agent.last_stats();

    println!("{} ({}) plays {}", agent.name(), color, action);
    println!(
        "nodes: {}, leaves: {}, cutoffs: {}",
        stats.nodes, stats.leaves, stats.cutoffs
    );
    print!("{}", agent.board());
    Ok(())
}

fn load_board(path: &Path) -> anyhow::Result<Board> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        return serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()));
    }
    let lines: Vec<&str> = text.lines().collect();
    board_from_strings(&lines).with_context(|| format!("parsing {}", path.display()))
}

fn parse_color(s: &str) -> anyhow::Result<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Color::Black),
        "white" | "w" => Ok(Color::White),
        other => bail!("unknown color {:?}", other),
    }
}
