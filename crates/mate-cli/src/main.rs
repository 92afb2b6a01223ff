//! `mate` - looks for forced checkmates in positions stored as board text files.

mod config;
mod report;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use config::{MateConfig, OutputFormat};
use mate_core::{parse_board, Board, Side};
use mate_engine::{check_playable, generate_moves, status, Solver};
use report::{Attempt, SolveReport};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mate")]
#[command(about = "Forced checkmate finder")]
struct Cli {
    /// Path to the configuration file (defaults to mate.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a forced mate, trying 1, 2, ... moves
    Solve {
        /// Board text file
        file: PathBuf,
        /// Side to solve for (light/white or dark/black)
        #[arg(short, long)]
        side: Side,
        /// Largest mate to look for, in moves of the solving side
        #[arg(long)]
        max_moves: Option<u32>,
        /// Time allowed per budget, in seconds
        #[arg(long)]
        max_seconds: Option<u64>,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Show check, checkmate and stalemate for both sides
    Status {
        /// Board text file
        file: PathBuf,
    },
    /// List the legal moves of one side
    Moves {
        /// Board text file
        file: PathBuf,
        /// Side to list moves for
        #[arg(short, long)]
        side: Side,
    },
    /// Write the standard starting position to a new file
    New {
        /// Board text file to create
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MateConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Solve {
            file,
            side,
            max_moves,
            max_seconds,
            json,
        } => {
            let max_moves = max_moves.unwrap_or(config.max_moves);
            let max_time = max_seconds.map(Duration::from_secs).unwrap_or_else(|| config.max_time());
            let output = if json { OutputFormat::Json } else { config.output };
            run_solve(&file, side, max_moves, max_time, output)
        }
        Commands::Status { file } => run_status(&file, &mut std::io::stdout()),
        Commands::Moves { file, side } => run_moves(&file, side, &mut std::io::stdout()),
        Commands::New { file } => run_new(&file),
    }
}

fn load_board(path: &Path) -> anyhow::Result<Board> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;
    parse_board(&text).with_context(|| format!("Invalid board file {}", path.display()))
}

fn run_solve(
    path: &Path,
    side: Side,
    max_moves: u32,
    max_time: Duration,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let board = load_board(path)?;
    check_playable(&board).context("Position cannot be solved")?;

    let mut solver = Solver::new(board, side, None);
    let mut report = SolveReport::new(side);

    let solution = solver.solve_with(max_moves, max_time, |budget, found, counters| {
        tracing::info!(
            "max # moves: {}, elapsed seconds: {:.3}, recursion count: {}, moves count: {}",
            budget,
            counters.elapsed_seconds(),
            counters.recursion_count,
            counters.moves_evaluated
        );
        report.record(Attempt::new(budget, found, counters));
    })?;
    if let Some(solution) = solution {
        report.set_solution(solution.moves, &solution.best_move);
    }

    match output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", report),
    }
    Ok(())
}

fn run_status(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let board = load_board(path)?;
    for side in Side::BOTH {
        writeln!(out, "{}: {}", side, status(&board, side, None)?)?;
    }
    Ok(())
}

fn run_moves(path: &Path, side: Side, out: &mut impl Write) -> anyhow::Result<()> {
    let board = load_board(path)?;
    let summary = generate_moves(&board, side, None, true)?;
    for mv in &summary {
        writeln!(out, "{}", mv)?;
    }
    tracing::info!("{} legal moves for {}", summary.len(), side);
    Ok(())
}

fn run_new(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    std::fs::write(path, Board::standard().to_string())
        .with_context(|| format!("Failed to write board file {}", path.display()))?;
    tracing::info!("Wrote starting position to {}", path.display());
    Ok(())
}
