//! Strictly River - terminal front end
//!
//! Plays, solves and inspects the missionaries and cannibals puzzle.

#![warn(missing_docs)]

mod cli;
mod config;
mod render;
mod repl;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::RiverConfig;
use strictly_river::{Configuration, Session, SessionSnapshot, StateGraph};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let hints = matches!(cli.command, Command::Play { hints: true });
    let config = RiverConfig::load_or_default(&cli.config)?.with_overrides(cli.json, hints, cli.verbose);

    initialize_tracing(&config);
    info!(config_path = %cli.config.display(), "Starting strictly_river");

    match cli.command {
        Command::Play { .. } => run_play(&config),
        Command::Solve { play } => run_solve(&config, play),
        Command::Graph => run_graph(&config),
    }
}

/// Logs go to stderr so the scene on stdout stays readable.
fn initialize_tracing(config: &RiverConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &RiverConfig) -> Result<()> {
    let mut session = Session::new(StateGraph::shared());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut session, config, stdin.lock(), stdout.lock())?;
    info!(
        moves = session.move_count(),
        state = %session.session_state(),
        "Player left"
    );
    Ok(())
}

/// Print the shortest solution, optionally stepping a session through it
#[instrument(skip(config))]
fn run_solve(config: &RiverConfig, play: bool) -> Result<()> {
    let graph = StateGraph::shared();
    let loads = graph
        .shortest_solution(&Configuration::START)
        .ok_or_else(|| anyhow::anyhow!("The puzzle has no solution from the start"))?;

    if !play {
        if *config.json() {
            println!("{}", serde_json::to_string_pretty(&loads)?);
        } else {
            for (step, load) in loads.iter().enumerate() {
                println!("{:>2}. {}", step + 1, load.label());
            }
        }
        return Ok(());
    }

    let mut session = Session::new(graph);
    print!("{}", render::render_snapshot(&SessionSnapshot::from(&session), *config.json())?);
    for load in &loads {
        session.board_load(*load)?;
        session.attempt_crossing()?;
        println!("-- {} --", load.label());
        print!("{}", render::render_snapshot(&SessionSnapshot::from(&session), *config.json())?);
    }
    Ok(())
}

/// Dump the state graph
#[instrument(skip(config))]
fn run_graph(config: &RiverConfig) -> Result<()> {
    let graph = StateGraph::shared();
    if *config.json() {
        let nodes: Vec<_> = graph
            .configurations()
            .map(|configuration| {
                serde_json::json!({
                    "configuration": configuration,
                    "edges": graph.edges_from(&configuration),
                    "fatal": graph.fatal_edges_from(&configuration),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    } else {
        print!("{}", render::render_graph(graph));
    }
    Ok(())
}
