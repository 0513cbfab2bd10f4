//! Line-based presentation layer.
//!
//! Reads intents from the terminal, forwards them to a [`Session`] and
//! redraws the scene after every change.

use crate::config::RiverConfig;
use crate::render::render_snapshot;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_river::{
    BoardOutcome, CrossingOutcome, EntityId, Load, Session, SessionSnapshot, SessionState,
};
use tracing::{debug, instrument, warn};

/// One player intent typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Board or unboard one traveller (`board m0`, or just `c1`).
    Board(EntityId),
    /// Board the lowest-indexed travellers making up a load (`load 1 1`).
    Load(Load),
    /// Send the boat across.
    Cross,
    /// Suggest the next load.
    Hint,
    /// Start over.
    Reset,
    /// Redraw the scene.
    Show,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// Error for input the prompt does not understand.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCommandError {
    /// Unknown verb.
    #[display("Unknown command '{}' (try 'help')", _0)]
    Unknown(String),
    /// Traveller id not of the form m0..m2 / c0..c2.
    #[display("No traveller '{}' (use m0-m2 or c0-c2)", _0)]
    BadEntity(String),
    /// Counts that are not one of the five boat loads.
    #[display("'{}' is not a boat load (1-2 passengers)", _0)]
    BadLoad(String),
}

impl std::error::Error for ParseCommandError {}

impl FromStr for ReplCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            ["cross" | "go" | "x"] => Ok(Self::Cross),
            ["hint"] => Ok(Self::Hint),
            ["reset" | "r"] => Ok(Self::Reset),
            ["show" | "s"] => Ok(Self::Show),
            ["help" | "?"] => Ok(Self::Help),
            ["quit" | "exit" | "q"] => Ok(Self::Quit),
            ["board" | "b", id] => EntityId::parse(id)
                .map(Self::Board)
                .ok_or_else(|| ParseCommandError::BadEntity(id.to_string())),
            ["load" | "l", m, c] => {
                let counts = (m.parse::<usize>(), c.parse::<usize>());
                match counts {
                    (Ok(m), Ok(c)) => Load::from_counts(m, c).map(Self::Load),
                    _ => None,
                }
                .ok_or_else(|| ParseCommandError::BadLoad(format!("{} {}", m, c)))
            }
            [single] => EntityId::parse(single)
                .map(Self::Board)
                .ok_or_else(|| ParseCommandError::Unknown(single.to_string())),
            _ => Err(ParseCommandError::Unknown(s.trim().to_string())),
        }
    }
}

const HELP: &str = "\
Commands:
  board <id> | <id>   board or unboard a traveller (m0-m2, c0-c2)
  load <m> <c>        board m missionaries and c cannibals
  cross               send the boat across
  hint                suggest the next load
  reset               start over
  show                redraw the scene
  quit                leave
";

/// Interactive loop over `input`, writing the scene to `output`.
///
/// Returns when the input ends or the player quits.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    config: &RiverConfig,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    write!(output, "{}", HELP)?;
    redraw(session, config, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => write!(output, "{}", HELP)?,
            ReplCommand::Show => redraw(session, config, &mut output)?,
            ReplCommand::Reset => {
                session.reset();
                redraw(session, config, &mut output)?;
            }
            ReplCommand::Hint => match session.hint() {
                Some(load) => writeln!(output, "Try sending {}.", load.label())?,
                None => writeln!(output, "No hint available.")?,
            },
            ReplCommand::Board(id) => match session.toggle_board(id) {
                BoardOutcome::Ignored(reason) => writeln!(output, "{} stays put: {}.", id, reason)?,
                BoardOutcome::Boarded | BoardOutcome::Unboarded => {
                    redraw(session, config, &mut output)?
                }
            },
            ReplCommand::Load(load) => match session.board_load(load) {
                Ok(()) => redraw(session, config, &mut output)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            ReplCommand::Cross => match session.attempt_crossing() {
                Ok(CrossingOutcome::Ignored(reason)) => {
                    writeln!(output, "The boat stays: {}.", reason)?
                }
                Ok(CrossingOutcome::Crossed { state, .. }) => {
                    redraw(session, config, &mut output)?;
                    if state == SessionState::Playing && *config.show_hints() {
                        hint_length(session, &mut output)?;
                    }
                    if state.is_over() {
                        writeln!(output, "Type 'reset' to play again or 'quit' to leave.")?;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Crossing rejected");
                    writeln!(output, "{}", e)?;
                }
            },
        }
    }

    Ok(())
}

fn redraw<W: Write>(session: &Session<'_>, config: &RiverConfig, output: &mut W) -> anyhow::Result<()> {
    let snapshot = SessionSnapshot::from(session);
    write!(output, "{}", render_snapshot(&snapshot, *config.json())?)?;
    Ok(())
}

fn hint_length<W: Write>(session: &Session<'_>, output: &mut W) -> anyhow::Result<()> {
    let graph = session.graph();
    match graph.shortest_solution(&session.current_configuration()) {
        Some(loads) => writeln!(output, "{} crossings left at best.", loads.len())?,
        None => writeln!(output, "The goal is out of reach.")?,
    }
    Ok(())
}
