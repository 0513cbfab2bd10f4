//! History consistency invariant: replaying the history reproduces the
//! current configuration.

use super::super::{Configuration, Session};
use super::Invariant;

/// Invariant: history is a connected chain of graph transitions from the
/// start, ending at the current configuration, one entry per counted move.
pub struct HistoryConsistentInvariant;

impl Invariant<Session<'_>> for HistoryConsistentInvariant {
    fn holds(session: &Session<'_>) -> bool {
        let history = session.history();
        if history.len() != session.move_count() as usize {
            return false;
        }

        let mut config = Configuration::START;
        for crossing in history {
            if crossing.before != config {
                return false;
            }
            match session.graph.transition(&crossing.before, crossing.load) {
                Some(edge) if edge.to == crossing.after => config = edge.to,
                _ => return false,
            }
        }

        config == session.current_configuration()
    }

    fn description() -> &'static str {
        "History replays from the start to the current configuration"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bank, Load, StateGraph};

    #[test]
    fn test_empty_history_holds() {
        let session = Session::new(StateGraph::shared());
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_replayed_session_holds() {
        let loads = [Load::TwoCannibals, Load::OneCannibal, Load::TwoCannibals];
        let session = Session::replay(StateGraph::shared(), &loads).unwrap();
        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_skipped_count_violates() {
        let mut session = Session::replay(StateGraph::shared(), &[Load::OneOfEach]).unwrap();
        session.move_count = 0;
        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_teleported_configuration_violates() {
        let mut session = Session::new(StateGraph::shared());
        session.config = Configuration::new(3, 1, Bank::Right).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
