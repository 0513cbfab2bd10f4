//! Conservation invariant: travellers are neither created nor lost.

use super::super::{Bank, Role, Session};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: the roster agrees with the configuration's bank counts.
///
/// Boarded travellers count towards the bank the boat is moored at.
pub struct ConservationInvariant;

impl Invariant<Session<'_>> for ConservationInvariant {
    fn holds(session: &Session<'_>) -> bool {
        let config = session.current_configuration();
        Bank::iter().all(|bank| {
            Role::iter().all(|role| session.roster.count(bank, role) == config.count(bank, role))
        })
    }

    fn description() -> &'static str {
        "Every traveller is on exactly the bank the configuration counts them on"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityId, StateGraph};

    #[test]
    fn test_new_session_holds() {
        let session = Session::new(StateGraph::shared());
        assert!(ConservationInvariant::holds(&session));
    }

    #[test]
    fn test_boarded_travellers_still_count() {
        let mut session = Session::new(StateGraph::shared());
        session.toggle_board(EntityId::missionary(1).unwrap());
        assert!(ConservationInvariant::holds(&session));
    }

    #[test]
    fn test_misplaced_traveller_violates() {
        let mut session = Session::new(StateGraph::shared());
        session
            .roster
            .set_bank(EntityId::cannibal(2).unwrap(), Bank::Right);
        assert!(!ConservationInvariant::holds(&session));
    }
}
