//! Boarding invariant: the boat holds at most two travellers, all taken
//! from the bank it is moored at.

use super::super::{BOAT_CAPACITY, Session, SessionState};
use super::Invariant;

/// Invariant: the boarding set is small, duplicate-free and on the boat's bank.
///
/// Outside `Playing` the boat is always empty.
pub struct BoardingInvariant;

impl Invariant<Session<'_>> for BoardingInvariant {
    fn holds(session: &Session<'_>) -> bool {
        let boarded = session.boarded_entities();
        if boarded.len() > BOAT_CAPACITY {
            return false;
        }

        if session.session_state() != SessionState::Playing && !boarded.is_empty() {
            return false;
        }

        let boat = session.current_configuration().boat();
        let duplicate = boarded
            .iter()
            .enumerate()
            .any(|(i, id)| boarded[..i].contains(id));

        !duplicate && boarded.iter().all(|id| session.roster.bank(*id) == boat)
    }

    fn description() -> &'static str {
        "At most two distinct travellers are aboard, all from the boat's bank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bank, EntityId, StateGraph};

    #[test]
    fn test_empty_boat_holds() {
        let session = Session::new(StateGraph::shared());
        assert!(BoardingInvariant::holds(&session));
    }

    #[test]
    fn test_full_boat_holds() {
        let mut session = Session::new(StateGraph::shared());
        session.toggle_board(EntityId::missionary(0).unwrap());
        session.toggle_board(EntityId::cannibal(0).unwrap());
        assert!(BoardingInvariant::holds(&session));
    }

    #[test]
    fn test_overfull_boat_violates() {
        let mut session = Session::new(StateGraph::shared());
        session.boarded = EntityId::all().take(3).collect();
        assert!(!BoardingInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_bank_passenger_violates() {
        let mut session = Session::new(StateGraph::shared());
        let id = EntityId::cannibal(1).unwrap();
        session.roster.set_bank(id, Bank::Right);
        session.boarded.push(id);
        assert!(!BoardingInvariant::holds(&session));
    }
}
