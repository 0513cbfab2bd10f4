//! Contract-based validation for crossings.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(session, passengers)} cross {Q(before, after)}`.

use super::action::{CrossingError, Load};
use super::entity::EntityId;
use super::graph::Edge;
use super::invariants::{InvariantSet, RiverInvariants};
use super::session::Session;
use super::types::{BOAT_CAPACITY, Role};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition resolves the action to.
    type Resolved;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Resolved, CrossingError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), CrossingError>;
}

// ─────────────────────────────────────────────────────────────
//  Crossing preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the passengers form one of the five legal loads.
pub struct PassengersFormLoad;

impl PassengersFormLoad {
    /// Tallies passengers by role and looks up the matching load.
    #[instrument(skip(session))]
    pub fn check(passengers: &[EntityId], session: &Session<'_>) -> Result<Load, CrossingError> {
        let missionaries = passengers
            .iter()
            .filter(|id| id.role() == Role::Missionary)
            .count();
        let cannibals = passengers.len() - missionaries;

        let load = (passengers.len() <= BOAT_CAPACITY)
            .then(|| Load::from_counts(missionaries, cannibals))
            .flatten();

        load.ok_or(CrossingError::IllegalMove {
            missionaries,
            cannibals,
            from: session.current_configuration(),
        })
    }
}

/// Precondition: the state graph has a transition for this load.
pub struct LoadIsFeasible;

impl LoadIsFeasible {
    /// Resolves the load against the graph.
    #[instrument(skip(session))]
    pub fn check(load: Load, session: &Session<'_>) -> Result<Edge, CrossingError> {
        let from = session.current_configuration();
        session
            .graph
            .transition(&from, load)
            .ok_or(CrossingError::IllegalMove {
                missionaries: load.missionaries() as usize,
                cannibals: load.cannibals() as usize,
                from,
            })
    }
}

/// Composite precondition: the boarded passengers can legally cross.
pub struct LegalCrossing;

impl LegalCrossing {
    /// Validates all preconditions for a crossing.
    #[instrument(skip(session))]
    pub fn check(passengers: &[EntityId], session: &Session<'_>) -> Result<Edge, CrossingError> {
        let load = PassengersFormLoad::check(passengers, session)?;
        LoadIsFeasible::check(load, session)
    }
}

// ─────────────────────────────────────────────────────────────
//  Crossing contract (pre + post)
// ─────────────────────────────────────────────────────────────

/// Contract for crossing actions.
///
/// Preconditions:
/// - Passengers form a legal load
/// - The departure bank can supply it
///
/// Postconditions:
/// - Exactly one more move is counted
/// - The boat is empty and has changed banks
/// - All session invariants hold
pub struct CrossingContract;

impl<'g> Contract<Session<'g>, Vec<EntityId>> for CrossingContract {
    type Resolved = Edge;

    fn pre(session: &Session<'g>, passengers: &Vec<EntityId>) -> Result<Edge, CrossingError> {
        LegalCrossing::check(passengers, session)
    }

    fn post(before: &Session<'g>, after: &Session<'g>) -> Result<(), CrossingError> {
        if after.move_count() != before.move_count() + 1 {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "Move count did not advance by one"
            );
            return Err(CrossingError::InvariantViolation(
                "Postcondition failed: move count did not advance by one".to_string(),
            ));
        }

        if !after.boarded_entities().is_empty()
            || after.current_configuration().boat() == before.current_configuration().boat()
        {
            return Err(CrossingError::InvariantViolation(
                "Postcondition failed: boat did not unload on the far bank".to_string(),
            ));
        }

        RiverInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Session invariants violated");
            CrossingError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Configuration, StateGraph};

    fn ids(names: &[&str]) -> Vec<EntityId> {
        names.iter().map(|n| EntityId::parse(n).unwrap()).collect()
    }

    #[test]
    fn test_precondition_two_cannibals() {
        let session = Session::new(StateGraph::shared());
        let edge = CrossingContract::pre(&session, &ids(&["c0", "c1"])).unwrap();
        assert_eq!(edge.load, Load::TwoCannibals);
        assert_eq!(edge.to, Configuration::new(3, 1, crate::Bank::Right).unwrap());
    }

    #[test]
    fn test_precondition_empty_boat_is_illegal() {
        let session = Session::new(StateGraph::shared());
        assert!(matches!(
            CrossingContract::pre(&session, &Vec::<EntityId>::new()),
            Err(CrossingError::IllegalMove { missionaries: 0, cannibals: 0, .. })
        ));
    }

    #[test]
    fn test_precondition_overfull_boat_is_illegal() {
        let session = Session::new(StateGraph::shared());
        assert!(matches!(
            CrossingContract::pre(&session, &ids(&["m0", "c0", "c1"])),
            Err(CrossingError::IllegalMove { missionaries: 1, cannibals: 2, .. })
        ));
    }

    #[test]
    fn test_precondition_allows_fatal_crossing() {
        let session = Session::new(StateGraph::shared());
        let edge = CrossingContract::pre(&session, &ids(&["m0", "m1"])).unwrap();
        assert!(!crate::rules::is_safe(&edge.to));
    }

    #[test]
    fn test_postcondition_holds_after_crossing() {
        let mut session = Session::new(StateGraph::shared());
        let before = session.clone();
        session.board_load(Load::OneOfEach).unwrap();
        session.attempt_crossing().unwrap();
        assert!(CrossingContract::post(&before, &session).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_count() {
        let mut session = Session::new(StateGraph::shared());
        let before = session.clone();
        session.board_load(Load::OneOfEach).unwrap();
        session.attempt_crossing().unwrap();
        session.move_count -= 1;
        assert!(CrossingContract::post(&before, &session).is_err());
    }
}
