//! Session invariants.
//!
//! Each invariant is a zero-sized marker naming one property of a
//! [`Session`](crate::Session), such as the roster agreeing with the bank
//! counts. The crossing contract checks them all after every committed trip.

/// A property of a river-crossing state, checked by inspection.
pub trait Invariant<S> {
    /// Returns false when `state` breaks the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// An invariant that failed, carried in crossing postcondition errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the broken property.
    pub description: String,
}

impl InvariantViolation {
    /// Records a broken property.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked in one pass, reporting every failure rather
/// than stopping at the first.
///
/// Tuples of two or three invariants implement this; [`RiverInvariants`]
/// is the set the crossing contract uses.
pub trait InvariantSet<S> {
    /// `Err` lists each invariant `state` breaks, in tuple order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod boarding;
pub mod conservation;
pub mod history_consistent;

pub use boarding::BoardingInvariant;
pub use conservation::ConservationInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All session invariants as a composable set.
pub type RiverInvariants = (
    ConservationInvariant,
    BoardingInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityId, Session, StateGraph};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = Session::new(StateGraph::shared());
        assert!(RiverInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_crossing() {
        let mut session = Session::new(StateGraph::shared());
        session.toggle_board(EntityId::cannibal(0).unwrap());
        session.toggle_board(EntityId::cannibal(1).unwrap());
        session.attempt_crossing().unwrap();
        assert!(RiverInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = Session::new(StateGraph::shared());
        let id = EntityId::missionary(0).unwrap();
        session.roster.set_bank(id, crate::Bank::Right);
        session.move_count = 4;

        let violations = RiverInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_violations_name_the_broken_property() {
        let mut session = Session::new(StateGraph::shared());
        session.move_count = 1;

        let violations = RiverInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            HistoryConsistentInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = Session::new(StateGraph::shared());
        type TwoInvariants = (ConservationInvariant, BoardingInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
