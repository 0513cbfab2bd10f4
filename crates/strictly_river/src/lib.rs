//! Strictly River - type-safe missionaries-and-cannibals puzzle logic
//!
//! Three missionaries and three cannibals must cross a river in a boat
//! that holds at most two. Cannibals may never outnumber missionaries on a
//! bank where any missionary stands.
//!
//! # Architecture
//!
//! - **Configuration**: immutable value describing bank counts and the boat
//! - **StateGraph**: every safe configuration and the loads leaving it,
//!   built once and shared by reference
//! - **Session**: current configuration, boarding set and history; turns
//!   boarding and crossing intents into validated transitions
//! - **Invariants / Contracts**: properties checked after every crossing
//!
//! # Example
//!
//! ```
//! use strictly_river::{EntityId, Session, SessionState, StateGraph};
//!
//! let mut session = Session::new(StateGraph::shared());
//! session.toggle_board(EntityId::cannibal(0)?);
//! session.toggle_board(EntityId::cannibal(1)?);
//! session.attempt_crossing()?;
//!
//! assert_eq!(session.move_count(), 1);
//! assert_eq!(session.session_state(), SessionState::Playing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod entity;
mod graph;
pub mod invariants;
pub mod rules;
mod session;
mod snapshot;
mod solver;
mod types;

// Crate-level exports - Domain types
pub use types::{BOAT_CAPACITY, Bank, Configuration, ConfigurationError, PARTY_SIZE, Role};

// Crate-level exports - Actions
pub use action::{Crossing, CrossingError, Load};

// Crate-level exports - Entities
pub use entity::{EntityError, EntityId, EntityInfo, Location};

// Crate-level exports - State graph
pub use graph::{Edge, StateGraph};

// Crate-level exports - Session
pub use session::{BoardOutcome, CrossingOutcome, IgnoreReason, Session, SessionState};
pub use snapshot::SessionSnapshot;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, CrossingContract, LegalCrossing, LoadIsFeasible, PassengersFormLoad};
pub use invariants::{
    BoardingInvariant, ConservationInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, RiverInvariants,
};
