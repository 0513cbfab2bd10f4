//! First-class action types for the crossing.
//!
//! A [`Load`] is what the boat carries; a [`Crossing`] is the record of a
//! committed trip. Both are plain values that can be validated, logged and
//! replayed independently of a session.

use super::entity::EntityId;
use super::session::SessionState;
use super::types::{Bank, Configuration, Role};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the five legal boat loads.
///
/// Every load carries one or two passengers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Load {
    /// One missionary.
    OneMissionary,
    /// Two missionaries.
    TwoMissionaries,
    /// One cannibal.
    OneCannibal,
    /// Two cannibals.
    TwoCannibals,
    /// One missionary and one cannibal.
    OneOfEach,
}

impl Load {
    /// All loads in enumeration order: (1,0), (2,0), (0,1), (0,2), (1,1).
    pub const ALL: [Load; 5] = [
        Load::OneMissionary,
        Load::TwoMissionaries,
        Load::OneCannibal,
        Load::TwoCannibals,
        Load::OneOfEach,
    ];

    /// Missionaries carried.
    pub fn missionaries(self) -> u8 {
        match self {
            Load::OneMissionary | Load::OneOfEach => 1,
            Load::TwoMissionaries => 2,
            Load::OneCannibal | Load::TwoCannibals => 0,
        }
    }

    /// Cannibals carried.
    pub fn cannibals(self) -> u8 {
        match self {
            Load::OneCannibal | Load::OneOfEach => 1,
            Load::TwoCannibals => 2,
            Load::OneMissionary | Load::TwoMissionaries => 0,
        }
    }

    /// Passengers carried of the given role.
    pub fn count(self, role: Role) -> u8 {
        match role {
            Role::Missionary => self.missionaries(),
            Role::Cannibal => self.cannibals(),
        }
    }

    /// Looks up the load carrying exactly these counts.
    ///
    /// Returns `None` for an empty boat or an overfull one.
    #[instrument]
    pub fn from_counts(missionaries: usize, cannibals: usize) -> Option<Load> {
        Self::ALL
            .into_iter()
            .find(|load| load.missionaries() as usize == missionaries && load.cannibals() as usize == cannibals)
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Load::OneMissionary => "1 missionary",
            Load::TwoMissionaries => "2 missionaries",
            Load::OneCannibal => "1 cannibal",
            Load::TwoCannibals => "2 cannibals",
            Load::OneOfEach => "1 missionary + 1 cannibal",
        }
    }

    /// Applies the load to `from`, departing from the boat's bank.
    ///
    /// Returns `None` when the departure bank lacks enough travellers of
    /// either role. The result may be unsafe.
    #[instrument]
    pub fn apply(self, from: Configuration) -> Option<Configuration> {
        let origin = from.boat();
        if self.missionaries() > from.count(origin, Role::Missionary)
            || self.cannibals() > from.count(origin, Role::Cannibal)
        {
            return None;
        }

        let (missionaries_left, cannibals_left) = match origin {
            Bank::Left => (
                from.missionaries_left() - self.missionaries(),
                from.cannibals_left() - self.cannibals(),
            ),
            Bank::Right => (
                from.missionaries_left() + self.missionaries(),
                from.cannibals_left() + self.cannibals(),
            ),
        };

        Configuration::new(missionaries_left, cannibals_left, origin.opposite()).ok()
    }
}

impl std::fmt::Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.missionaries(), self.cannibals())
    }
}

/// A committed crossing, as recorded in session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossing {
    /// What the boat carried.
    pub load: Load,
    /// Who was aboard, in boarding order.
    pub passengers: Vec<EntityId>,
    /// Configuration before departure.
    pub before: Configuration,
    /// Configuration after arrival.
    pub after: Configuration,
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.load.label(),
            self.before.boat(),
            self.after.boat()
        )
    }
}

/// Error that can occur when committing a crossing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CrossingError {
    /// The passengers do not form a load that can leave this configuration.
    #[display("Illegal move: {} missionaries / {} cannibals from {}", missionaries, cannibals, from)]
    IllegalMove {
        /// Missionaries aboard.
        missionaries: usize,
        /// Cannibals aboard.
        cannibals: usize,
        /// Configuration the boat tried to leave.
        from: Configuration,
    },

    /// The session is won or lost and accepts no more crossings.
    #[display("Session is over ({})", _0)]
    SessionOver(SessionState),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for CrossingError {}
