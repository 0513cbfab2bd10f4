//! Core domain types for the river crossing.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of missionaries, and of cannibals, in the party.
pub const PARTY_SIZE: u8 = 3;

/// Maximum number of passengers the boat carries.
pub const BOAT_CAPACITY: usize = 2;

/// A bank of the river.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Bank {
    /// The starting bank.
    #[display("left")]
    Left,
    /// The goal bank.
    #[display("right")]
    Right,
}

impl Bank {
    /// Returns the bank across the river.
    pub fn opposite(self) -> Self {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }

    /// Both banks, left first.
    pub const ALL: [Bank; 2] = [Bank::Left, Bank::Right];

    pub(crate) fn to_index(self) -> usize {
        match self {
            Bank::Left => 0,
            Bank::Right => 1,
        }
    }
}

/// The two kinds of traveller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Role {
    /// A missionary.
    #[display("missionary")]
    Missionary,
    /// A cannibal.
    #[display("cannibal")]
    Cannibal,
}

impl Role {
    /// Single-letter tag used in compact ids (`m`, `c`).
    pub fn tag(self) -> char {
        match self {
            Role::Missionary => 'm',
            Role::Cannibal => 'c',
        }
    }
}

/// Error raised when a configuration is built from out-of-range counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigurationError {
    /// More missionaries on the left bank than exist.
    #[display("{} missionaries on the left bank exceeds party size {}", _0, PARTY_SIZE)]
    TooManyMissionaries(u8),

    /// More cannibals on the left bank than exist.
    #[display("{} cannibals on the left bank exceeds party size {}", _0, PARTY_SIZE)]
    TooManyCannibals(u8),
}

impl std::error::Error for ConfigurationError {}

/// One moment of the puzzle: left-bank counts and the boat's bank.
///
/// Right-bank counts are always the complement of the left-bank counts,
/// so conservation holds by construction. A configuration may be unsafe;
/// unsafe configurations are losing positions, not invalid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    missionaries_left: u8,
    cannibals_left: u8,
    boat: Bank,
}

/// Unchecked wire form of a [`Configuration`].
#[derive(Deserialize)]
struct RawConfiguration {
    missionaries_left: u8,
    cannibals_left: u8,
    boat: Bank,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = ConfigurationError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Self::new(raw.missionaries_left, raw.cannibals_left, raw.boat)
    }
}

impl Configuration {
    /// Everyone and the boat on the left bank.
    pub const START: Configuration = Configuration {
        missionaries_left: PARTY_SIZE,
        cannibals_left: PARTY_SIZE,
        boat: Bank::Left,
    };

    /// Everyone and the boat on the right bank.
    pub const GOAL: Configuration = Configuration {
        missionaries_left: 0,
        cannibals_left: 0,
        boat: Bank::Right,
    };

    /// Number of distinct configurations, safe or not.
    pub const COUNT: usize = (PARTY_SIZE as usize + 1) * (PARTY_SIZE as usize + 1) * 2;

    /// Creates a configuration from left-bank counts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if either count exceeds [`PARTY_SIZE`].
    #[instrument]
    pub fn new(missionaries_left: u8, cannibals_left: u8, boat: Bank) -> Result<Self, ConfigurationError> {
        if missionaries_left > PARTY_SIZE {
            return Err(ConfigurationError::TooManyMissionaries(missionaries_left));
        }
        if cannibals_left > PARTY_SIZE {
            return Err(ConfigurationError::TooManyCannibals(cannibals_left));
        }
        Ok(Self {
            missionaries_left,
            cannibals_left,
            boat,
        })
    }

    /// Missionaries on the left bank.
    pub fn missionaries_left(&self) -> u8 {
        self.missionaries_left
    }

    /// Cannibals on the left bank.
    pub fn cannibals_left(&self) -> u8 {
        self.cannibals_left
    }

    /// Missionaries on the right bank.
    pub fn missionaries_right(&self) -> u8 {
        PARTY_SIZE - self.missionaries_left
    }

    /// Cannibals on the right bank.
    pub fn cannibals_right(&self) -> u8 {
        PARTY_SIZE - self.cannibals_left
    }

    /// The bank holding the boat.
    pub fn boat(&self) -> Bank {
        self.boat
    }

    /// Count of `role` standing on `bank`.
    pub fn count(&self, bank: Bank, role: Role) -> u8 {
        match (bank, role) {
            (Bank::Left, Role::Missionary) => self.missionaries_left(),
            (Bank::Left, Role::Cannibal) => self.cannibals_left(),
            (Bank::Right, Role::Missionary) => self.missionaries_right(),
            (Bank::Right, Role::Cannibal) => self.cannibals_right(),
        }
    }

    /// Dense table index in `0..Configuration::COUNT`.
    pub(crate) fn to_index(self) -> usize {
        let side = PARTY_SIZE as usize + 1;
        (self.missionaries_left as usize * side + self.cannibals_left as usize) * 2
            + self.boat.to_index()
    }

    /// Every configuration, safe or not, in table order.
    pub fn all() -> impl Iterator<Item = Configuration> {
        (0..=PARTY_SIZE).flat_map(|missionaries_left| {
            (0..=PARTY_SIZE).flat_map(move |cannibals_left| {
                Bank::ALL.into_iter().map(move |boat| Configuration {
                    missionaries_left,
                    cannibals_left,
                    boat,
                })
            })
        })
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}M {}C | {}M {}C, boat {})",
            self.missionaries_left(),
            self.cannibals_left(),
            self.missionaries_right(),
            self.cannibals_right(),
            self.boat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_counts_rejected() {
        assert_eq!(
            Configuration::new(4, 0, Bank::Left),
            Err(ConfigurationError::TooManyMissionaries(4))
        );
        assert_eq!(
            Configuration::new(0, 7, Bank::Right),
            Err(ConfigurationError::TooManyCannibals(7))
        );
    }

    #[test]
    fn test_right_bank_is_complement() {
        let config = Configuration::new(1, 2, Bank::Right).unwrap();
        assert_eq!(config.missionaries_right(), 2);
        assert_eq!(config.cannibals_right(), 1);
        assert_eq!(config.count(Bank::Right, Role::Cannibal), 1);
    }

    #[test]
    fn test_table_indices_are_dense_and_unique() {
        let mut seen = vec![false; Configuration::COUNT];
        for config in Configuration::all() {
            let index = config.to_index();
            assert!(!seen[index], "duplicate index {index}");
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_counts() {
        let json = r#"{"missionaries_left":9,"cannibals_left":0,"boat":"Left"}"#;
        let err = serde_json::from_str::<Configuration>(json).unwrap_err();
        assert!(err.to_string().contains("9 missionaries"));

        let json = r#"{"missionaries_left":1,"cannibals_left":4,"boat":"Right"}"#;
        assert!(serde_json::from_str::<Configuration>(json).is_err());
    }

    #[test]
    fn test_deserialize_accepts_valid_counts() {
        let json = r#"{"missionaries_left":3,"cannibals_left":1,"boat":"Right"}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config, Configuration::new(3, 1, Bank::Right).unwrap());
    }

    #[test]
    fn test_start_and_goal() {
        assert_eq!(Configuration::new(3, 3, Bank::Left).unwrap(), Configuration::START);
        assert_eq!(Configuration::new(0, 0, Bank::Right).unwrap(), Configuration::GOAL);
    }
}
