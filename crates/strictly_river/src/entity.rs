//! Individual travellers.
//!
//! The rules only care about counts, but the player picks individuals, so
//! the session tracks which token stands where and who is aboard.

use super::types::{Bank, PARTY_SIZE, Role};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Error raised when an entity id is built from an out-of-range index.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("No {} with index {} (party size is {})", role, index, PARTY_SIZE)]
pub struct EntityError {
    /// Requested role.
    pub role: Role,
    /// Requested index.
    pub index: u8,
}

impl std::error::Error for EntityError {}

/// Stable identity of one traveller: role plus index within that role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawEntityId")]
pub struct EntityId {
    role: Role,
    index: u8,
}

/// Unchecked wire form of an [`EntityId`].
#[derive(Deserialize)]
struct RawEntityId {
    role: Role,
    index: u8,
}

impl TryFrom<RawEntityId> for EntityId {
    type Error = EntityError;

    fn try_from(raw: RawEntityId) -> Result<Self, Self::Error> {
        Self::new(raw.role, raw.index)
    }
}

impl EntityId {
    /// Total number of travellers.
    pub const COUNT: usize = 2 * PARTY_SIZE as usize;

    /// Creates an id for the `index`-th traveller of `role`.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError`] if `index` is not below [`PARTY_SIZE`].
    #[instrument]
    pub fn new(role: Role, index: u8) -> Result<Self, EntityError> {
        if index >= PARTY_SIZE {
            return Err(EntityError { role, index });
        }
        Ok(Self { role, index })
    }

    /// Shorthand for a missionary id.
    pub fn missionary(index: u8) -> Result<Self, EntityError> {
        Self::new(Role::Missionary, index)
    }

    /// Shorthand for a cannibal id.
    pub fn cannibal(index: u8) -> Result<Self, EntityError> {
        Self::new(Role::Cannibal, index)
    }

    /// The traveller's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Index within the role.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Every traveller: missionaries first, then cannibals, by index.
    pub fn all() -> impl Iterator<Item = EntityId> {
        Role::iter().flat_map(|role| (0..PARTY_SIZE).map(move |index| EntityId { role, index }))
    }

    /// Parses a compact id such as `m0` or `c2`.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let mut chars = s.chars();
        let role = match chars.next()? {
            'm' => Role::Missionary,
            'c' => Role::Cannibal,
            _ => return None,
        };
        let index = chars.as_str().parse::<u8>().ok()?;
        Self::new(role, index).ok()
    }

    pub(crate) fn to_index(self) -> usize {
        let offset = match self.role {
            Role::Missionary => 0,
            Role::Cannibal => PARTY_SIZE as usize,
        };
        offset + self.index as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.role.tag(), self.index)
    }
}

/// Where a traveller currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Standing on a bank.
    Bank(Bank),
    /// Sitting in the boat.
    Boarded,
}

/// What the presentation layer needs to draw one traveller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInfo {
    /// The traveller.
    pub id: EntityId,
    /// Missionary or cannibal.
    pub role: Role,
    /// Bank or boat.
    pub location: Location,
}

/// Bank of origin for every traveller.
///
/// Boarded travellers keep the boat's bank here; the boarding set records
/// that they are aboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Roster {
    banks: [Bank; EntityId::COUNT],
}

impl Roster {
    pub(crate) fn new() -> Self {
        Self {
            banks: [Bank::Left; EntityId::COUNT],
        }
    }

    pub(crate) fn bank(&self, id: EntityId) -> Bank {
        self.banks[id.to_index()]
    }

    pub(crate) fn set_bank(&mut self, id: EntityId, bank: Bank) {
        self.banks[id.to_index()] = bank;
    }

    /// Number of `role` travellers whose bank is `bank`.
    pub(crate) fn count(&self, bank: Bank, role: Role) -> u8 {
        EntityId::all()
            .filter(|id| id.role() == role && self.bank(*id) == bank)
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        assert!(EntityId::missionary(2).is_ok());
        assert_eq!(
            EntityId::cannibal(3),
            Err(EntityError {
                role: Role::Cannibal,
                index: 3
            })
        );
    }

    #[test]
    fn test_all_yields_six_distinct_ids() {
        let ids: Vec<_> = EntityId::all().collect();
        assert_eq!(ids.len(), EntityId::COUNT);
        let mut indices: Vec<_> = ids.iter().map(|id| id.to_index()).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), EntityId::COUNT);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for id in EntityId::all() {
            assert_eq!(EntityId::parse(&id.to_string()), Some(id));
        }
        assert_eq!(EntityId::parse("C1"), EntityId::cannibal(1).ok());
        assert_eq!(EntityId::parse("m3"), None);
        assert_eq!(EntityId::parse("x0"), None);
        assert_eq!(EntityId::parse(""), None);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_index() {
        let json = r#"{"role":"Cannibal","index":200}"#;
        let err = serde_json::from_str::<EntityId>(json).unwrap_err();
        assert!(err.to_string().contains("No cannibal with index 200"));

        let json = r#"{"role":"Missionary","index":2}"#;
        assert_eq!(
            serde_json::from_str::<EntityId>(json).unwrap(),
            EntityId::missionary(2).unwrap()
        );
    }

    #[test]
    fn test_roster_counts() {
        let mut roster = Roster::new();
        assert_eq!(roster.count(Bank::Left, Role::Cannibal), 3);
        roster.set_bank(EntityId::cannibal(0).unwrap(), Bank::Right);
        assert_eq!(roster.count(Bank::Left, Role::Cannibal), 2);
        assert_eq!(roster.count(Bank::Right, Role::Cannibal), 1);
        assert_eq!(roster.count(Bank::Right, Role::Missionary), 0);
    }
}
