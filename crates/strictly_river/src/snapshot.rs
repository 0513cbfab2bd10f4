//! Serializable view of a session.
//!
//! A [`Session`] borrows its state graph, so it cannot be serialized
//! directly. The snapshot captures everything the presentation layer draws.

use super::action::{Crossing, Load};
use super::entity::{EntityId, EntityInfo};
use super::session::{Session, SessionState};
use super::types::{Bank, Configuration};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Point-in-time copy of a session's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Current configuration.
    pub configuration: Configuration,
    /// Lifecycle state.
    pub state: SessionState,
    /// Crossings committed since the last reset.
    pub move_count: u32,
    /// Bank where missionaries were outnumbered, when lost.
    pub losing_bank: Option<Bank>,
    /// Travellers in the boat, in boarding order.
    pub boarded: Vec<EntityId>,
    /// Every traveller's whereabouts.
    pub entities: Vec<EntityInfo>,
    /// Committed crossings, oldest first.
    pub history: Vec<Crossing>,
}

impl From<&Session<'_>> for SessionSnapshot {
    fn from(session: &Session<'_>) -> Self {
        Self {
            configuration: session.current_configuration(),
            state: session.session_state(),
            move_count: session.move_count(),
            losing_bank: session.losing_bank(),
            boarded: session.boarded_entities().to_vec(),
            entities: session.entities(),
            history: session.history().to_vec(),
        }
    }
}

impl SessionSnapshot {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Loads carried so far.
    pub fn loads(&self) -> Vec<Load> {
        self.history.iter().map(|c| c.load).collect()
    }

    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        match self.state {
            SessionState::Playing => format!(
                "Move {}. Boat on the {} bank with {} aboard.",
                self.move_count,
                self.configuration.boat(),
                self.boarded.len()
            ),
            SessionState::Won => format!(
                "Everyone crossed safely in {} moves!",
                self.move_count
            ),
            SessionState::Lost => match self.losing_bank {
                Some(bank) => format!(
                    "Missionaries outnumbered on the {} bank after {} moves.",
                    bank, self.move_count
                ),
                None => format!("Game lost after {} moves.", self.move_count),
            },
        }
    }

    /// Serializes to pretty-printed JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateGraph;

    #[test]
    fn test_snapshot_of_new_session() {
        let session = Session::new(StateGraph::shared());
        let snapshot = SessionSnapshot::from(&session);
        assert_eq!(snapshot.configuration, Configuration::START);
        assert_eq!(snapshot.entities.len(), EntityId::COUNT);
        assert!(!snapshot.is_over());
        assert_eq!(
            snapshot.status_string(),
            "Move 0. Boat on the left bank with 0 aboard."
        );
    }

    #[test]
    fn test_lost_status_names_bank() {
        let session = Session::replay(StateGraph::shared(), &[Load::TwoMissionaries]).unwrap();
        let snapshot = SessionSnapshot::from(&session);
        assert_eq!(snapshot.losing_bank, Some(Bank::Left));
        assert_eq!(
            snapshot.status_string(),
            "Missionaries outnumbered on the left bank after 1 moves."
        );
    }

    #[test]
    fn test_json_export_survives_parse() {
        let loads = [Load::OneOfEach, Load::OneMissionary];
        let session = Session::replay(StateGraph::shared(), &loads).unwrap();
        let snapshot = SessionSnapshot::from(&session);

        let json = snapshot.to_json().unwrap();
        let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.loads(), loads.to_vec());
        assert_eq!(parsed.configuration, session.current_configuration());
    }

    #[test]
    fn test_tampered_snapshot_is_rejected() {
        let session = Session::new(StateGraph::shared());
        let snapshot = SessionSnapshot::from(&session);

        let mut value = serde_json::to_value(&snapshot).unwrap();
        value["configuration"]["missionaries_left"] = 9.into();
        assert!(serde_json::from_value::<SessionSnapshot>(value).is_err());

        let mut value = serde_json::to_value(&snapshot).unwrap();
        value["entities"][0]["id"]["index"] = 200.into();
        assert!(serde_json::from_value::<SessionSnapshot>(value).is_err());
    }
}
