//! A single play-through of the puzzle.
//!
//! The session owns the current configuration, the boarding set, the move
//! history and the terminal status. It turns player intents into validated
//! transitions against a shared [`StateGraph`].

use super::action::{Crossing, CrossingError, Load};
use super::contracts::{Contract, CrossingContract};
use super::entity::{EntityId, EntityInfo, Location, Roster};
use super::graph::StateGraph;
use super::rules::{is_goal, is_safe, losing_bank};
use super::types::{BOAT_CAPACITY, Bank, Configuration, Role};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SessionState {
    /// Intents are accepted.
    Playing,
    /// Everyone reached the right bank.
    Won,
    /// Missionaries were outnumbered on some bank.
    Lost,
}

impl SessionState {
    /// Returns true for `Won` and `Lost`.
    pub fn is_over(self) -> bool {
        !matches!(self, SessionState::Playing)
    }
}

/// Why an intent was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The session is won or lost.
    #[display("the game is over")]
    NotPlaying,
    /// Two travellers are already aboard.
    #[display("the boat is full")]
    BoatFull,
    /// The traveller is on the other bank.
    #[display("the boat is on the other bank")]
    WrongBank,
    /// Nobody is aboard.
    #[display("the boat is empty")]
    EmptyBoat,
}

/// Result of a boarding intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardOutcome {
    /// The traveller stepped into the boat.
    Boarded,
    /// The traveller stepped back onto the bank.
    Unboarded,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Result of a crossing intent that did not violate a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossingOutcome {
    /// The boat crossed; `state` is the session state on arrival.
    Crossed {
        /// The committed crossing.
        crossing: Crossing,
        /// Session state after arrival.
        state: SessionState,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// One play-through against a shared state graph.
#[derive(Debug, Clone)]
pub struct Session<'g> {
    pub(crate) graph: &'g StateGraph,
    pub(crate) config: Configuration,
    pub(crate) roster: Roster,
    pub(crate) boarded: Vec<EntityId>,
    pub(crate) history: Vec<Crossing>,
    pub(crate) move_count: u32,
    pub(crate) state: SessionState,
}

impl<'g> Session<'g> {
    /// Creates a session at the start configuration.
    #[instrument(skip(graph))]
    pub fn new(graph: &'g StateGraph) -> Self {
        Self {
            graph,
            config: Configuration::START,
            roster: Roster::new(),
            boarded: Vec::with_capacity(BOAT_CAPACITY),
            history: Vec::new(),
            move_count: 0,
            state: SessionState::Playing,
        }
    }

    /// Replays a load sequence from the start, boarding the lowest-indexed
    /// eligible travellers for each load.
    ///
    /// # Errors
    ///
    /// Returns [`CrossingError::SessionOver`] if loads remain after the
    /// session ends, or [`CrossingError::IllegalMove`] if a load cannot
    /// leave the bank it is asked to leave.
    #[instrument(skip(graph))]
    pub fn replay(graph: &'g StateGraph, loads: &[Load]) -> Result<Self, CrossingError> {
        let mut session = Self::new(graph);
        for load in loads {
            session.board_load(*load)?;
            session.attempt_crossing()?;
        }
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// The current configuration.
    pub fn current_configuration(&self) -> Configuration {
        self.config
    }

    /// Travellers in the boat, in boarding order.
    pub fn boarded_entities(&self) -> &[EntityId] {
        &self.boarded
    }

    /// Lifecycle state.
    pub fn session_state(&self) -> SessionState {
        self.state
    }

    /// Crossings committed since the last reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Committed crossings, oldest first.
    pub fn history(&self) -> &[Crossing] {
        &self.history
    }

    /// The graph this session validates against.
    pub fn graph(&self) -> &'g StateGraph {
        self.graph
    }

    /// The bank where missionaries were outnumbered.
    ///
    /// `None` unless the session is `Lost`.
    pub fn losing_bank(&self) -> Option<Bank> {
        match self.state {
            SessionState::Lost => losing_bank(&self.config),
            SessionState::Playing | SessionState::Won => None,
        }
    }

    /// Role and whereabouts of one traveller.
    pub fn entity_info(&self, id: EntityId) -> EntityInfo {
        let location = if self.boarded.contains(&id) {
            Location::Boarded
        } else {
            Location::Bank(self.roster.bank(id))
        };
        EntityInfo {
            id,
            role: id.role(),
            location,
        }
    }

    /// Every traveller's info, missionaries first.
    pub fn entities(&self) -> Vec<EntityInfo> {
        EntityId::all().map(|id| self.entity_info(id)).collect()
    }

    /// First load of a shortest solution from here, while playing.
    #[instrument(skip(self), fields(config = %self.config))]
    pub fn hint(&self) -> Option<Load> {
        if self.state != SessionState::Playing {
            return None;
        }
        self.graph.shortest_solution(&self.config)?.first().copied()
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    /// Boards or unboards a traveller.
    ///
    /// Boarding requires the traveller to stand on the boat's bank and a
    /// free seat; otherwise the intent is ignored.
    #[instrument(skip(self), fields(config = %self.config, state = %self.state))]
    pub fn toggle_board(&mut self, id: EntityId) -> BoardOutcome {
        if self.state != SessionState::Playing {
            debug!(%id, "Ignoring boarding: game over");
            return BoardOutcome::Ignored(IgnoreReason::NotPlaying);
        }

        if let Some(seat) = self.boarded.iter().position(|b| *b == id) {
            self.boarded.remove(seat);
            debug!(%id, "Unboarded");
            return BoardOutcome::Unboarded;
        }

        if self.roster.bank(id) != self.config.boat() {
            debug!(%id, "Ignoring boarding: wrong bank");
            return BoardOutcome::Ignored(IgnoreReason::WrongBank);
        }

        if self.boarded.len() >= BOAT_CAPACITY {
            debug!(%id, "Ignoring boarding: boat full");
            return BoardOutcome::Ignored(IgnoreReason::BoatFull);
        }

        self.boarded.push(id);
        debug!(%id, aboard = self.boarded.len(), "Boarded");
        BoardOutcome::Boarded
    }

    /// Replaces the boarding set with the lowest-indexed travellers on the
    /// boat's bank that make up `load`.
    ///
    /// # Errors
    ///
    /// Returns [`CrossingError::SessionOver`] outside `Playing`, or
    /// [`CrossingError::IllegalMove`] if the bank cannot supply the load.
    /// On error the boarding set is unchanged.
    #[instrument(skip(self), fields(config = %self.config))]
    pub fn board_load(&mut self, load: Load) -> Result<(), CrossingError> {
        if self.state != SessionState::Playing {
            return Err(CrossingError::SessionOver(self.state));
        }

        let boat = self.config.boat();
        let mut passengers = Vec::with_capacity(BOAT_CAPACITY);
        for role in [Role::Missionary, Role::Cannibal] {
            let wanted = load.count(role) as usize;
            let available: Vec<_> = EntityId::all()
                .filter(|id| id.role() == role && self.roster.bank(*id) == boat)
                .take(wanted)
                .collect();
            if available.len() < wanted {
                return Err(CrossingError::IllegalMove {
                    missionaries: load.missionaries() as usize,
                    cannibals: load.cannibals() as usize,
                    from: self.config,
                });
            }
            passengers.extend(available);
        }

        self.boarded = passengers;
        debug!(passengers = ?self.boarded, "Boarded load");
        Ok(())
    }

    /// Sends the boat across with whoever is aboard.
    ///
    /// An empty boat or a finished session is ignored. On success the
    /// configuration is replaced, the move is counted, passengers disembark
    /// on the far bank and the outcome is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`CrossingError::IllegalMove`] if the passengers do not form
    /// a load the graph allows from here; the session is left unchanged.
    #[instrument(skip(self), fields(config = %self.config, state = %self.state))]
    pub fn attempt_crossing(&mut self) -> Result<CrossingOutcome, CrossingError> {
        if self.state != SessionState::Playing {
            debug!("Ignoring crossing: game over");
            return Ok(CrossingOutcome::Ignored(IgnoreReason::NotPlaying));
        }

        if self.boarded.is_empty() {
            debug!("Ignoring crossing: empty boat");
            return Ok(CrossingOutcome::Ignored(IgnoreReason::EmptyBoat));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let edge = CrossingContract::pre(&*self, &self.boarded).inspect_err(|e| {
            warn!(error = %e, passengers = ?self.boarded, "Rejected crossing");
        })?;

        let passengers = std::mem::take(&mut self.boarded);
        let arrival = edge.to.boat();
        for id in &passengers {
            self.roster.set_bank(*id, arrival);
        }

        let crossing = Crossing {
            load: edge.load,
            passengers,
            before: self.config,
            after: edge.to,
        };
        self.config = edge.to;
        self.move_count += 1;
        self.history.push(crossing.clone());

        self.state = if is_goal(&self.config) {
            SessionState::Won
        } else if !is_safe(&self.config) {
            SessionState::Lost
        } else {
            SessionState::Playing
        };

        #[cfg(debug_assertions)]
        if let Err(e) = CrossingContract::post(&before, &*self) {
            *self = before;
            return Err(e);
        }

        match self.state {
            SessionState::Won => info!(moves = self.move_count, "Everyone crossed safely"),
            SessionState::Lost => info!(
                moves = self.move_count,
                bank = ?self.losing_bank(),
                "Missionaries outnumbered"
            ),
            SessionState::Playing => info!(
                load = %crossing.load,
                to = %self.config,
                moves = self.move_count,
                "Crossed"
            ),
        }

        Ok(CrossingOutcome::Crossed {
            crossing,
            state: self.state,
        })
    }

    /// Returns to the start configuration with an empty boat and history.
    #[instrument(skip(self), fields(state = %self.state, moves = self.move_count))]
    pub fn reset(&mut self) {
        *self = Self::new(self.graph);
        info!("Session reset");
    }
}
