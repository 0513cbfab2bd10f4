//! Goal detection.

use super::super::{Bank, Configuration};
use tracing::instrument;

/// Checks whether everyone and the boat have reached the right bank.
#[instrument]
pub fn is_goal(config: &Configuration) -> bool {
    config.missionaries_left() == 0 && config.cannibals_left() == 0 && config.boat() == Bank::Right
}
