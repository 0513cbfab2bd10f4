//! Puzzle rules.
//!
//! Pure functions over [`Configuration`](crate::Configuration) values.
//! Rules are kept apart from the session so that the state graph and the
//! contracts can share them.

pub mod goal;
pub mod safety;

pub use goal::is_goal;
pub use safety::{bank_is_safe, is_safe, losing_bank, unsafe_banks};
