//! Safety rule: cannibals may not outnumber missionaries on a bank where
//! at least one missionary stands.

use super::super::{Bank, Configuration, Role};
use tracing::instrument;

/// Checks one bank of a configuration.
#[instrument]
pub fn bank_is_safe(config: &Configuration, bank: Bank) -> bool {
    let missionaries = config.count(bank, Role::Missionary);
    let cannibals = config.count(bank, Role::Cannibal);
    missionaries == 0 || cannibals <= missionaries
}

/// Checks both banks.
#[instrument]
pub fn is_safe(config: &Configuration) -> bool {
    Bank::ALL.iter().all(|bank| bank_is_safe(config, *bank))
}

/// Returns every bank where missionaries are outnumbered.
#[instrument]
pub fn unsafe_banks(config: &Configuration) -> Vec<Bank> {
    Bank::ALL
        .into_iter()
        .filter(|bank| !bank_is_safe(config, *bank))
        .collect()
}

/// Returns the bank where missionaries are outnumbered, if any.
///
/// Conservation means at most one bank can be unsafe at a time: a left
/// bank with `c > m > 0` leaves the right bank with fewer cannibals than
/// missionaries.
#[instrument]
pub fn losing_bank(config: &Configuration) -> Option<Bank> {
    Bank::ALL.into_iter().find(|bank| !bank_is_safe(config, *bank))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(m: u8, c: u8, boat: Bank) -> Configuration {
        Configuration::new(m, c, boat).unwrap()
    }

    #[test]
    fn test_start_is_safe() {
        assert!(is_safe(&Configuration::START));
    }

    #[test]
    fn test_no_missionaries_is_safe() {
        assert!(is_safe(&config(0, 3, Bank::Left)));
        assert!(is_safe(&config(3, 0, Bank::Left)));
    }

    #[test]
    fn test_left_bank_outnumbered() {
        let c = config(1, 3, Bank::Right);
        assert!(!is_safe(&c));
        assert_eq!(losing_bank(&c), Some(Bank::Left));
    }

    #[test]
    fn test_right_bank_outnumbered() {
        // 2M 1C left leaves 1M 2C on the right.
        let c = config(2, 1, Bank::Right);
        assert!(bank_is_safe(&c, Bank::Left));
        assert!(!bank_is_safe(&c, Bank::Right));
        assert_eq!(losing_bank(&c), Some(Bank::Right));
    }

    #[test]
    fn test_never_both_banks_unsafe() {
        for c in Configuration::all() {
            assert!(unsafe_banks(&c).len() <= 1, "{c} has two unsafe banks");
        }
    }

    #[test]
    fn test_safe_configuration_count() {
        // 10 bank splits survive the rule, each with either boat side.
        let safe = Configuration::all().filter(is_safe).count();
        assert_eq!(safe, 20);
    }
}
