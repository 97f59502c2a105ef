//! Searching engines
//!
//! Both engines take the haystack and a target and return a
//! [`RunResult`](crate::algorithms::RunResult) of [`SearchFrame`]s. Only the
//! terminal step carries an [`Outcome`](crate::snapshot::Outcome).
//!
//! [`SearchFrame`]: crate::snapshot::SearchFrame

pub mod binary;
pub mod linear;

use super::AlgoError;

/// Middle element, used when no target is supplied
pub fn default_target(numbers: &[f64]) -> f64 {
    let numbers = super::normalize(numbers);
    numbers.get(numbers.len() / 2).copied().unwrap_or(0.0)
}

pub(crate) fn check_target(target: f64) -> Result<(), AlgoError> {
    if target.is_finite() {
        Ok(())
    } else {
        Err(AlgoError::invalid_input(format!(
            "search target must be a finite number, got {}",
            target
        )))
    }
}
