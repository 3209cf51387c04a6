//! Savings target and accumulated balance.

use pocketbook_domain::SavingsState;

use crate::{
    validation::{require_positive, FIELD_TARGET, FIELD_TRANSFER},
    ValidationError,
};

/// Upper bound applied to the progress value used for drawing a progress bar.
pub const DISPLAY_PROGRESS_CAP: f64 = 130.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Savings {
    state: SavingsState,
}

impl Savings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: SavingsState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> SavingsState {
        self.state
    }

    pub fn target(&self) -> f64 {
        self.state.target
    }

    pub fn accumulated(&self) -> f64 {
        self.state.accumulated
    }

    /// Replaces the target. Zero, negative and non-finite values are rejected.
    pub fn set_target(&mut self, value: f64) -> Result<(), ValidationError> {
        self.state.target = require_positive(FIELD_TARGET, value)?;
        Ok(())
    }

    /// Clears the target without validation.
    pub fn reset_target(&mut self) {
        self.state.target = 0.0;
    }

    /// Adds `amount` to the accumulated balance.
    ///
    /// A transfer that would push the balance past the largest finite value is
    /// rejected and leaves the balance unchanged.
    pub fn transfer(&mut self, amount: f64) -> Result<(), ValidationError> {
        let amount = require_positive(FIELD_TRANSFER, amount)?;
        let accumulated = self.state.accumulated + amount;
        if !accumulated.is_finite() {
            return Err(ValidationError::new(
                FIELD_TRANSFER,
                "transfer would overflow current savings",
            ));
        }
        self.state.accumulated = accumulated;
        Ok(())
    }

    pub fn reset_savings(&mut self) {
        self.state.accumulated = 0.0;
    }

    /// Accumulated savings as a percentage of the target.
    ///
    /// An unset target divides by 1, so the result equals the accumulated amount.
    pub fn progress_percent(&self) -> f64 {
        let divisor = if self.state.target == 0.0 {
            1.0
        } else {
            self.state.target
        };
        self.state.accumulated / divisor * 100.0
    }

    /// Progress clamped to [`DISPLAY_PROGRESS_CAP`].
    pub fn display_progress(&self) -> f64 {
        self.progress_percent().min(DISPLAY_PROGRESS_CAP)
    }

    pub fn target_reached(&self) -> bool {
        self.progress_percent() >= 100.0
    }

    pub fn progress_label(&self) -> String {
        format!("{}% of target", self.progress_percent().floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_without_target_equals_accumulated() {
        let savings = Savings::from_state(SavingsState::new(0.0, 50.0));
        assert_eq!(savings.progress_percent(), 50.0);
        assert!(savings.progress_percent().is_finite());
    }

    #[test]
    fn display_progress_saturates_at_cap() {
        let savings = Savings::from_state(SavingsState::new(100.0, 200.0));
        assert_eq!(savings.progress_percent(), 200.0);
        assert_eq!(savings.display_progress(), 130.0);
    }

    #[test]
    fn display_progress_passes_through_below_cap() {
        let savings = Savings::from_state(SavingsState::new(400.0, 100.0));
        assert_eq!(savings.display_progress(), 25.0);
        assert!(!savings.target_reached());
    }

    #[test]
    fn set_target_rejects_non_positive_values() {
        let mut savings = Savings::new();
        savings.set_target(250.0).unwrap();

        for bad in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = savings.set_target(bad).unwrap_err();
            assert_eq!(err.field, "target");
            assert_eq!(savings.target(), 250.0);
        }
    }

    #[test]
    fn reset_target_skips_validation() {
        let mut savings = Savings::new();
        savings.set_target(1000.0).unwrap();
        savings.reset_target();
        assert_eq!(savings.target(), 0.0);
    }

    #[test]
    fn transfer_accumulates_and_rejects_bad_amounts() {
        let mut savings = Savings::new();
        savings.transfer(200.0).unwrap();
        savings.transfer(50.5).unwrap();
        assert_eq!(savings.accumulated(), 250.5);

        let err = savings.transfer(-1.0).unwrap_err();
        assert_eq!(err.field, "transfer");
        assert_eq!(savings.accumulated(), 250.5);

        savings.reset_savings();
        assert_eq!(savings.accumulated(), 0.0);
    }

    #[test]
    fn transfer_rejects_overflowing_balance() {
        let mut savings = Savings::new();
        savings.transfer(1.0e308).unwrap();

        let err = savings.transfer(1.0e308).unwrap_err();

        assert_eq!(err.field, "transfer");
        assert_eq!(savings.accumulated(), 1.0e308);
    }

    #[test]
    fn progress_label_floors_the_percentage() {
        let savings = Savings::from_state(SavingsState::new(300.0, 100.0));
        assert_eq!(savings.progress_label(), "33% of target");
    }
}
