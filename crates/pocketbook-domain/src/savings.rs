use serde::{Deserialize, Serialize};

/// Savings goal and the balance transferred toward it.
///
/// Both values are independent of the ledger and of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsState {
    pub target: f64,
    pub accumulated: f64,
}

impl SavingsState {
    pub fn new(target: f64, accumulated: f64) -> Self {
        Self {
            target,
            accumulated,
        }
    }
}
