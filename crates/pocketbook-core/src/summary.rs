//! Figures derived from the ledger and savings together.

use crate::{Ledger, Savings};

/// Ledger total minus the money set aside as savings.
pub fn net_total(ledger: &Ledger, savings: &Savings) -> f64 {
    ledger.total() - savings.accumulated()
}

/// Whether the spendable balance is still non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Healthy,
    Warning,
}

impl BalanceStatus {
    pub fn from_net_total(net_total: f64) -> Self {
        if net_total < 0.0 {
            BalanceStatus::Warning
        } else {
            BalanceStatus::Healthy
        }
    }

    pub fn is_warning(self) -> bool {
        matches!(self, BalanceStatus::Warning)
    }
}

/// Point-in-time snapshot of every derived figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub entry_count: usize,
    pub income: f64,
    pub expenses: f64,
    pub total: f64,
    pub accumulated: f64,
    pub net_total: f64,
    pub target: f64,
    pub progress_percent: f64,
    pub display_progress: f64,
    pub target_reached: bool,
    pub status: BalanceStatus,
}

impl Summary {
    pub fn compute(ledger: &Ledger, savings: &Savings) -> Self {
        let net_total = net_total(ledger, savings);
        Self {
            entry_count: ledger.len(),
            income: ledger.income_total(),
            expenses: ledger.expense_total(),
            total: ledger.total(),
            accumulated: savings.accumulated(),
            net_total,
            target: savings.target(),
            progress_percent: savings.progress_percent(),
            display_progress: savings.display_progress(),
            target_reached: savings.target_reached(),
            status: BalanceStatus::from_net_total(net_total),
        }
    }
}
