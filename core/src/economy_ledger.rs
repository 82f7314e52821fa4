use crate::config::EconomyConfig;
use serde::{Deserialize, Serialize};

/// Running budget: fixed per-tick rates and cumulative totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyLedger {
    pub income_rate:    i64,
    pub expense_rate:   i64,
    pub total_income:   i64,
    pub total_expenses: i64,
}

impl EconomyLedger {
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            income_rate:    config.income_per_tick,
            expense_rate:   config.expense_per_tick,
            total_income:   0,
            total_expenses: 0,
        }
    }

    /// Returns the new total income.
    pub fn accrue_income(&mut self) -> i64 {
        self.total_income = self.total_income.saturating_add(self.income_rate);
        log::debug!("total income updated: {}", self.total_income);
        self.total_income
    }

    /// Returns the new total expenses.
    pub fn accrue_expense(&mut self) -> i64 {
        self.total_expenses = self.total_expenses.saturating_add(self.expense_rate);
        log::debug!("total expenses updated: {}", self.total_expenses);
        self.total_expenses
    }

    pub fn balance(&self) -> i64 {
        self.total_income.saturating_sub(self.total_expenses)
    }
}
