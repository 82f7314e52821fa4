use crate::config::MoraleConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded change to city happiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoraleEntry {
    pub delta:           i64,
    pub happiness_after: i64,
    pub reason:          String,
}

/// City happiness. No floor, no ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoraleTracker {
    pub happiness:     i64,
    pub low_threshold: i64,
    history:           Vec<MoraleEntry>,
}

impl MoraleTracker {
    pub fn new(config: &MoraleConfig) -> Self {
        Self {
            happiness:     config.initial_happiness,
            low_threshold: config.low_threshold,
            history:       Vec::new(),
        }
    }

    /// Apply a signed change and record it. Returns the new happiness.
    /// Saturates at the i64 range.
    pub fn adjust(&mut self, amount: i64, reason: &str) -> i64 {
        self.happiness = self.happiness.saturating_add(amount);
        self.history.push(MoraleEntry {
            delta:           amount,
            happiness_after: self.happiness,
            reason:          reason.to_string(),
        });

        if self.is_low() {
            log::warn!("happiness is low: {} ({amount:+}, {reason})", self.happiness);
        } else {
            log::debug!("happiness {} ({amount:+}, {reason})", self.happiness);
        }
        self.happiness
    }

    pub fn is_low(&self) -> bool {
        self.happiness < self.low_threshold
    }

    pub fn history(&self) -> &[MoraleEntry] {
        &self.history
    }
}

impl fmt::Display for MoraleTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current Happiness Level: {}", self.happiness)?;
        if self.is_low() {
            write!(f, "\nWarning: Happiness is low!")?;
        }
        Ok(())
    }
}
