//! Resource stockpiles: money, power, water, food.
//!
//! Capacity ceilings are stored alongside the amounts but nothing
//! clamps against them; collection may push an amount past its ceiling.

use crate::{
    config::{ResourceConfig, RollRange},
    rng::LedgerRng,
    types::Resource,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    amounts:  BTreeMap<Resource, i64>,
    capacity: BTreeMap<Resource, i64>,
    yields:   BTreeMap<Resource, RollRange>,
}

impl ResourceLedger {
    pub fn new(config: &ResourceConfig) -> Self {
        Self {
            amounts:  config.initial.clone(),
            capacity: config.capacity.clone(),
            yields:   config.collect.clone(),
        }
    }

    pub fn amount(&self, resource: Resource) -> i64 {
        self.amounts.get(&resource).copied().unwrap_or(0)
    }

    pub fn capacity(&self, resource: Resource) -> i64 {
        self.capacity.get(&resource).copied().unwrap_or(0)
    }

    pub fn amounts(&self) -> &BTreeMap<Resource, i64> {
        &self.amounts
    }

    /// Add one roll per resource. All rolls are drawn before any amount
    /// changes, so the ledger moves in a single step.
    /// Returns the amount gained per resource.
    pub fn collect(&mut self, rng: &mut LedgerRng) -> BTreeMap<Resource, i64> {
        let gains: BTreeMap<Resource, i64> = self
            .yields
            .iter()
            .map(|(&resource, range)| (resource, rng.range_inclusive(range.min, range.max)))
            .collect();

        for (resource, gain) in &gains {
            let amount = self.amounts.entry(*resource).or_insert(0);
            *amount = amount.saturating_add(*gain);
        }
        log::debug!("resources collected: {gains:?}");
        gains
    }

    /// Resources whose amount has gone negative.
    /// Collection is purely additive, so this only fires on edited data.
    pub fn check_low(&self) -> Vec<Resource> {
        let low: Vec<Resource> = self
            .amounts
            .iter()
            .filter(|(_, &amount)| amount < 0)
            .map(|(&resource, _)| resource)
            .collect();
        for resource in &low {
            log::warn!("{resource} is running low: {}", self.amount(*resource));
        }
        low
    }

    pub fn validate(&self) -> Result<(), String> {
        for resource in Resource::ALL {
            if !self.amounts.contains_key(&resource) {
                return Err(format!("resource ledger has no amount for {resource}"));
            }
            match self.yields.get(&resource) {
                Some(r) if r.min > r.max => {
                    return Err(format!("collection range for {resource} is inverted"))
                }
                Some(_) => {}
                None => return Err(format!("resource ledger has no collection range for {resource}")),
            }
        }
        Ok(())
    }
}

impl fmt::Display for ResourceLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Resources:")?;
        for (resource, amount) in &self.amounts {
            writeln!(f, "{}: {amount}", resource.label())?;
        }
        Ok(())
    }
}
