use crate::types::Resource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Inclusive range for a single random roll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollRange {
    pub min: i64,
    pub max: i64,
}

impl RollRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResourceConfig {
    pub initial: BTreeMap<Resource, i64>,
    /// Ceilings are recorded and reported, never enforced.
    pub capacity: BTreeMap<Resource, i64>,
    /// Amount added per resource on every collection.
    pub collect: BTreeMap<Resource, RollRange>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            initial: BTreeMap::from([
                (Resource::Money, 1000),
                (Resource::Power, 100),
                (Resource::Water, 100),
                (Resource::Food, 100),
            ]),
            capacity: BTreeMap::from([
                (Resource::Money, 5000),
                (Resource::Power, 500),
                (Resource::Water, 500),
                (Resource::Food, 500),
            ]),
            collect: BTreeMap::from([
                (Resource::Money, RollRange::new(50, 150)),
                (Resource::Power, RollRange::new(5, 15)),
                (Resource::Water, RollRange::new(10, 30)),
                (Resource::Food, RollRange::new(15, 25)),
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EconomyConfig {
    /// Added to total income per accrual.
    pub income_per_tick: i64,
    /// Added to total expenses per accrual.
    pub expense_per_tick: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            income_per_tick: 100,
            expense_per_tick: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoraleConfig {
    pub initial_happiness: i64,
    /// Happiness strictly below this is reported as low.
    pub low_threshold: i64,
}

impl Default for MoraleConfig {
    fn default() -> Self {
        Self {
            initial_happiness: 100,
            low_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CityConfig {
    pub width: usize,
    pub height: usize,
    pub resources: ResourceConfig,
    pub economy: EconomyConfig,
    pub morale: MoraleConfig,
    pub crisis_catalog: Vec<String>,
    pub save_path: String,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            resources: ResourceConfig::default(),
            economy: EconomyConfig::default(),
            morale: MoraleConfig::default(),
            crisis_catalog: vec![
                "Natural Disaster".into(),
                "Economic Downturn".into(),
                "Public Protest".into(),
            ],
            save_path: "game_data.json".into(),
        }
    }
}

impl CityConfig {
    /// Load overrides from a JSON file. Missing keys fall back to defaults.
    /// In tests, use CityConfig::default().
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: CityConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded city config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("grid must be at least 1x1, got {}x{}", self.width, self.height);
        }
        if self.crisis_catalog.is_empty() {
            anyhow::bail!("crisis catalog must name at least one event");
        }
        for resource in Resource::ALL {
            if !self.resources.initial.contains_key(&resource) {
                anyhow::bail!("no initial amount for {resource}");
            }
            if !self.resources.capacity.contains_key(&resource) {
                anyhow::bail!("no capacity for {resource}");
            }
            match self.resources.collect.get(&resource) {
                Some(range) if range.min > range.max => {
                    anyhow::bail!("collection range for {resource} is inverted: {}..={}", range.min, range.max)
                }
                Some(_) => {}
                None => anyhow::bail!("no collection range for {resource}"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        CityConfig::default().validate().expect("default config must validate");
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config: CityConfig =
            serde_json::from_str(r#"{ "width": 4, "economy": { "income_per_tick": 250 } }"#).unwrap();
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 10);
        assert_eq!(config.economy.income_per_tick, 250);
        assert_eq!(config.economy.expense_per_tick, 50);
        assert_eq!(config.crisis_catalog.len(), 3);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut config = CityConfig::default();
        config.resources.collect.insert(Resource::Food, RollRange::new(30, 10));
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_grid_is_rejected() {
        let config = CityConfig { width: 0, ..CityConfig::default() };
        assert!(config.validate().is_err());
    }
}
