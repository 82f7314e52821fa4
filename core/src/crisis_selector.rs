use crate::rng::LedgerRng;
use serde::{Deserialize, Serialize};

/// Fixed catalog of crisis events and the one currently in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisSelector {
    catalog: Vec<String>,
    active:  Option<String>,
}

impl CrisisSelector {
    pub fn new(catalog: Vec<String>) -> Self {
        Self { catalog, active: None }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Pick an event uniformly and make it active, replacing any event
    /// already in play. `None` only if the catalog is empty.
    pub fn trigger(&mut self, rng: &mut LedgerRng) -> Option<&str> {
        let picked = rng.choose(&self.catalog)?.clone();
        if let Some(previous) = self.active.replace(picked) {
            log::debug!("crisis '{previous}' replaced before resolution");
        }
        self.active.as_deref()
    }

    /// Clear the active event. Returns what was cleared; no-op when idle.
    pub fn resolve(&mut self) -> Option<String> {
        self.active.take()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.is_empty() {
            return Err("crisis catalog is empty".into());
        }
        if let Some(active) = &self.active {
            if !self.catalog.contains(active) {
                return Err(format!("active crisis '{active}' is not in the catalog"));
            }
        }
        Ok(())
    }
}
