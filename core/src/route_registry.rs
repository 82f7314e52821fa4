use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Named transit routes in insertion order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRegistry {
    routes: Vec<String>,
}

impl RouteRegistry {
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.iter().any(|r| r == name)
    }

    /// Append a route. Blank or duplicate names are ignored and return false.
    pub fn add_route(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            log::warn!("route '{name}' not added: blank or already present");
            return false;
        }
        self.routes.push(name.to_string());
        log::debug!("route added: {name}");
        true
    }

    /// Remove a route by name. Absent names are a no-op returning false.
    pub fn remove_route(&mut self, name: &str) -> bool {
        let name = name.trim();
        match self.routes.iter().position(|r| r == name) {
            Some(index) => {
                self.routes.remove(index);
                log::debug!("route removed: {name}");
                true
            }
            None => false,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !seen.insert(route.as_str()) {
                return Err(format!("duplicate route '{route}'"));
            }
        }
        Ok(())
    }
}

impl fmt::Display for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Routes:")?;
        for route in &self.routes {
            writeln!(f, "- {route}")?;
        }
        Ok(())
    }
}
