use serde::{Deserialize, Serialize};

/// City improvements. Counters only ever go up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationLedger {
    pub parks:            u32,
    pub public_transport: u32,
    pub education:        u32,
}

impl CustomizationLedger {
    pub fn add_park(&mut self) -> u32 {
        self.parks = self.parks.saturating_add(1);
        log::debug!("park added, total parks: {}", self.parks);
        self.parks
    }

    pub fn improve_transport(&mut self) -> u32 {
        self.public_transport = self.public_transport.saturating_add(1);
        log::debug!("public transport improved, total improvements: {}", self.public_transport);
        self.public_transport
    }

    pub fn enhance_education(&mut self) -> u32 {
        self.education = self.education.saturating_add(1);
        log::debug!("education enhanced, total enhancements: {}", self.education);
        self.education
    }
}
