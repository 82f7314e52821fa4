//! The game-state aggregate, sole owner of every ledger.
//!
//! RULES:
//!   - Ledgers are siblings. No ledger calls another.
//!   - Every random roll takes a fresh stream from the RngBank and
//!     advances the draw cursor, so the cursor (saved with the game)
//!     fully determines what the next roll will be.
//!   - Save writes the whole aggregate; load replaces the whole
//!     aggregate or nothing.

use crate::{
    config::CityConfig,
    crisis_selector::CrisisSelector,
    customization_ledger::CustomizationLedger,
    economy_ledger::EconomyLedger,
    error::SimResult,
    grid_layout::GridLayout,
    morale_tracker::MoraleTracker,
    resource_ledger::ResourceLedger,
    rng::{LedgerRng, LedgerSlot, RngBank},
    route_registry::RouteRegistry,
    snapshot::CitySnapshot,
    types::{CityId, Resource},
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Empty until a game is started.
    pub city_id:       CityId,
    seed:              u64,
    draws:             u64,
    pub grid:          GridLayout,
    pub resources:     ResourceLedger,
    pub economy:       EconomyLedger,
    pub morale:        MoraleTracker,
    pub crisis:        CrisisSelector,
    pub customization: CustomizationLedger,
    pub routes:        RouteRegistry,
}

impl GameState {
    /// A blank state: empty grid, ledgers at their configured starting values.
    pub fn new(config: &CityConfig) -> Self {
        Self {
            city_id:       CityId::new(),
            seed:          0,
            draws:         0,
            grid:          GridLayout::new(config.width, config.height),
            resources:     ResourceLedger::new(&config.resources),
            economy:       EconomyLedger::new(&config.economy),
            morale:        MoraleTracker::new(&config.morale),
            crisis:        CrisisSelector::new(config.crisis_catalog.clone()),
            customization: CustomizationLedger::default(),
            routes:        RouteRegistry::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        city_id:       CityId,
        seed:          u64,
        draws:         u64,
        grid:          GridLayout,
        resources:     ResourceLedger,
        economy:       EconomyLedger,
        morale:        MoraleTracker,
        crisis:        CrisisSelector,
        customization: CustomizationLedger,
        routes:        RouteRegistry,
    ) -> Self {
        Self { city_id, seed, draws, grid, resources, economy, morale, crisis, customization, routes }
    }

    /// Replace everything with a fresh game seeded from `seed`:
    /// new city id, randomly generated grid, starting ledgers.
    pub fn start_new_game(&mut self, config: &CityConfig, seed: u64) {
        let mut fresh = GameState::new(config);
        fresh.seed = seed;

        let mut id_rng = fresh.next_rng(LedgerSlot::Identity);
        let mut bytes = [0u8; 16];
        id_rng.fill_bytes(&mut bytes);
        fresh.city_id = uuid::Builder::from_random_bytes(bytes).into_uuid().to_string();

        fresh.generate_city();
        *self = fresh;
        log::info!("new game started: city={} seed={seed}", self.city_id);
    }

    pub fn seed(&self) -> u64  { self.seed }
    pub fn draws(&self) -> u64 { self.draws }

    fn next_rng(&mut self, slot: LedgerSlot) -> LedgerRng {
        let rng = RngBank::new(self.seed).for_ledger_at_draw(slot, self.draws);
        self.draws = self.draws.wrapping_add(1);
        rng
    }

    /// Re-roll every grid cell at the current grid size.
    pub fn generate_city(&mut self) {
        let (width, height) = (self.grid.width(), self.grid.height());
        let mut rng = self.next_rng(LedgerSlot::Grid);
        self.grid.generate_random(width, height, &mut rng);
    }

    pub fn collect_resources(&mut self) -> BTreeMap<Resource, i64> {
        let mut rng = self.next_rng(LedgerSlot::Resources);
        self.resources.collect(&mut rng)
    }

    /// Start a random crisis. Returns its name.
    pub fn trigger_crisis(&mut self) -> Option<String> {
        let mut rng = self.next_rng(LedgerSlot::Crisis);
        let event = self.crisis.trigger(&mut rng).map(str::to_string);
        if let Some(event) = &event {
            log::info!("crisis event triggered: {event}");
        }
        event
    }

    pub fn save(&self, destination: &Path) -> SimResult<()> {
        CitySnapshot::capture(self, Utc::now()).write_to(destination)?;
        log::info!("game saved: city={} path={}", self.city_id, destination.display());
        Ok(())
    }

    /// Replace this state with the snapshot at `source`.
    /// On any error `self` is left exactly as it was.
    pub fn load(&mut self, source: &Path) -> SimResult<()> {
        let snapshot = CitySnapshot::read_from(source)?;
        let saved_at = snapshot.saved_at;
        let restored = snapshot
            .restore()
            .map_err(|reason| crate::snapshot::corrupt(source, reason))?;
        *self = restored;
        log::info!(
            "game loaded: city={} saved_at={saved_at} path={}",
            self.city_id,
            source.display()
        );
        Ok(())
    }
}
