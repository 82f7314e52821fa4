//! The presentation boundary.
//!
//! A GameSession owns the one GameState for a play session and turns
//! each PlayerCommand into a status message plus the events it caused.
//! Every error is recoverable: it becomes a status message and the
//! state is left as the failed operation found it.

use crate::{
    action,
    command::PlayerCommand,
    config::CityConfig,
    error::SimError,
    event::CityEvent,
    game_state::GameState,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of one command, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub ok:     bool,
    pub status: String,
    pub events: Vec<CityEvent>,
}

impl CommandOutcome {
    fn ok(status: impl Into<String>, events: Vec<CityEvent>) -> Self {
        Self { ok: true, status: status.into(), events }
    }

    fn rejected(status: impl Into<String>, events: Vec<CityEvent>) -> Self {
        Self { ok: false, status: status.into(), events }
    }
}

pub struct GameSession {
    config:      CityConfig,
    state:       GameState,
    save_path:   PathBuf,
    base_seed:   u64,
    games_begun: u64,
}

impl GameSession {
    /// `base_seed` seeds every new game that does not name its own seed.
    pub fn new(config: CityConfig, base_seed: u64) -> Self {
        let state = GameState::new(&config);
        let save_path = PathBuf::from(&config.save_path);
        Self { config, state, save_path, base_seed, games_begun: 0 }
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &CityConfig {
        &self.config
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn execute(&mut self, command: PlayerCommand) -> CommandOutcome {
        log::debug!("command: {command:?}");
        match command {
            PlayerCommand::NewGame { seed } => self.new_game(seed),
            PlayerCommand::LoadGame => self.load_game(),
            PlayerCommand::SaveGame => self.save_game(),

            PlayerCommand::Action { input } => CommandOutcome::ok(action::respond(&input), vec![]),

            PlayerCommand::AddPark => {
                let total = self.state.customization.add_park();
                CommandOutcome::ok(
                    format!("Park added to the city. Total parks: {total}"),
                    vec![CityEvent::ParkAdded { total }],
                )
            }
            PlayerCommand::ImproveTransport => {
                let total = self.state.customization.improve_transport();
                CommandOutcome::ok(
                    format!("Public transport improved. Total improvements: {total}"),
                    vec![CityEvent::TransportImproved { total }],
                )
            }
            PlayerCommand::EnhanceEducation => {
                let total = self.state.customization.enhance_education();
                CommandOutcome::ok(
                    format!("Education enhanced. Total enhancements: {total}"),
                    vec![CityEvent::EducationEnhanced { total }],
                )
            }

            PlayerCommand::ViewResources => {
                CommandOutcome::ok(self.state.resources.to_string().trim_end(), vec![])
            }
            PlayerCommand::ViewHappiness => CommandOutcome::ok(self.state.morale.to_string(), vec![]),
            PlayerCommand::ViewBudget => {
                let economy = &self.state.economy;
                CommandOutcome::ok(
                    format!(
                        "Total income: {}\nTotal expenses: {}\nBudget balance: {}",
                        economy.total_income,
                        economy.total_expenses,
                        economy.balance()
                    ),
                    vec![],
                )
            }
            PlayerCommand::ViewCity => CommandOutcome::ok(self.state.grid.to_string().trim_end(), vec![]),
            PlayerCommand::ViewRoutes => CommandOutcome::ok(self.state.routes.to_string().trim_end(), vec![]),

            PlayerCommand::TriggerCrisis => match self.state.trigger_crisis() {
                Some(event) => CommandOutcome::ok(
                    format!("Crisis event triggered: {event}"),
                    vec![CityEvent::CrisisTriggered { event }],
                ),
                None => CommandOutcome::rejected("No crisis events are configured.", vec![]),
            },
            PlayerCommand::ResolveCrisis => match self.state.crisis.resolve() {
                Some(event) => CommandOutcome::ok(
                    format!("Crisis event resolved: {event}"),
                    vec![CityEvent::CrisisResolved { event }],
                ),
                None => CommandOutcome::ok("No active crisis to resolve.", vec![]),
            },

            PlayerCommand::CollectResources => self.collect_resources(),
            PlayerCommand::AccrueIncome => {
                let total_income = self.state.economy.accrue_income();
                let balance = self.state.economy.balance();
                CommandOutcome::ok(
                    format!("Total income updated: {total_income}"),
                    vec![CityEvent::IncomeAccrued { total_income, balance }],
                )
            }
            PlayerCommand::AccrueExpense => {
                let total_expenses = self.state.economy.accrue_expense();
                let balance = self.state.economy.balance();
                CommandOutcome::ok(
                    format!("Total expenses updated: {total_expenses}"),
                    vec![CityEvent::ExpenseAccrued { total_expenses, balance }],
                )
            }
            PlayerCommand::AdjustHappiness { amount, reason } => {
                let reason = if reason.is_empty() { "player".to_string() } else { reason };
                let happiness = self.state.morale.adjust(amount, &reason);
                let mut events = vec![CityEvent::HappinessAdjusted { delta: amount, happiness }];
                let mut status = format!("Happiness changed by {amount:+}. Current happiness: {happiness}");
                if self.state.morale.is_low() {
                    events.push(CityEvent::HappinessLow { happiness });
                    status.push_str("\nWarning: Happiness is low!");
                }
                CommandOutcome::ok(status, events)
            }

            PlayerCommand::PlaceBuilding { x, y, zone } => {
                match self.state.grid.place_building(x, y, zone) {
                    Ok(p) => CommandOutcome::ok(
                        format!("Building added at ({}, {}): {}", p.x, p.y, p.zone),
                        vec![CityEvent::BuildingPlaced { x: p.x, y: p.y, zone: p.zone }],
                    ),
                    Err(e) => {
                        log::warn!("placement rejected: {e}");
                        CommandOutcome::rejected(
                            e.to_string(),
                            vec![CityEvent::PlacementRejected { x, y, reason: e.to_string() }],
                        )
                    }
                }
            }
            PlayerCommand::ResetCity => {
                self.state.grid.reset();
                CommandOutcome::ok("City reset to initial state.", vec![CityEvent::CityReset])
            }
            PlayerCommand::AddRoute { name } => {
                if self.state.routes.add_route(&name) {
                    let name = name.trim().to_string();
                    CommandOutcome::ok(format!("Route added: {name}"), vec![CityEvent::RouteAdded { name }])
                } else {
                    CommandOutcome::rejected(format!("Route '{}' already exists or is blank.", name.trim()), vec![])
                }
            }
            PlayerCommand::RemoveRoute { name } => {
                if self.state.routes.remove_route(&name) {
                    let name = name.trim().to_string();
                    CommandOutcome::ok(format!("Route removed: {name}"), vec![CityEvent::RouteRemoved { name }])
                } else {
                    CommandOutcome::ok(format!("No route named '{}'.", name.trim()), vec![])
                }
            }
        }
    }

    fn new_game(&mut self, seed: Option<u64>) -> CommandOutcome {
        let seed = seed.unwrap_or_else(|| {
            self.base_seed ^ self.games_begun.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        });
        self.games_begun = self.games_begun.wrapping_add(1);
        self.state.start_new_game(&self.config, seed);

        CommandOutcome::ok(
            "Game has started. You can begin taking actions.",
            vec![CityEvent::GameStarted {
                city_id: self.state.city_id.clone(),
                seed,
                width:   self.state.grid.width(),
                height:  self.state.grid.height(),
            }],
        )
    }

    fn load_game(&mut self) -> CommandOutcome {
        match self.state.load(&self.save_path) {
            Ok(()) => CommandOutcome::ok(
                "Game loaded. You can resume playing.",
                vec![CityEvent::GameLoaded {
                    city_id: self.state.city_id.clone(),
                    path:    self.save_path.display().to_string(),
                }],
            ),
            Err(SimError::SnapshotNotFound { path }) => {
                log::warn!("no saved game at {path}");
                CommandOutcome::rejected("No saved game found!", vec![])
            }
            Err(e) => {
                log::warn!("load failed: {e}");
                CommandOutcome::rejected(e.to_string(), vec![])
            }
        }
    }

    fn save_game(&mut self) -> CommandOutcome {
        match self.state.save(&self.save_path) {
            Ok(()) => CommandOutcome::ok(
                "Game saved.",
                vec![CityEvent::GameSaved {
                    city_id: self.state.city_id.clone(),
                    path:    self.save_path.display().to_string(),
                }],
            ),
            Err(e) => {
                log::warn!("save failed: {e}");
                CommandOutcome::rejected(format!("Save failed: {e}"), vec![])
            }
        }
    }

    fn collect_resources(&mut self) -> CommandOutcome {
        let gains = self.state.collect_resources();
        let mut events = vec![CityEvent::ResourcesCollected { gains }];
        let mut status = String::from("Resources collected.");
        for resource in self.state.resources.check_low() {
            let amount = self.state.resources.amount(resource);
            status.push_str(&format!("\nWarning: {resource} is running low!"));
            events.push(CityEvent::ResourceLow { resource, amount });
        }
        CommandOutcome::ok(status, events)
    }
}
