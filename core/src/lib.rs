//! City simulation core: the game-state aggregate, its ledgers,
//! the versioned snapshot format and the command boundary.

pub mod action;
pub mod command;
pub mod config;
pub mod crisis_selector;
pub mod customization_ledger;
pub mod economy_ledger;
pub mod error;
pub mod event;
pub mod game_state;
pub mod grid_layout;
pub mod morale_tracker;
pub mod resource_ledger;
pub mod rng;
pub mod route_registry;
pub mod session;
pub mod snapshot;
pub mod types;
