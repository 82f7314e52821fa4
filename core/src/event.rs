//! Records of state changes, produced by the session for every command.
//!
//! The presentation layer may render these, print them as JSON,
//! or ignore them; nothing in the simulation reads them back.

use crate::types::{CityId, Resource, ZoneCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variants are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CityEvent {
    // ── Lifecycle ──────────────────────────────────
    GameStarted {
        city_id: CityId,
        seed: u64,
        width: usize,
        height: usize,
    },
    GameLoaded {
        city_id: CityId,
        path: String,
    },
    GameSaved {
        city_id: CityId,
        path: String,
    },

    // ── Grid ───────────────────────────────────────
    CityReset,
    BuildingPlaced {
        x: usize,
        y: usize,
        zone: ZoneCode,
    },
    PlacementRejected {
        x: i64,
        y: i64,
        reason: String,
    },

    // ── Resources and budget ───────────────────────
    ResourcesCollected {
        gains: BTreeMap<Resource, i64>,
    },
    ResourceLow {
        resource: Resource,
        amount: i64,
    },
    IncomeAccrued {
        total_income: i64,
        balance: i64,
    },
    ExpenseAccrued {
        total_expenses: i64,
        balance: i64,
    },

    // ── Morale ─────────────────────────────────────
    HappinessAdjusted {
        delta: i64,
        happiness: i64,
    },
    HappinessLow {
        happiness: i64,
    },

    // ── Crisis ─────────────────────────────────────
    CrisisTriggered {
        event: String,
    },
    CrisisResolved {
        event: String,
    },

    // ── Customization and transport ────────────────
    ParkAdded {
        total: u32,
    },
    TransportImproved {
        total: u32,
    },
    EducationEnhanced {
        total: u32,
    },
    RouteAdded {
        name: String,
    },
    RouteRemoved {
        name: String,
    },
}
