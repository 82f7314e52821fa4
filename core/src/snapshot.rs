//! Snapshot serialization: full game state to and from a JSON file.
//!
//! Every ledger is stored in its own versioned section. A section whose
//! version this build does not know is rejected as corrupt rather than
//! half-read; bump a section's SCHEMA_VERSION whenever its fields change.
//!
//! Writes go through `write_atomic`: the new snapshot lands in a
//! sibling `.tmp` file and is renamed over the target only once it is
//! fully flushed, so a failed save never damages the previous one.

use crate::{
    crisis_selector::CrisisSelector,
    customization_ledger::CustomizationLedger,
    economy_ledger::EconomyLedger,
    error::{SimError, SimResult},
    game_state::GameState,
    grid_layout::GridLayout,
    morale_tracker::MoraleTracker,
    resource_ledger::ResourceLedger,
    route_registry::RouteRegistry,
    types::CityId,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// A ledger that can be stored as a snapshot section.
pub trait SnapshotSection: Serialize + DeserializeOwned {
    const NAME: &'static str;
    const SCHEMA_VERSION: u32;

    /// Structural checks run after deserialization.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

impl SnapshotSection for GridLayout {
    const NAME: &'static str = "grid";
    const SCHEMA_VERSION: u32 = 1;
    fn check(&self) -> Result<(), String> { self.validate() }
}

impl SnapshotSection for ResourceLedger {
    const NAME: &'static str = "resources";
    const SCHEMA_VERSION: u32 = 1;
    fn check(&self) -> Result<(), String> { self.validate() }
}

impl SnapshotSection for EconomyLedger {
    const NAME: &'static str = "economy";
    const SCHEMA_VERSION: u32 = 1;
}

impl SnapshotSection for MoraleTracker {
    const NAME: &'static str = "morale";
    const SCHEMA_VERSION: u32 = 1;
}

impl SnapshotSection for CrisisSelector {
    const NAME: &'static str = "crisis";
    const SCHEMA_VERSION: u32 = 1;
    fn check(&self) -> Result<(), String> { self.validate() }
}

impl SnapshotSection for CustomizationLedger {
    const NAME: &'static str = "customization";
    const SCHEMA_VERSION: u32 = 1;
}

impl SnapshotSection for RouteRegistry {
    const NAME: &'static str = "routes";
    const SCHEMA_VERSION: u32 = 1;
    fn check(&self) -> Result<(), String> { self.validate() }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section<T> {
    pub version: u32,
    pub data:    T,
}

impl<T: SnapshotSection> Section<T> {
    pub fn wrap(data: T) -> Self {
        Self { version: T::SCHEMA_VERSION, data }
    }

    pub fn open(self) -> Result<T, String> {
        if self.version != T::SCHEMA_VERSION {
            return Err(format!(
                "section '{}' has schema v{}, this build reads v{}",
                T::NAME,
                self.version,
                T::SCHEMA_VERSION
            ));
        }
        self.data
            .check()
            .map_err(|reason| format!("section '{}': {reason}", T::NAME))?;
        Ok(self.data)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySnapshot {
    pub format_version: u32,
    pub saved_at:       DateTime<Utc>,
    pub city_id:        CityId,
    pub seed:           u64,
    pub draws:          u64,
    pub grid:           Section<GridLayout>,
    pub resources:      Section<ResourceLedger>,
    pub economy:        Section<EconomyLedger>,
    pub morale:         Section<MoraleTracker>,
    pub crisis:         Section<CrisisSelector>,
    pub customization:  Section<CustomizationLedger>,
    pub routes:         Section<RouteRegistry>,
}

impl CitySnapshot {
    pub fn capture(state: &GameState, saved_at: DateTime<Utc>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            saved_at,
            city_id:       state.city_id.clone(),
            seed:          state.seed(),
            draws:         state.draws(),
            grid:          Section::wrap(state.grid.clone()),
            resources:     Section::wrap(state.resources.clone()),
            economy:       Section::wrap(state.economy.clone()),
            morale:        Section::wrap(state.morale.clone()),
            crisis:        Section::wrap(state.crisis.clone()),
            customization: Section::wrap(state.customization.clone()),
            routes:        Section::wrap(state.routes.clone()),
        }
    }

    /// Rebuild a game state, checking every section version and invariant.
    pub fn restore(self) -> Result<GameState, String> {
        if self.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(format!(
                "snapshot format v{}, this build reads v{SNAPSHOT_FORMAT_VERSION}",
                self.format_version
            ));
        }
        Ok(GameState::from_parts(
            self.city_id,
            self.seed,
            self.draws,
            self.grid.open()?,
            self.resources.open()?,
            self.economy.open()?,
            self.morale.open()?,
            self.crisis.open()?,
            self.customization.open()?,
            self.routes.open()?,
        ))
    }

    /// Serialize and atomically replace the file at `path`.
    pub fn write_to(&self, path: &Path) -> SimResult<()> {
        let json = serde_json::to_vec_pretty(self)?;
        write_atomic(path, &json)?;
        Ok(())
    }

    /// Read a snapshot, mapping a missing file to `SnapshotNotFound`
    /// and anything unparseable to `SnapshotCorrupt`.
    pub fn read_from(path: &Path) -> SimResult<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SimError::SnapshotNotFound { path: path.display().to_string() })
            }
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Err(corrupt(path, "file is empty"));
        }
        serde_json::from_slice(&bytes).map_err(|e| corrupt(path, e.to_string()))
    }
}

pub(crate) fn corrupt(path: &Path, reason: impl Into<String>) -> SimError {
    SimError::SnapshotCorrupt {
        path:   path.display().to_string(),
        reason: reason.into(),
    }
}

/// Write `data` to `{path}.tmp`, flush it to disk, then rename over `path`.
///
/// If anything fails before the rename, the file at `path` is untouched.
pub fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp_path = tmp_path_for(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let result = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

pub fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
