//! City grid: zone codes per cell plus the placement log.
//!
//! INVARIANTS:
//!   - `cells` has exactly `height` rows of `width` cells.
//!   - A placement record exists for (x, y) only if that cell is not Empty.
//!   - Each cell has at most one placement record.

use crate::{
    error::{SimError, SimResult},
    rng::LedgerRng,
    types::ZoneCode,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A building placed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub zone: ZoneCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    width: usize,
    height: usize,
    /// Row-major: `cells[y][x]`.
    cells: Vec<Vec<ZoneCode>>,
    placements: Vec<Placement>,
}

impl GridLayout {
    /// An all-Empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![ZoneCode::Empty; width]; height],
            placements: Vec::new(),
        }
    }

    pub fn width(&self) -> usize  { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn rows(&self) -> &[Vec<ZoneCode>] {
        &self.cells
    }

    /// Zone at (x, y), or `None` when out of bounds.
    pub fn zone_at(&self, x: usize, y: usize) -> Option<ZoneCode> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Number of cells holding `zone`.
    pub fn count(&self, zone: ZoneCode) -> usize {
        self.cells.iter().flatten().filter(|&&z| z == zone).count()
    }

    /// Replace the grid with a fresh `width`×`height` layout, every cell
    /// drawn independently and uniformly from the four zone codes.
    pub fn generate_random(&mut self, width: usize, height: usize, rng: &mut LedgerRng) {
        let cells = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| ZoneCode::ALL[rng.index_below(ZoneCode::ALL.len())])
                    .collect()
            })
            .collect();
        *self = Self { width, height, cells, placements: Vec::new() };
        log::debug!(
            "grid generated {width}x{height}: residential={} commercial={} industrial={}",
            self.count(ZoneCode::Residential),
            self.count(ZoneCode::Commercial),
            self.count(ZoneCode::Industrial),
        );
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.width, self.height);
        log::debug!("grid reset to empty");
    }

    /// Place a building on an Empty cell. Rejections leave the grid untouched.
    pub fn place_building(&mut self, x: i64, y: i64, zone: ZoneCode) -> SimResult<Placement> {
        let (cx, cy) = self.checked_coords(x, y).ok_or(SimError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;

        if zone == ZoneCode::Empty {
            return Err(SimError::InvalidZone { x: cx, y: cy });
        }

        let current = self.cells[cy][cx];
        if current != ZoneCode::Empty {
            return Err(SimError::OccupiedCell { x: cx, y: cy, zone: current });
        }

        self.cells[cy][cx] = zone;
        let placement = Placement { x: cx, y: cy, zone };
        self.placements.push(placement);
        log::debug!("building added at ({cx}, {cy}): {zone}");
        Ok(placement)
    }

    fn checked_coords(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let cx = usize::try_from(x).ok().filter(|&cx| cx < self.width)?;
        let cy = usize::try_from(y).ok().filter(|&cy| cy < self.height)?;
        Some((cx, cy))
    }

    /// Check the structural invariants. Used when restoring a snapshot.
    pub fn validate(&self) -> Result<(), String> {
        if self.cells.len() != self.height {
            return Err(format!(
                "grid has {} rows, expected {}",
                self.cells.len(),
                self.height
            ));
        }
        if let Some((y, row)) = self.cells.iter().enumerate().find(|(_, r)| r.len() != self.width) {
            return Err(format!("grid row {y} has {} cells, expected {}", row.len(), self.width));
        }

        let mut seen = HashSet::new();
        for p in &self.placements {
            match self.zone_at(p.x, p.y) {
                None => return Err(format!("placement ({}, {}) is outside the grid", p.x, p.y)),
                Some(ZoneCode::Empty) => {
                    return Err(format!("placement ({}, {}) points at an empty cell", p.x, p.y))
                }
                Some(_) => {}
            }
            if !seen.insert((p.x, p.y)) {
                return Err(format!("duplicate placement at ({}, {})", p.x, p.y));
            }
        }
        Ok(())
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|z| z.code().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
