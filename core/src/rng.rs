//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through LedgerRng instances derived
//! from the master seed stored on the GameState.
//!
//! Each ledger gets its own stream, seeded from
//! (master_seed, ledger slot, draw cursor). This means:
//!   - Adding a new slot never changes existing ledgers' streams.
//!   - The draw cursor is saved with the game, so a loaded game
//!     rolls exactly what the saved game would have rolled next.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single random operation.
pub struct LedgerRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl LedgerRng {
    /// Create a ledger RNG from the master seed, a stable slot index
    /// and the draw cursor. The slot index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64, draw: u64) -> Self {
        let derived_seed = master_seed
            ^ slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ draw.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a usize in [0, n).
    pub fn index_below(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Roll an i64 in [min, max], both ends inclusive.
    pub fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.inner.gen_range(min..=max)
    }

    /// Pick one element uniformly. `None` only for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index_below(items.len()))
    }

    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }
}

/// Stream factory for a single game, keyed by its master seed.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_ledger_at_draw(&self, slot: LedgerSlot, draw: u64) -> LedgerRng {
        LedgerRng::new(self.master_seed, slot as u64, draw).with_name(slot.name())
    }
}

/// Stable slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every ledger's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum LedgerSlot {
    Grid = 0,
    Resources = 1,
    Crisis = 2,
    Identity = 3,
    // Add new slots here, append only.
}

impl LedgerSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grid      => "grid",
            Self::Resources => "resources",
            Self::Crisis    => "crisis",
            Self::Identity  => "identity",
        }
    }
}
