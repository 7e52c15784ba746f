//! Seeded randomness for the turtle and the yoke.
//!
//! A run is fully described by one u64 seed. The turtle and the yoke each
//! draw from their own stream off that seed, so a turtle step always
//! consumes two draws of its own and a yoke step four of its own, and
//! neither walk depends on how the other one is sampled.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single entity.
pub struct SimRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SimRng {
    /// Stream for one slot. The slot index is spread across the seed bits
    /// so neighbouring slots do not start from neighbouring states.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a float in [lo, hi). Returns `lo` when the range is empty.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Roll a float symmetric around zero: [-half_width, half_width).
    pub fn symmetric(&mut self, half_width: f64) -> f64 {
        self.uniform(-half_width, half_width)
    }
}

/// All entity RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_entity(&self, slot: EntitySlot) -> SimRng {
        SimRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable entity slot assignments.
/// NEVER reorder or remove entries. Only append.
/// Reordering changes every entity's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum EntitySlot {
    Turtle = 0,
    Yoke = 1,
}

impl EntitySlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Turtle => "turtle",
            Self::Yoke => "yoke",
        }
    }
}
