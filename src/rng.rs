// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Randomness Sources

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// UnitSource trait
// ---------------------------------------------------------------------------

/// Source of uniform draws in `[0, 1)`.
///
/// Every random decision in the engine flows through this trait so tests
/// can replace the production generator with a scripted sequence and force
/// exact boundary behavior (e.g. a progress crossing of 100 on a chosen
/// tick). The engine itself holds no other source of nondeterminism.
pub trait UnitSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Draw scaled into `[0, scale)`.
    fn next_scaled(&mut self, scale: f64) -> f64 {
        self.next_unit() * scale
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// Returns 0 for an empty collection; callers must check emptiness
    /// themselves before indexing.
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // next_unit() < 1.0, so the product is < len and the min is a guard
        // against float rounding only.
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }
}

// ---------------------------------------------------------------------------
// ChaChaUnit - production source
// ---------------------------------------------------------------------------

/// Production source backed by `ChaCha8Rng`, seeded explicitly so soak
/// runs and wasm hosts get reproducible sequences from a `u64` seed.
#[derive(Debug, Clone)]
pub struct ChaChaUnit {
    rng: ChaCha8Rng,
}

impl ChaChaUnit {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl UnitSource for ChaChaUnit {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// ---------------------------------------------------------------------------
// ScriptedUnit - deterministic replay source
// ---------------------------------------------------------------------------

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Used by the test suites to steer individual ticks; see the engine docs
/// for the per-tick draw order.
#[derive(Debug, Clone)]
pub struct ScriptedUnit {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedUnit {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// A source that always returns the same unit value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl UnitSource for ScriptedUnit {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let v = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        v
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
