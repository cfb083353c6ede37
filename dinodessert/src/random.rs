//! Random sources for reel draws
//!
//! Draws are independent uniform picks over list indices, with replacement,
//! so the same name can come up on consecutive ticks. The source is
//! injected so tests can script or seed it.

use std::fmt;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index generator
pub trait RandomSource: Send {
    /// Pick an index in `0..len`. Callers never pass zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// `rand`-backed source, seeded from the OS or from a fixed seed
#[derive(Debug, Clone)]
pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence, for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
///
/// Each value is reduced modulo the requested length.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Always picks the first entry.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % len.max(1)
    }
}

/// Random source shared between the machine and its timer tasks
pub type SharedRandom = Arc<Mutex<Box<dyn RandomSource>>>;

pub fn shared(source: impl RandomSource + 'static) -> SharedRandom {
    let boxed: Box<dyn RandomSource> = Box::new(source);
    Arc::new(Mutex::new(boxed))
}

/// One drawn pair of list indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Draw {
    pub dinosaur: usize,
    pub dessert: usize,
}

impl Draw {
    pub fn new(dinosaur: usize, dessert: usize) -> Self {
        Self { dinosaur, dessert }
    }

    /// Two independent picks: one over the dinosaur list, one over the
    /// dessert list.
    pub fn roll(source: &mut dyn RandomSource, dinosaurs: usize, desserts: usize) -> Self {
        Self {
            dinosaur: source.pick(dinosaurs.max(1)),
            dessert: source.pick(desserts.max(1)),
        }
    }

    /// Roll through a shared source. A poisoned lock still yields a draw.
    pub fn roll_shared(source: &SharedRandom, dinosaurs: usize, desserts: usize) -> Self {
        let mut guard = source.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Self::roll(&mut **guard, dinosaurs, desserts)
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dinosaur, self.dessert)
    }
}
