//! Reel state - single source of truth
//!
//! Components receive `&ReelState` as props; only the reducer mutates it.

use std::fmt;
use std::sync::Arc;

use crate::catalog::{Letter, NameCatalog, NameKind};
use crate::random::Draw;

/// Whether the reels are moving
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpinStatus {
    #[default]
    Idle,
    Spinning,
}

/// The names currently shown in the two slot windows
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DisplayPair {
    pub dinosaur: String,
    pub dessert: String,
}

impl DisplayPair {
    pub fn new(dinosaur: impl Into<String>, dessert: impl Into<String>) -> Self {
        Self {
            dinosaur: dinosaur.into(),
            dessert: dessert.into(),
        }
    }

    /// `"{dinosaur} {dessert}"`
    pub fn joined(&self) -> String {
        format!("{} {}", self.dinosaur, self.dessert)
    }
}

impl fmt::Display for DisplayPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dinosaur, self.dessert)
    }
}

/// Everything the UI needs to render the reels
#[derive(Clone, Debug)]
pub struct ReelState {
    /// Name tables (shared, never mutated)
    pub catalog: Arc<NameCatalog>,

    /// Position of the selected letter in the catalog alphabet
    pub letter_index: usize,

    /// Names in the slot windows
    pub display: DisplayPair,

    /// Settled name; `None` while spinning
    pub final_result: Option<String>,

    pub status: SpinStatus,

    /// Number of the current (or last) spin; timer results for other spins are stale
    pub spin_id: u64,
}

impl ReelState {
    /// Idle on the first letter, showing its first names.
    pub fn new(catalog: Arc<NameCatalog>) -> Self {
        let mut state = Self {
            catalog,
            letter_index: 0,
            display: DisplayPair::default(),
            final_result: None,
            status: SpinStatus::Idle,
            spin_id: 0,
        };
        state.reset_to_first_names();
        state
    }

    /// Start on a specific letter; falls back to the first letter when the
    /// catalog does not contain it.
    pub fn starting_at(catalog: Arc<NameCatalog>, letter: Letter) -> Self {
        let index = catalog.index_of(letter).unwrap_or(0);
        let mut state = Self::new(catalog);
        state.letter_index = index;
        state.reset_to_first_names();
        state
    }

    /// Currently selected letter.
    pub fn letter(&self) -> Letter {
        self.catalog
            .letter_at(self.letter_index)
            .or_else(|| self.catalog.letter_at(0))
            .unwrap_or_default()
    }

    pub fn names(&self, kind: NameKind) -> &[String] {
        self.catalog.names_at(self.letter_index, kind)
    }

    pub fn is_spinning(&self) -> bool {
        self.status == SpinStatus::Spinning
    }

    /// Show the first names of the current letter and settle on them.
    pub fn reset_to_first_names(&mut self) {
        self.display = self.pair_for(Draw::default());
        self.final_result = Some(self.display.joined());
    }

    /// Names at the drawn indices; out-of-range indices fall back to the
    /// first entry.
    pub fn pair_for(&self, draw: Draw) -> DisplayPair {
        DisplayPair {
            dinosaur: pick(self.names(NameKind::Dinosaur), draw.dinosaur),
            dessert: pick(self.names(NameKind::Dessert), draw.dessert),
        }
    }
}

fn pick(names: &[String], index: usize) -> String {
    names
        .get(index)
        .or_else(|| names.first())
        .cloned()
        .unwrap_or_default()
}

impl Default for ReelState {
    fn default() -> Self {
        let catalog = NameCatalog::builtin().unwrap_or_else(|_| NameCatalog::minimal());
        Self::new(Arc::new(catalog))
    }
}
