//! DinoDessert name generator
//!
//! Pick a letter, spin the reels, get a dinosaur paired with a dessert.
//! Built on tui-dispatch's Redux/Elm-inspired layout:
//!
//! - **Catalog**: letter-keyed dinosaur and dessert name tables
//! - **Action**: what can happen (user intents and timer results)
//! - **Reducer**: pure `(state, action) -> DispatchResult<Effect>`
//! - **Effect**: timer work requested by the reducer, run by [`Reels`]
//! - **Components**: ratatui views that map input to actions
//!
//! The binary runs everything under `tui_dispatch::EffectRuntime`;
//! [`SpinMachine`] drives the same pieces without a terminal.
//!
//! # Example
//!
//! ```ignore
//! use dinodessert::prelude::*;
//!
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let catalog = Arc::new(NameCatalog::builtin()?);
//! let mut machine = SpinMachine::new(ReelState::new(catalog), StdRandom::from_entropy(), action_tx);
//!
//! machine.change_letter(Direction::Next);
//! machine.spin();
//! machine.run_until_settled(&mut action_rx).await;
//! println!("{:?}", machine.state().final_result);
//! ```

pub mod action;
pub mod catalog;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod machine;
pub mod random;
pub mod reducer;
pub mod reels;
pub mod state;
pub mod ui;

pub use action::{Action, Direction};
pub use catalog::{CatalogBuilder, CatalogError, Letter, NameCatalog, NameKind};
pub use config::{AppConfig, ConfigError};
pub use effect::Effect;
pub use machine::{reel_store, ReelStore, SpinMachine};
pub use random::{Draw, RandomSource, ScriptedRandom, StdRandom};
pub use reducer::reducer;
pub use reels::{ReelTimers, Reels, SpinTiming, SPIN_DURATION, SPIN_TICK};
pub use state::{DisplayPair, ReelState, SpinStatus};
pub use ui::ReelsUi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, Direction};
    pub use crate::catalog::{Letter, NameCatalog, NameKind};
    pub use crate::machine::SpinMachine;
    pub use crate::random::{RandomSource, ScriptedRandom, StdRandom};
    pub use crate::reels::SpinTiming;
    pub use crate::state::{DisplayPair, ReelState, SpinStatus};
    pub use std::sync::Arc;
}
