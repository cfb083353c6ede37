//! Effects - side effects declared by the reducer
//!
//! The reducer never touches timers. It returns a
//! `tui_dispatch::DispatchResult` carrying these, and the effect handler in
//! [`crate::reels`] turns them into subscriptions and tasks.

use crate::catalog::Letter;

/// Side effects the reducer can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the tick and settle timers for spin number `spin`.
    ///
    /// Carries the list lengths of the active letter so draws can be made
    /// off the reducer.
    StartReels {
        spin: u64,
        letter: Letter,
        dinosaurs: usize,
        desserts: usize,
    },
    /// Cancel both spin timers; `result` is the settled name.
    StopReels { spin: u64, result: String },
}
