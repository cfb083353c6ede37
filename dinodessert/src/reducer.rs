//! Reducer - pure function: (state, action) -> (changed, effects)
//!
//! All state transitions of the reels happen here. Timers are requested
//! through [`Effect`]s and never started directly.

use tui_dispatch::DispatchResult;

use crate::action::{Action, Direction};
use crate::catalog::NameKind;
use crate::effect::Effect;
use crate::state::{ReelState, SpinStatus};

/// The reducer handles all state transitions
///
/// # Returns
/// `changed == true` if the UI should re-render
pub fn reducer(state: &mut ReelState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Letter actions =====
        Action::LetterChange(direction) => {
            if state.is_spinning() {
                return DispatchResult::unchanged();
            }
            state.letter_index = step_index(state.letter_index, state.catalog.len(), direction);
            state.reset_to_first_names();
            DispatchResult::changed()
        }

        Action::LetterSelect(letter) => {
            if state.is_spinning() {
                return DispatchResult::unchanged();
            }
            match state.catalog.index_of(letter) {
                Some(index) => {
                    state.letter_index = index;
                    state.reset_to_first_names();
                    DispatchResult::changed()
                }
                None => DispatchResult::unchanged(),
            }
        }

        // ===== Spin actions =====
        Action::SpinStart => {
            if state.is_spinning() {
                return DispatchResult::unchanged();
            }
            state.status = SpinStatus::Spinning;
            state.final_result = None;
            state.spin_id = state.spin_id.wrapping_add(1);
            DispatchResult::changed_with(Effect::StartReels {
                spin: state.spin_id,
                letter: state.letter(),
                dinosaurs: state.names(NameKind::Dinosaur).len(),
                desserts: state.names(NameKind::Dessert).len(),
            })
        }

        Action::SpinDidTick { spin, draw } => {
            if !is_current_spin(state, spin) {
                return DispatchResult::unchanged();
            }
            state.display = state.pair_for(draw);
            DispatchResult::changed()
        }

        Action::SpinDidSettle { spin, draw } => {
            if !is_current_spin(state, spin) {
                return DispatchResult::unchanged();
            }
            state.display = state.pair_for(draw);
            let result = state.display.joined();
            state.final_result = Some(result.clone());
            state.status = SpinStatus::Idle;
            DispatchResult::changed_with(Effect::StopReels { spin, result })
        }

        // ===== Global actions =====
        Action::Quit => {
            // Quit is handled by the event loop, not here
            DispatchResult::unchanged()
        }
    }
}

/// Cyclic step through `len` letters, wrapping at both ends.
pub fn step_index(index: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    }
}

/// Timer results only apply to the spin that is running right now.
fn is_current_spin(state: &ReelState, spin: u64) -> bool {
    state.is_spinning() && spin == state.spin_id
}
