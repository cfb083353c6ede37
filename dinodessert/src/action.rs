//! Actions: everything that can happen to the reels
//!
//! Naming follows the category prefix convention:
//! - `Letter*` actions move the letter wheel
//! - `Spin*` actions drive the slot animation
//! - `Did` marks results delivered by timers rather than by the user

use crate::catalog::Letter;
use crate::random::Draw;

/// Direction to turn the letter wheel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One letter back (▲ on the wheel)
    Previous,
    /// One letter forward (▼ on the wheel)
    Next,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Previous => Direction::Next,
            Direction::Next => Direction::Previous,
        }
    }
}

/// Reel actions
///
/// # Categories
/// - `letter`: LetterChange, LetterSelect
/// - `spin`: SpinStart, SpinDidTick, SpinDidSettle
/// - uncategorized: Quit
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Eq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Letter category =====
    /// Intent: turn the wheel one step
    #[action(category = "letter")]
    LetterChange(Direction),

    /// Intent: jump straight to a letter (shift+letter hotkeys)
    LetterSelect(Letter),

    // ===== Spin category =====
    /// Intent: start a spin (starts the tick and settle timers)
    SpinStart,

    /// Result: tick timer fired for spin number `spin`
    #[action(category = "spin")]
    SpinDidTick { spin: u64, draw: Draw },

    /// Result: settle timer fired for spin number `spin`
    #[action(category = "spin")]
    SpinDidSettle { spin: u64, draw: Draw },

    // ===== Uncategorized =====
    /// Exit the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::Action as _;

    #[test]
    fn test_names_and_categories() {
        let tick = Action::SpinDidTick {
            spin: 1,
            draw: Draw::new(0, 0),
        };
        assert_eq!(tick.name(), "SpinDidTick");
        assert_eq!(tick.category(), Some("spin"));
        assert!(tick.is_spin());

        assert_eq!(Action::SpinStart.category(), Some("spin"));
        assert!(Action::LetterChange(Direction::Next).is_letter());
        assert!(Action::LetterSelect(Letter::default()).is_letter());
        assert_eq!(Action::Quit.category(), None);
    }

    #[test]
    fn test_direction_reversed() {
        assert_eq!(Direction::Next.reversed(), Direction::Previous);
        assert_eq!(Direction::Previous.reversed(), Direction::Next);
    }
}
