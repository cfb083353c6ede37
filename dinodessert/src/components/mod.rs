//! UI components
//!
//! Every piece of the screen is a `tui_dispatch` [`Component`]: it renders
//! from borrowed props and turns terminal events into actions. Components
//! never touch the reel state directly. Internal UI state (where a control
//! was last drawn, for mouse hit testing) lives in `&mut self`.

use ratatui::layout::Rect;
pub use tui_dispatch::Component;
use tui_dispatch::EventKind;

pub mod footer;
pub mod header;
pub mod help_bar;
pub mod letter_wheel;
pub mod reels_view;
pub mod result_panel;
pub mod slot_display;
pub mod spin_button;

pub use footer::{Footer, FooterProps};
pub use header::{Header, HeaderProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use letter_wheel::{LetterWheel, LetterWheelProps};
pub use reels_view::{ReelsView, ReelsViewProps};
pub use result_panel::{ResultPanel, ResultPanelProps, IDLE_HINT, SPINNING_HINT};
pub use slot_display::{SlotDisplay, SlotDisplayProps};
pub use spin_button::{SpinButton, SpinButtonProps};

/// Whether `event` is a left click inside `area`.
pub(crate) fn is_click_in(event: &EventKind, area: Rect) -> bool {
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::layout::Position;

    match event {
        EventKind::Mouse(mouse) => {
            mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && area.contains(Position::new(mouse.column, mouse.row))
        }
        _ => false,
    }
}
