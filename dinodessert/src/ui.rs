//! Glue between `EffectRuntime` and the view
//!
//! The runtime hands every terminal event to [`ReelsUi::map_event`] and
//! asks [`ReelsUi::render`] for a frame whenever state changed.

use crossterm::event::KeyEventKind;
use ratatui::{layout::Rect, Frame};
use tui_dispatch::{EventKind, EventOutcome, RenderContext};

use crate::action::Action;
use crate::components::{Component, ReelsView, ReelsViewProps};
use crate::state::ReelState;

#[derive(Default)]
pub struct ReelsUi {
    view: ReelsView,
}

impl ReelsUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &ReelState,
        _render_ctx: RenderContext,
    ) {
        self.view.render(frame, area, ReelsViewProps { state });
    }

    /// Key presses, clicks and resizes become actions; key releases and
    /// repeats are dropped.
    pub fn map_event(&mut self, event: &EventKind, state: &ReelState) -> EventOutcome<Action> {
        if let EventKind::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return EventOutcome::ignored();
            }
        }
        let outcome = EventOutcome::from_actions(
            self.view.handle_event(event, ReelsViewProps { state }),
        );
        if let EventKind::Resize(..) = event {
            return outcome.with_render();
        }
        outcome
    }
}
