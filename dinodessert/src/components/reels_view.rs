//! Main screen
//!
//! PATTERN: composite component
//! - Owns the child components so they keep their hit-test areas
//! - Global keys (quit) are handled here before children see the event
//! - Shift+letter belongs to the wheel; other children ignore it
//! - Children get props borrowed from the reel state

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tui_dispatch::EventKind;

use super::{
    Component, Footer, FooterProps, Header, HeaderProps, HelpBar, HelpBarProps, LetterWheel,
    LetterWheelProps, ResultPanel, ResultPanelProps, SlotDisplay, SlotDisplayProps, SpinButton,
    SpinButtonProps,
};
use crate::action::Action;
use crate::catalog::NameKind;
use crate::state::ReelState;

pub struct ReelsViewProps<'a> {
    pub state: &'a ReelState,
}

#[derive(Default)]
pub struct ReelsView {
    wheel: LetterWheel,
    button: SpinButton,
}

impl ReelsView {
    const SLOTS_MAX_WIDTH: u16 = 56;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn spin_button(&self) -> &SpinButton {
        &self.button
    }
}

impl Component<Action> for ReelsView {
    type Props<'a> = ReelsViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if let EventKind::Key(key) = event {
            let quit = match key.code {
                KeyCode::Esc => true,
                KeyCode::Char('q') => key.modifiers.is_empty(),
                KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
                _ => false,
            };
            if quit {
                return vec![Action::Quit];
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return vec![];
            }
        }

        let is_spinning = props.state.is_spinning();
        let wheel_props = LetterWheelProps {
            letter: props.state.letter(),
            is_spinning,
        };
        let button_props = SpinButtonProps { is_spinning };

        self.wheel
            .handle_event(event, wheel_props)
            .into_iter()
            .chain(self.button.handle_event(event, button_props))
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let is_spinning = state.is_spinning();

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" DinoDessert ")
            .title_style(Style::default().fg(Color::LightGreen).bold())
            .title_alignment(Alignment::Center);
        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(LetterWheel::HEIGHT),
            Constraint::Length(SlotDisplay::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(SpinButton::HEIGHT),
            Constraint::Length(ResultPanel::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        Header.render(frame, chunks[0], HeaderProps);

        self.wheel.render(
            frame,
            chunks[2],
            LetterWheelProps {
                letter: state.letter(),
                is_spinning,
            },
        );

        let [slots] = Layout::horizontal([Constraint::Max(Self::SLOTS_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(chunks[3]);
        SlotDisplay.render(
            frame,
            slots,
            SlotDisplayProps {
                display: &state.display,
                is_spinning,
            },
        );

        self.button
            .render(frame, chunks[5], SpinButtonProps { is_spinning });

        ResultPanel.render(
            frame,
            chunks[6],
            ResultPanelProps {
                final_result: state.final_result.as_deref(),
                is_spinning,
            },
        );

        Footer.render(
            frame,
            chunks[8],
            FooterProps {
                dinosaurs: state.names(NameKind::Dinosaur).len(),
                desserts: state.names(NameKind::Dessert).len(),
            },
        );

        HelpBar.render(frame, chunks[9], HelpBarProps);
    }
}
