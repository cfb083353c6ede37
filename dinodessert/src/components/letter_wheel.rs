//! Letter wheel: ▲ / letter / ▼
//!
//! ▲ steps back through the alphabet and ▼ steps forward; shift plus a
//! letter jumps straight to it. Both controls dim while the reels spin; the
//! intents they emit are ignored by the reducer in that state anyway.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;

use super::{is_click_in, Component};
use crate::action::{Action, Direction};
use crate::catalog::Letter;

pub const PREVIOUS_ICON: &str = "▲";
pub const NEXT_ICON: &str = "▼";

/// Remembers where its controls were drawn for mouse hit testing.
#[derive(Debug, Default)]
pub struct LetterWheel {
    previous_area: Rect,
    next_area: Rect,
}

pub struct LetterWheelProps {
    pub letter: Letter,
    pub is_spinning: bool,
}

impl LetterWheel {
    pub const HEIGHT: u16 = 5;
    const WIDTH: u16 = 7;

    pub fn new() -> Self {
        Self::default()
    }

    /// Where ▲ was last drawn.
    pub fn previous_area(&self) -> Rect {
        self.previous_area
    }

    /// Where ▼ was last drawn.
    pub fn next_area(&self) -> Rect {
        self.next_area
    }
}

/// Shift+letter (or an uppercase letter) names a letter to jump to.
pub fn letter_hotkey(key: &KeyEvent) -> Option<Letter> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() || key.modifiers.contains(KeyModifiers::SHIFT) => {
            Letter::new(c).ok()
        }
        _ => None,
    }
}

impl Component<Action> for LetterWheel {
    type Props<'a> = LetterWheelProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match event {
            EventKind::Key(key) => {
                if let Some(letter) = letter_hotkey(key) {
                    return Some(Action::LetterSelect(letter));
                }
                let direction = match key.code {
                    KeyCode::Up | KeyCode::Char('k') => Some(Direction::Previous),
                    KeyCode::Down | KeyCode::Char('j') => Some(Direction::Next),
                    _ => None,
                };
                direction.map(Action::LetterChange)
            }
            EventKind::Mouse(_) if is_click_in(event, self.previous_area) => {
                Some(Action::LetterChange(Direction::Previous))
            }
            EventKind::Mouse(_) if is_click_in(event, self.next_area) => {
                Some(Action::LetterChange(Direction::Next))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [column] = Layout::horizontal([Constraint::Length(Self::WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(column);

        self.previous_area = rows[0];
        self.next_area = rows[2];

        let control_style = if props.is_spinning {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Cyan).bold()
        };

        frame.render_widget(
            Paragraph::new(Line::styled(PREVIOUS_ICON, control_style).centered()),
            rows[0],
        );

        let window = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::LightGreen));
        let letter = Paragraph::new(Line::styled(
            props.letter.to_string(),
            Style::default().fg(Color::White).bold(),
        ))
        .alignment(Alignment::Center)
        .block(window);
        frame.render_widget(letter, rows[1]);

        frame.render_widget(
            Paragraph::new(Line::styled(NEXT_ICON, control_style).centered()),
            rows[2],
        );
    }
}
