use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;

use super::letter_wheel::letter_hotkey;
use super::{is_click_in, Component};
use crate::action::Action;

pub const IDLE_LABEL: &str = "Spin";
pub const SPINNING_LABEL: &str = "Spinning...";

/// Starts a spin; disabled while one is running
#[derive(Debug, Default)]
pub struct SpinButton {
    area: Rect,
}

pub struct SpinButtonProps {
    pub is_spinning: bool,
}

impl SpinButton {
    pub const HEIGHT: u16 = 3;
    const WIDTH: u16 = 17;

    pub fn new() -> Self {
        Self::default()
    }

    /// Where the button was last drawn.
    pub fn area(&self) -> Rect {
        self.area
    }
}

impl Component<Action> for SpinButton {
    type Props<'a> = SpinButtonProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let pressed = match event {
            EventKind::Key(key) => {
                letter_hotkey(key).is_none()
                    && matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s'))
            }
            EventKind::Mouse(_) => is_click_in(event, self.area),
            _ => false,
        };
        pressed.then_some(Action::SpinStart)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [button] = Layout::horizontal([Constraint::Length(Self::WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        self.area = button;

        let (label, style) = if props.is_spinning {
            (
                SPINNING_LABEL,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        } else {
            (IDLE_LABEL, Style::default().fg(Color::Black).bg(Color::LightYellow).bold())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style);
        let paragraph = Paragraph::new(Line::styled(label, style))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{click, click_in};
    use tui_dispatch::testing::*;

    fn handle(button: &mut SpinButton, event: EventKind) -> Vec<Action> {
        button
            .handle_event(&event, SpinButtonProps { is_spinning: false })
            .into_iter()
            .collect()
    }

    #[test]
    fn test_spin_keys() {
        let mut button = SpinButton::new();
        for k in ["space", "enter", "s"] {
            let actions = handle(&mut button, EventKind::Key(key(k)));
            assert_eq!(actions, vec![Action::SpinStart], "key {}", k);
        }
        handle(&mut button, EventKind::Key(key("q"))).assert_empty();
        // Shift+s jumps to the letter S instead
        handle(&mut button, EventKind::Key(key("shift+s"))).assert_empty();
    }

    #[test]
    fn test_click_on_button() {
        let mut render = RenderHarness::new(30, 3);
        let mut button = SpinButton::new();
        render.render_to_string_plain(|frame| {
            button.render(frame, frame.area(), SpinButtonProps { is_spinning: false })
        });

        let area = button.area();
        let actions = handle(&mut button, click_in(area));
        assert_eq!(actions, vec![Action::SpinStart]);
        handle(&mut button, click(0, 1)).assert_empty();
    }

    #[test]
    fn test_label_follows_status() {
        let mut render = RenderHarness::new(30, 3);
        let mut button = SpinButton::new();

        let idle = render.render_to_string_plain(|frame| {
            button.render(frame, frame.area(), SpinButtonProps { is_spinning: false })
        });
        assert!(idle.contains(IDLE_LABEL));
        assert!(!idle.contains(SPINNING_LABEL));

        let spinning = render.render_to_string_plain(|frame| {
            button.render(frame, frame.area(), SpinButtonProps { is_spinning: true })
        });
        assert!(spinning.contains(SPINNING_LABEL));
    }
}
