use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;

pub const IDLE_HINT: &str = "Pick a letter and spin to get started!";
pub const SPINNING_HINT: &str = "Matching munchies in motion...";

/// The settled name, or a hint when there is none
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub final_result: Option<&'a str>,
    pub is_spinning: bool,
}

impl ResultPanel {
    pub const HEIGHT: u16 = 2;
}

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let line = match (props.final_result, props.is_spinning) {
            (_, true) => Line::styled(SPINNING_HINT, Style::default().fg(Color::Yellow).italic()),
            (Some(name), false) => {
                Line::styled(name, Style::default().fg(Color::LightMagenta).bold())
            }
            (None, false) => Line::styled(IDLE_HINT, Style::default().fg(Color::DarkGray)),
        };
        let paragraph = Paragraph::new(line.centered()).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
