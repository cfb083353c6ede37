//! The two reels
//!
//! Each value sits in its own bordered window so screen readers and log
//! scrapers can pick the dinosaur and dessert out separately.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::catalog::NameKind;
use crate::state::DisplayPair;

pub struct SlotDisplay;

pub struct SlotDisplayProps<'a> {
    pub display: &'a DisplayPair,
    pub is_spinning: bool,
}

impl SlotDisplay {
    pub const HEIGHT: u16 = 3;
}

impl Component<Action> for SlotDisplay {
    type Props<'a> = SlotDisplayProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

        render_window(
            frame,
            chunks[0],
            NameKind::Dinosaur,
            &props.display.dinosaur,
            props.is_spinning,
        );

        let plus = Line::styled("+", Style::default().fg(Color::White).bold()).centered();
        let plus_area = Rect {
            y: chunks[1].y + chunks[1].height / 2,
            height: 1.min(chunks[1].height),
            ..chunks[1]
        };
        frame.render_widget(Paragraph::new(plus), plus_area);

        render_window(
            frame,
            chunks[2],
            NameKind::Dessert,
            &props.display.dessert,
            props.is_spinning,
        );
    }
}

fn render_window(frame: &mut Frame, area: Rect, kind: NameKind, value: &str, spinning: bool) {
    let border_style = if spinning {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Rgb(80, 80, 100))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", kind.label()))
        .title_style(Style::default().fg(Color::Cyan))
        .title_alignment(Alignment::Center);

    let value = Paragraph::new(Line::styled(value, Style::default().fg(Color::White).bold()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(value, area);
}
