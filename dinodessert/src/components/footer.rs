use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

/// Name counts for the active letter
pub struct Footer;

pub struct FooterProps {
    pub dinosaurs: usize,
    pub desserts: usize,
}

impl Component<Action> for Footer {
    type Props<'a> = FooterProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let pill = Style::default().fg(Color::Black).bg(Color::Rgb(170, 200, 150));
        let line = Line::from(vec![
            Span::styled(format!(" {} dinos ready ", props.dinosaurs), pill),
            Span::raw("  "),
            Span::styled(format!(" {} treats tasty ", props.desserts), pill),
        ])
        .centered();
        frame.render_widget(Paragraph::new(line), area);
    }
}
