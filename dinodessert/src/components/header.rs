use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub const TITLE: &str = "DinoDessert Name Generator";
pub const SUBTITLE: &str = "Spin the reels to find a roaringly sweet name!";

pub struct Header;

pub struct HeaderProps;

impl Header {
    pub const HEIGHT: u16 = 2;
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let title = Line::styled(TITLE, Style::default().fg(Color::LightGreen).bold()).centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let subtitle = Line::styled(SUBTITLE, Style::default().fg(Color::DarkGray)).centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}
