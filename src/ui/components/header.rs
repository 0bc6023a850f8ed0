use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::util::colors;

const LEAD: &str = "Turn your emotions and words into personalized song recommendations. \
Describe your vibe and let the magic happen.";

pub struct Header;

impl Header {
    pub const HEIGHT: u16 = 4;
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "AI Playlist Generator",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(LEAD, Style::default().fg(colors::NEUTRAL))),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

pub struct Footer<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 2);
        for (key, label) in self.hints {
            spans.push(Span::styled(
                format!(" {key} "),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("{label}  "),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
