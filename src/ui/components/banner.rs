use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    ui::{components::spinner, state::UiState},
    util::colors,
};

pub const COOKING: &str = "We are cooking up your perfect playlist... Hold tight!";

/// The single status box shown between the form and the playlist.
pub enum Banner<'a> {
    Cooking,
    Warning(&'a str),
}

impl<'a> Banner<'a> {
    pub fn for_state(state: &'a UiState) -> Option<Self> {
        if state.is_loading() {
            return Some(Banner::Cooking);
        }
        state.message().map(Banner::Warning)
    }

    pub const HEIGHT: u16 = 3;
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (color, line) = match self {
            Banner::Cooking => (
                colors::INFO,
                Line::from(vec![
                    Span::raw(format!("{} ", spinner::frame())),
                    Span::raw(COOKING),
                ]),
            ),
            Banner::Warning(message) => (
                colors::WARNING,
                Line::from(Span::styled(
                    message,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ),
        };

        Paragraph::new(line)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SongResult;

    fn rendered(banner: Banner) -> String {
        let area = Rect::new(0, 0, 70, Banner::HEIGHT);
        let mut buf = Buffer::empty(area);
        banner.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn picks_banner_from_state() {
        assert!(Banner::for_state(&UiState::Idle).is_none());
        assert!(Banner::for_state(&UiState::Success(vec![SongResult::default()])).is_none());
        assert!(matches!(
            Banner::for_state(&UiState::Loading),
            Some(Banner::Cooking)
        ));
        assert!(matches!(
            Banner::for_state(&UiState::Empty("none found".into())),
            Some(Banner::Warning("none found"))
        ));
    }

    #[test]
    fn warning_shows_message_verbatim() {
        let text = rendered(Banner::Warning("none found"));
        assert!(text.contains("none found"));
    }

    #[test]
    fn cooking_banner_says_so() {
        let text = rendered(Banner::Cooking);
        assert!(text.contains("cooking up your perfect playlist"));
    }
}
