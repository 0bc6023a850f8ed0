use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
};

use crate::{
    ui::{
        app::{App, Pane},
        components::{
            banner::Banner,
            form::MoodForm,
            header::{Footer, Header},
        },
        traits::Component,
    },
    util::colors,
};

const MAX_WIDTH: u16 = 100;

const FORM_HINTS: &[(&str, &str)] = &[
    ("Enter", "submit"),
    ("Tab", "next field"),
    ("Ctrl+C", "quit"),
];
const PLAYLIST_HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("Enter", "lyrics"),
    ("Esc", "back to form"),
    ("Ctrl+C", "quit"),
];

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let width = area.width.min(MAX_WIDTH);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let banner = Banner::for_state(&self.app.state.status);
        let banner_height = if banner.is_some() { Banner::HEIGHT } else { 0 };

        let [header_area, form_area, banner_area, playlist_area, footer_area] =
            Layout::vertical([
                Constraint::Length(Header::HEIGHT),
                Constraint::Length(MoodForm::HEIGHT),
                Constraint::Length(banner_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(column);

        f.render_widget(Header, header_area);
        self.app.form.render(f, form_area, &self.app.state);
        if let Some(banner) = banner {
            f.render_widget(banner, banner_area);
        }
        self.app.playlist.render(f, playlist_area, &self.app.state);

        let hints = match self.app.pane {
            Pane::Form => FORM_HINTS,
            Pane::Playlist => PLAYLIST_HINTS,
        };
        f.render_widget(Footer::new(hints), footer_area);
    }
}
