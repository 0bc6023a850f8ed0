use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::SongResult,
    ui::{
        state::AppState,
        traits::{Action, Component},
    },
    util::{colors, text::wrap},
};

const INDENT: &str = "     ";

/// Ranked song list with a single expandable lyrics preview.
#[derive(Debug, Default)]
pub struct Playlist {
    pub selected: usize,
    pub focused: bool,
    scroll: usize,
    hitboxes: Vec<(usize, Rect)>,
}

impl Playlist {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll = 0;
        self.hitboxes.clear();
    }

    /// Index of the entry drawn at the given terminal cell during the last frame.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        self.hitboxes
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(i, _)| *i)
    }

    fn entry_lines(
        rank: usize,
        song: &SongResult,
        expanded: bool,
        selected: bool,
        width: usize,
    ) -> Vec<Line<'_>> {
        let marker = if selected { "▶" } else { " " };
        let title_style = if selected {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let muted = Style::default().fg(colors::NEUTRAL);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(colors::PRIMARY)),
                Span::styled(
                    format!("{rank:>3} "),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::REVERSED),
                ),
                Span::raw(" "),
                Span::styled(song.song.as_str(), title_style),
            ]),
            Line::from(Span::styled(
                format!("{INDENT} {} • {} • {}", song.artists, song.genre, song.length),
                muted,
            )),
            Line::from(vec![
                Span::styled(format!("{INDENT} Album: "), muted.add_modifier(Modifier::BOLD)),
                Span::styled(song.album.as_str(), muted),
                Span::styled(" | Released: ", muted.add_modifier(Modifier::BOLD)),
                Span::styled(format!("{} yrs ago", song.released_label()), muted),
            ]),
        ];

        if expanded {
            lines.push(Line::from(Span::styled(
                format!("{INDENT} Lyrics Preview"),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )));
            let text_width = width.saturating_sub(INDENT.len() + 1);
            for row in wrap(&song.text, text_width) {
                lines.push(Line::from(format!("{INDENT} {row}")));
            }
        }

        lines.push(Line::default());
        lines
    }
}

impl Component for Playlist {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        self.hitboxes.clear();
        let songs = state.status.results();
        if songs.is_empty() {
            return;
        }
        self.selected = self.selected.min(songs.len() - 1);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(if self.focused {
                colors::SUCCESS
            } else {
                colors::NEUTRAL
            }))
            .title(
                Line::from(Span::styled(
                    " Your AI-Generated Playlist ",
                    Style::default()
                        .fg(colors::SUCCESS)
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let mut lines = Vec::new();
        let mut spans = Vec::with_capacity(songs.len());
        for (i, song) in songs.iter().enumerate() {
            let start = lines.len();
            lines.extend(Self::entry_lines(
                i + 1,
                song,
                state.expanded == Some(i),
                self.focused && i == self.selected,
                inner.width as usize,
            ));
            spans.push((start, lines.len()));
        }

        let height = inner.height as usize;
        let (sel_start, sel_end) = spans[self.selected];
        if sel_start < self.scroll {
            self.scroll = sel_start;
        } else if sel_end > self.scroll + height {
            self.scroll = (sel_end - height).min(sel_start);
        }

        for (i, (start, end)) in spans.iter().enumerate() {
            let top = (*start).max(self.scroll);
            let bottom = (*end).min(self.scroll + height);
            if top >= bottom {
                continue;
            }
            self.hitboxes.push((
                i,
                Rect::new(
                    inner.x,
                    inner.y + (top - self.scroll) as u16,
                    inner.width,
                    (bottom - top) as u16,
                ),
            ));
        }

        f.render_widget(
            Paragraph::new(lines).scroll((self.scroll as u16, 0)),
            inner,
        );
    }

    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<Action> {
        let len = state.status.results().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Some(Action::None)
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                Some(Action::None)
            }
            KeyCode::Char('G') => {
                self.selected = len.saturating_sub(1);
                Some(Action::None)
            }
            KeyCode::Enter | KeyCode::Char(' ') if len > 0 => Some(Action::Toggle(self.selected)),
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => {
                Some(Action::FocusForm)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;
    use crate::{model::Released, ui::state::UiState};

    fn song(title: &str, lyrics: &str) -> SongResult {
        SongResult {
            song: title.into(),
            artists: "Artist".into(),
            genre: "pop".into(),
            length: "03:00".into(),
            album: "Album".into(),
            released: Some(Released::Number(4.into())),
            text: lyrics.into(),
        }
    }

    fn loaded(songs: Vec<SongResult>) -> AppState {
        let mut state = AppState::default();
        let token = state.begin_request();
        state.settle(token, UiState::Success(songs));
        state
    }

    fn draw(playlist: &mut Playlist, state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                playlist.render(f, area, state);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    fn row_of(rows: &[String], needle: &str) -> Option<usize> {
        rows.iter().position(|r| r.contains(needle))
    }

    #[test]
    fn renders_in_backend_order_with_ranks() {
        let state = loaded(vec![song("Alpha", ""), song("Bravo", "")]);
        let rows = draw(&mut Playlist::default(), &state, 60, 20);

        let alpha = row_of(&rows, "Alpha").unwrap();
        let bravo = row_of(&rows, "Bravo").unwrap();
        assert!(alpha < bravo);
        assert!(rows[alpha].contains("  1 "));
        assert!(rows[bravo].contains("  2 "));
        assert!(rows.iter().any(|r| r.contains("Artist • pop • 03:00")));
        assert!(rows.iter().any(|r| r.contains("Released: 4 yrs ago")));
    }

    #[test]
    fn lyrics_only_show_for_expanded_entry() {
        let mut state = loaded(vec![song("Alpha", "first verse"), song("Bravo", "second verse")]);
        let mut playlist = Playlist::default();

        let rows = draw(&mut playlist, &state, 60, 20);
        assert!(row_of(&rows, "verse").is_none());

        state.toggle(1);
        let rows = draw(&mut playlist, &state, 60, 20);
        assert!(row_of(&rows, "second verse").is_some());
        assert!(row_of(&rows, "first verse").is_none());
        assert!(row_of(&rows, "Lyrics Preview").unwrap() > row_of(&rows, "Bravo").unwrap());
    }

    #[test]
    fn nothing_is_drawn_without_results() {
        let mut state = AppState::default();
        state.begin_request();
        let mut playlist = Playlist::default();
        let rows = draw(&mut playlist, &state, 40, 6);
        assert!(rows.iter().all(|r| r.trim().is_empty()));
        assert_eq!(playlist.entry_at(5, 2), None);
    }

    #[test]
    fn clicks_resolve_to_entries() {
        let state = loaded(vec![song("Alpha", ""), song("Bravo", "")]);
        let mut playlist = Playlist::default();
        let rows = draw(&mut playlist, &state, 60, 20);

        let alpha = row_of(&rows, "Alpha").unwrap() as u16;
        let bravo = row_of(&rows, "Bravo").unwrap() as u16;
        assert_eq!(playlist.entry_at(10, alpha), Some(0));
        assert_eq!(playlist.entry_at(10, alpha + 2), Some(0));
        assert_eq!(playlist.entry_at(10, bravo), Some(1));
        assert_eq!(playlist.entry_at(0, bravo), None);
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        let songs = (1..=10).map(|i| song(&format!("Song{i:02}"), "")).collect();
        let state = loaded(songs);
        let mut playlist = Playlist {
            focused: true,
            ..Default::default()
        };

        playlist.handle_input(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE), &state);
        let rows = draw(&mut playlist, &state, 60, 10);
        assert!(row_of(&rows, "Song10").is_some());
        assert!(row_of(&rows, "Song01").is_none());
    }

    #[test]
    fn enter_toggles_selected_entry() {
        let state = loaded(vec![song("Alpha", ""), song("Bravo", "")]);
        let mut playlist = Playlist::default();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        playlist.handle_input(down, &state);
        playlist.handle_input(down, &state);
        assert_eq!(playlist.handle_input(enter, &state), Some(Action::Toggle(1)));
        assert_eq!(
            playlist.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &state),
            Some(Action::FocusForm)
        );
    }
}
