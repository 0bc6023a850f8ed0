use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::debug;

use crate::{
    model::Query,
    ui::{
        components::spinner,
        state::AppState,
        traits::{Action, Component},
    },
    util::{colors, text::break_rows},
};

const EMOTION_PLACEHOLDER: &str = "e.g., joy, sadness, excitement...";
const STORY_PLACEHOLDER: &str = "e.g., A melody woven from the lessons of wanderers and wise men...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Emotion,
    Story,
}

/// The "Describe Your Mood" form.
#[derive(Debug, Default)]
pub struct MoodForm {
    pub emotion: String,
    pub story: String,
    pub active: FormField,
    pub focused: bool,
    missing: Vec<FormField>,
}

impl MoodForm {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Default::default()
        }
    }

    pub const HEIGHT: u16 = 11;

    fn field_mut(&mut self) -> &mut String {
        match self.active {
            FormField::Emotion => &mut self.emotion,
            FormField::Story => &mut self.story,
        }
    }

    pub fn insert(&mut self, text: &str) {
        let field = self.active;
        self.field_mut().push_str(text);
        self.missing.retain(|f| *f != field);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Builds a query, or flags the blank fields and focuses the first one.
    pub fn submit(&mut self) -> Option<Query> {
        self.missing.clear();
        if self.emotion.trim().is_empty() {
            self.missing.push(FormField::Emotion);
        }
        if self.story.trim().is_empty() {
            self.missing.push(FormField::Story);
        }

        if let Some(first) = self.missing.first() {
            debug!(missing = ?self.missing, "mood form rejected");
            self.active = *first;
            return None;
        }

        Some(Query::new(self.emotion.clone(), self.story.clone()))
    }

    pub fn is_missing(&self, field: FormField) -> bool {
        self.missing.contains(&field)
    }

    fn input<'a>(
        &self,
        field: FormField,
        title: &'a str,
        value: &'a str,
        placeholder: &'a str,
        area: Rect,
    ) -> Paragraph<'a> {
        let active = self.focused && self.active == field;
        let border_color = if self.is_missing(field) {
            colors::WARNING
        } else if active {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };
        let caret = Span::styled("▏", Style::default().fg(colors::PRIMARY));

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
            .title(title);
        if self.is_missing(field) {
            block = block.title_bottom(Line::from(" required ").right_aligned());
        }

        if value.is_empty() {
            let mut spans = vec![Span::styled(placeholder, Style::default().fg(colors::NEUTRAL))];
            if active {
                spans.insert(0, caret);
            }
            return Paragraph::new(Line::from(spans))
                .wrap(Wrap { trim: false })
                .block(block);
        }

        // One column is kept free for the caret.
        let inner = block.inner(area);
        let mut lines: Vec<Line<'a>> = break_rows(value, usize::from(inner.width).saturating_sub(1))
            .into_iter()
            .map(Line::from)
            .collect();
        if active {
            if let Some(last) = lines.last_mut() {
                last.push_span(caret);
            }
        }

        // Keep the tail, where typing happens, in view.
        let scroll = lines.len().saturating_sub(usize::from(inner.height));
        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .block(block)
    }
}

impl Component for MoodForm {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::PRIMARY))
            .title(Line::from(" Describe Your Mood ").centered());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [emotion_area, story_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(
            self.input(
                FormField::Emotion,
                " Emotion ",
                &self.emotion,
                EMOTION_PLACEHOLDER,
                emotion_area,
            ),
            emotion_area,
        );
        f.render_widget(
            self.input(
                FormField::Story,
                " Describe the Story or Vibe ",
                &self.story,
                STORY_PLACEHOLDER,
                story_area,
            ),
            story_area,
        );

        let hint = if state.status.is_loading() {
            Line::from(vec![
                Span::raw(format!("{} ", spinner::frame())),
                Span::raw("Cooking your playlist..."),
            ])
        } else {
            Line::from(vec![
                Span::styled("[Enter] ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("Get Recommendations"),
            ])
        };
        f.render_widget(
            Paragraph::new(hint.centered()).style(Style::default().fg(colors::PRIMARY)),
            hint_area,
        );
    }

    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Enter => Some(match self.submit() {
                Some(query) => Action::Submit(query),
                None => Action::None,
            }),
            KeyCode::Tab => {
                match self.active {
                    FormField::Emotion => self.active = FormField::Story,
                    FormField::Story if !state.status.results().is_empty() => {
                        return Some(Action::FocusPlaylist);
                    }
                    FormField::Story => self.active = FormField::Emotion,
                }
                Some(Action::None)
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.active = match self.active {
                    FormField::Emotion => FormField::Story,
                    FormField::Story => FormField::Emotion,
                };
                Some(Action::None)
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c.encode_utf8(&mut [0; 4]));
                Some(Action::None)
            }
            KeyCode::Backspace => {
                self.backspace();
                Some(Action::None)
            }
            _ => None,
        }
    }
}
