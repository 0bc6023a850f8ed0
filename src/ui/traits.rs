use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{model::Query, ui::state::AppState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Submit(Query),
    Toggle(usize),
    FocusForm,
    FocusPlaylist,
    None,
}

pub trait Component: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState);
    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<Action>;
}
