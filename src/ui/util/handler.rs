use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::{App, Pane},
        components::form::FormField,
        traits::{Action, Component},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        if Self::drain(app) {
            should_render = true;
        }

        Ok(should_render)
    }

    /// Applies every queued app event. Returns whether anything was handled.
    pub fn drain(app: &mut App) -> bool {
        let mut handled = false;
        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            handled = true;
        }
        handled
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Paste(text) => Self::handle_paste(app, &text),
            TerminalEvent::Tick => {
                return Ok(app.has_focus && app.state.status.is_loading());
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::Recommend(query) => app.submit(query),
            Event::Settled(token, status) => {
                if app.state.settle(token, status) {
                    app.playlist.reset();
                }
            }
        }
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if let KeyCode::Char('c') = evt.code {
            if evt.modifiers.contains(KeyModifiers::CONTROL) {
                Self::dispatch_action(app, Action::Quit);
                return;
            }
        }

        let action = match app.pane {
            Pane::Form => app.form.handle_input(evt, &app.state),
            Pane::Playlist => app.playlist.handle_input(evt, &app.state),
        };

        if let Some(action) = action {
            Self::dispatch_action(app, action);
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Submit(query) => {
                let _ = app.event_tx.send(Event::Recommend(query));
            }
            Action::Toggle(index) => app.state.toggle(index),
            Action::FocusForm => {
                app.form.active = FormField::Emotion;
                app.focus(Pane::Form);
            }
            Action::FocusPlaylist => app.focus(Pane::Playlist),
            Action::None => {}
        }
    }

    pub fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        match evt.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = app.playlist.entry_at(evt.column, evt.row) {
                    debug!(index, "playlist entry clicked");
                    app.playlist.selected = index;
                    app.focus(Pane::Playlist);
                    Self::dispatch_action(app, Action::Toggle(index));
                }
            }
            MouseEventKind::ScrollDown if app.pane == Pane::Playlist => {
                Self::handle_key_event(app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
            }
            MouseEventKind::ScrollUp if app.pane == Pane::Playlist => {
                Self::handle_key_event(app, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
            }
            _ => {}
        }
    }

    pub fn handle_paste(app: &mut App, text: &str) {
        if app.pane != Pane::Form {
            return;
        }
        let text = match app.form.active {
            FormField::Emotion => text.split_whitespace().collect::<Vec<_>>().join(" "),
            FormField::Story => text.replace("\r\n", "\n"),
        };
        app.form.insert(&text);
    }
}
