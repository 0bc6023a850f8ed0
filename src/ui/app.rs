use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{error, info};

use crate::{
    error::ApiError,
    event::events::Event,
    http::Recommender,
    model::Query,
    ui::{
        components::{form::MoodForm, playlist::Playlist},
        layout::AppLayout,
        state::{AppState, UiState},
    },
};

use super::{tui, util::handler::EventHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Form,
    Playlist,
}

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<dyn Recommender>,
    pub state: AppState,
    pub form: MoodForm,
    pub playlist: Playlist,
    pub pane: Pane,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: Arc<dyn Recommender>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            api,
            state: AppState::default(),
            form: MoodForm::new(),
            playlist: Playlist::default(),
            pane: Pane::Form,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true).paste(true);
        tui.enter()?;

        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    pub(crate) fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    pub fn focus(&mut self, pane: Pane) {
        self.pane = pane;
        self.form.focused = pane == Pane::Form;
        self.playlist.focused = pane == Pane::Playlist;
    }

    /// Starts a recommendation request. The screen is reset right away and the
    /// outcome arrives later as [`Event::Settled`].
    pub fn submit(&mut self, query: Query) {
        let token = self.state.begin_request();
        self.playlist.reset();
        self.focus(Pane::Form);

        info!(
            emotion_len = query.emotion.len(),
            text_len = query.text.len(),
            generation = self.state.generation,
            "submitting mood query"
        );

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let request = tokio::spawn(async move { api.recommend(&query).await });
            let response = request.await.unwrap_or_else(|e| {
                error!("recommendation task failed: {e}");
                Err(ApiError::Interrupted)
            });
            let _ = tx
                .send_async(Event::Settled(token, UiState::from_response(response)))
                .await;
        });
    }
}
