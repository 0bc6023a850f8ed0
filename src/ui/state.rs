use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::{
    error::ApiError,
    http::{Envelope, Payload},
    model::{ResultSet, SongResult},
};

pub const NETWORK_ERROR: &str = "Network error. Please check that your backend is reachable.";
pub const NO_MATCHES: &str = "No matches found. Try again.";
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format from server.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value")]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(ResultSet),
    Empty(String),
    Error(String),
}

impl UiState {
    /// Maps a settled request onto the state it should leave the screen in.
    pub fn from_response(response: Result<Payload, ApiError>) -> Self {
        let payload = match response {
            Ok(payload) => payload,
            Err(e) => {
                error!("recommendation request failed: {e}");
                return UiState::Error(NETWORK_ERROR.to_string());
            }
        };

        let state = match payload {
            Payload::Songs(songs) | Payload::Envelope(Envelope::Success { data: songs }) => {
                if songs.is_empty() {
                    UiState::Empty(NO_MATCHES.to_string())
                } else {
                    UiState::Success(songs)
                }
            }
            Payload::Envelope(Envelope::NoMatches { message }) => {
                UiState::Empty(message_or_fallback(message))
            }
            Payload::Envelope(Envelope::Error { message }) => {
                UiState::Error(message_or_fallback(message))
            }
            Payload::Unrecognized(body) => {
                warn!(%body, "unexpected payload from recommendation backend");
                UiState::Error(UNEXPECTED_FORMAT.to_string())
            }
        };

        info!(outcome = state.label(), "recommendation request settled");
        state
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Success(_) => "success",
            UiState::Empty(_) => "empty",
            UiState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn results(&self) -> &[SongResult] {
        match self {
            UiState::Success(songs) => songs,
            _ => &[],
        }
    }

    /// Text for the warning banner, if the last request produced one.
    pub fn message(&self) -> Option<&str> {
        match self {
            UiState::Empty(msg) | UiState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

fn message_or_fallback(message: Option<String>) -> String {
    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| NO_MATCHES.to_string())
}

/// Identifies one in-flight request; only the newest one may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, Serialize)]
pub struct AppState {
    pub status: UiState,
    pub expanded: Option<usize>,
    pub generation: u64,
}

impl AppState {
    pub fn begin_request(&mut self) -> RequestToken {
        self.generation += 1;
        self.status = UiState::Loading;
        self.expanded = None;
        RequestToken(self.generation)
    }

    /// Applies `status` if `token` belongs to the latest request. Returns
    /// whether the state changed.
    pub fn settle(&mut self, token: RequestToken, status: UiState) -> bool {
        if token.0 != self.generation {
            debug!(
                stale = token.0,
                current = self.generation,
                "discarding stale recommendation response"
            );
            return false;
        }
        self.status = status;
        self.expanded = None;
        true
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.status.results().len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs(titles: &[&str]) -> ResultSet {
        titles
            .iter()
            .map(|t| SongResult {
                song: t.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn loaded(titles: &[&str]) -> AppState {
        let mut state = AppState::default();
        let token = state.begin_request();
        state.settle(token, UiState::Success(songs(titles)));
        state
    }

    #[test]
    fn songs_and_success_envelope_settle_identically() {
        let bare = UiState::from_response(Ok(Payload::Songs(songs(&["A", "B"]))));
        let wrapped = UiState::from_response(Ok(Payload::Envelope(Envelope::Success {
            data: songs(&["A", "B"]),
        })));
        assert_eq!(bare, wrapped);
        assert_eq!(bare.results()[0].song, "A");
        assert_eq!(bare.results()[1].song, "B");
        assert_eq!(bare.message(), None);
    }

    #[test]
    fn empty_result_set_is_empty_state() {
        let state = UiState::from_response(Ok(Payload::Songs(Vec::new())));
        assert_eq!(state, UiState::Empty(NO_MATCHES.into()));
    }

    #[test]
    fn no_matches_uses_backend_message_or_fallback() {
        let state = UiState::from_response(Ok(Payload::Envelope(Envelope::NoMatches {
            message: Some("none found".into()),
        })));
        assert_eq!(state.message(), Some("none found"));
        assert!(state.results().is_empty());

        let state = UiState::from_response(Ok(Payload::Envelope(Envelope::NoMatches {
            message: None,
        })));
        assert_eq!(state.message(), Some(NO_MATCHES));

        let state = UiState::from_response(Ok(Payload::Envelope(Envelope::NoMatches {
            message: Some(String::new()),
        })));
        assert_eq!(state.message(), Some(NO_MATCHES));
    }

    #[test]
    fn backend_error_status_is_error_state() {
        let state = UiState::from_response(Ok(Payload::Envelope(Envelope::Error {
            message: Some("model offline".into()),
        })));
        assert_eq!(state, UiState::Error("model offline".into()));

        let state = UiState::from_response(Ok(Payload::Envelope(Envelope::Error { message: None })));
        assert_eq!(state, UiState::Error(NO_MATCHES.into()));
    }

    #[test]
    fn unrecognized_payload_is_unexpected_format() {
        let state = UiState::from_response(Ok(Payload::Unrecognized("{}".into())));
        assert_eq!(state, UiState::Error(UNEXPECTED_FORMAT.into()));
    }

    #[test]
    fn interrupted_request_is_network_error() {
        let state = UiState::from_response(Err(ApiError::Interrupted));
        assert_eq!(state, UiState::Error(NETWORK_ERROR.into()));
        assert!(!state.is_loading());
    }

    #[test]
    fn toggle_is_mutually_exclusive() {
        let mut state = loaded(&["A", "B", "C"]);

        state.toggle(0);
        assert_eq!(state.expanded, Some(0));
        state.toggle(2);
        assert_eq!(state.expanded, Some(2));
        state.toggle(2);
        assert_eq!(state.expanded, None);

        state.toggle(1);
        state.toggle(1);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn toggle_ignores_out_of_range_and_non_success() {
        let mut state = loaded(&["A"]);
        state.toggle(5);
        assert_eq!(state.expanded, None);

        let mut state = AppState::default();
        state.toggle(0);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn begin_request_resets_every_terminal_state() {
        for terminal in [
            UiState::Success(songs(&["A"])),
            UiState::Empty("none found".into()),
            UiState::Error(NETWORK_ERROR.into()),
        ] {
            let mut state = AppState::default();
            let token = state.begin_request();
            state.settle(token, terminal);
            state.toggle(0);

            state.begin_request();
            assert_eq!(state.status, UiState::Loading);
            assert_eq!(state.expanded, None);
            assert_eq!(state.status.message(), None);
            assert!(state.status.results().is_empty());
        }
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = AppState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(state.settle(second, UiState::Success(songs(&["new"]))));
        assert!(!state.settle(first, UiState::Error(NETWORK_ERROR.into())));
        assert_eq!(state.status.results()[0].song, "new");
    }

    #[test]
    fn state_serializes_with_mode_tag() {
        let state = loaded(&["A"]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"]["mode"], "Success");
        assert_eq!(json["status"]["value"][0]["song"], "A");
        assert_eq!(json["generation"], 1);
        assert!(json["expanded"].is_null());
    }
}
