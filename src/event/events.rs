use crate::{
    model::Query,
    ui::state::{RequestToken, UiState},
};

#[derive(Debug, Clone)]
pub enum Event {
    // Commands
    Recommend(Query),

    // Results
    Settled(RequestToken, UiState),
}
