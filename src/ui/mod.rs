pub mod app;
pub mod components;
pub mod layout;
pub mod state;
pub mod traits;
pub mod tui;
pub mod util;
