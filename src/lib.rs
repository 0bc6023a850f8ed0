pub mod config;
pub mod error;
pub mod event;
pub mod http;
pub mod model;
pub mod ui;
pub mod util;
