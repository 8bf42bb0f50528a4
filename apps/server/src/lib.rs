pub mod api;
pub mod config;
pub mod dispatch;
pub mod envelope;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
