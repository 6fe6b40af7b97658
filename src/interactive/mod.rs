//! Full-screen terminal front end

mod app;
mod rendering;

pub use app::{Action, App, map_key, run_tui};
