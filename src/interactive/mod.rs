//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, next_length, run_tui};
