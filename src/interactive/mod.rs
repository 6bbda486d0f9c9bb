//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, Statistics, run_tui};
