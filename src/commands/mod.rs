//! Command implementations

pub mod simple;
pub mod simulate;
pub mod suggest;

pub use simple::{Flow, handle_line, run_simple};
pub use simulate::{
    DEFAULT_MAX_ROUNDS, GameRecord, SimulationResult, play_game, run_simulation, summarize,
};
pub use suggest::{SuggestResult, run_suggest, split_clues};
