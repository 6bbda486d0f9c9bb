//! Terminal output formatting
//!
//! Coloured rendering of pools, suggestions and notices. The solver never
//! formats anything itself.

pub mod display;
pub mod formatters;

pub use display::{
    print_error, print_info, print_new_game, print_opening, print_outcome, print_rejected,
    print_simulation_result, print_suggest_result, print_welcome,
};
