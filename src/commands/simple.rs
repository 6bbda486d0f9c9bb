//! Simple interactive CLI mode
//!
//! Line-based read loop without TUI: one line of clues per guess.

use super::suggest::split_clues;
use crate::core::{Input, parse_input};
use crate::output::{print_info, print_new_game, print_outcome, print_rejected, print_welcome};
use crate::solver::{GameSession, RoundOutcome};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Handle one line of user input
///
/// Rejected clues are reported and skipped; the valid ones on the same line
/// still make up the round. A line with no valid clue leaves the game as is.
pub fn handle_line<R: Rng + ?Sized>(
    session: &mut GameSession,
    line: &str,
    limit: usize,
    rng: &mut R,
) -> Flow {
    match parse_input(line) {
        Input::Exit => Flow::Exit,
        Input::NewGame => {
            session.new_game();
            print_new_game(session.opening(), limit);
            Flow::Continue
        }
        Input::Clues(raw) => {
            let (clues, rejected) = split_clues(raw);
            for (token, error) in &rejected {
                print_rejected(token, error);
            }

            if clues.is_empty() {
                if rejected.is_empty() {
                    print_info("Enter at least one clue, 1 for a new game or 2 to exit.");
                }
                return Flow::Continue;
            }

            let outcome = session.apply_round(&clues);
            print_outcome(&outcome, limit, rng);
            if matches!(outcome, RoundOutcome::Exhausted { .. }) {
                print_new_game(session.opening(), limit);
            }
            Flow::Continue
        }
    }
}

/// Run the simple interactive CLI mode until exit or end of input
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_simple<R: Rng + ?Sized>(
    session: &mut GameSession,
    limit: usize,
    rng: &mut R,
) -> io::Result<()> {
    print_welcome(session.total_words(), session.working_bank().len());
    print_new_game(session.opening(), limit);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Clues: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if handle_line(session, &line, limit, rng) == Flow::Exit {
            break;
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
