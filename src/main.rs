//! Wordle Assistant - CLI
//!
//! Narrows the candidate list from the clues of each guess and suggests
//! letter-frequency based next guesses.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_assistant::{
    commands::{DEFAULT_MAX_ROUNDS, run_simple, run_simulation, run_suggest},
    core::Word,
    output::{print_simulation_result, print_suggest_result},
    solver::{
        DEFAULT_SOLVED_THRESHOLD, GameSession, SessionConfig, Weighting, ZeroScorePolicy,
    },
    wordlists::{DEFAULT_ANSWERS_PATH, DEFAULT_BANK_PATH, load_initial_pool},
};

/// Words and suggestions shown per list unless `--limit` says otherwise
const DEFAULT_DISPLAY_LIMIT: usize = 10;

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle assistant that filters candidates from clues and suggests guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    answers: String,

    /// Guess bank used for suggestions: one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_BANK_PATH)]
    bank: String,

    /// Pool size at or below which a game counts as solved
    #[arg(short, long, global = true, default_value_t = DEFAULT_SOLVED_THRESHOLD)]
    threshold: usize,

    /// How many words and suggestions to display
    #[arg(short, long, global = true, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    limit: usize,

    /// Letter weighting: pool (default) or corpus
    #[arg(long, global = true, default_value = "pool")]
    weighting: String,

    /// Zero-score suggestions: keep (default) or drop
    #[arg(long, global = true, default_value = "keep")]
    zero_scores: String,

    /// Seed for random sampling
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based interactive mode (default)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Apply one line of clues and print the suggestions
    Suggest {
        /// Clues, e.g. "--A-E" "cnt"
        #[arg(required = true)]
        clues: Vec<String>,
    },

    /// Play against sampled targets and report how many rounds it takes
    Simulate {
        /// Number of targets to play
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Give up on a target after this many guesses
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            solved_threshold: self.threshold,
            weighting: Weighting::from_name(&self.weighting),
            zero_scores: ZeroScorePolicy::from_name(&self.zero_scores),
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
    }
}

/// Load the answer list and the guess bank
fn load_wordlists(answers_path: &str, bank_path: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    let answers = load_initial_pool(answers_path)?;
    if answers.is_empty() {
        bail!("{answers_path} contains no five-letter words");
    }
    let bank = load_initial_pool(bank_path)?;
    if bank.is_empty() {
        bail!("{bank_path} contains no five-letter words");
    }
    info!("{} answers, {} guess words", answers.len(), bank.len());
    Ok((answers, bank))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (answers, bank) = load_wordlists(&cli.answers, &cli.bank)?;
    let config = cli.session_config();
    let mut rng = cli.rng();

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            let mut session = GameSession::new(&answers, &bank, config);
            run_simple(&mut session, cli.limit, &mut rng)?;
        }
        Commands::Play => {
            use wordle_assistant::interactive::{App, run_tui};

            let session = GameSession::new(&answers, &bank, config);
            run_tui(App::new(session, cli.limit, rng))?;
        }
        Commands::Suggest { clues } => {
            let result = run_suggest(&answers, &bank, config, &clues);
            print_suggest_result(&result, cli.limit, &mut rng);
        }
        Commands::Simulate { count, max_rounds } => {
            println!("🎯 Simulating {count} games...");
            let result = run_simulation(&answers, &bank, config, count, max_rounds, &mut rng);
            print_simulation_result(&result);
        }
    }

    Ok(())
}
