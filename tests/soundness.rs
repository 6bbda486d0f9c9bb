//! Feedback synthesised from a known target must never eliminate it

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use wordle_assistant::core::{Feedback, Input, Word, parse_input};
use wordle_assistant::solver::{
    GameSession, RoundOutcome, SessionConfig, apply_round_feedback, filter_gray,
};

const WORDS: &[&str] = &[
    "aback", "abbey", "abide", "adore", "alley", "allay", "apple", "arise", "baker", "belle",
    "berry", "boxer", "civic", "crane", "creep", "crepe", "eerie", "emcee", "error", "fizzy",
    "geese", "grape", "guess", "igloo", "kayak", "lemon", "level", "llama", "mamma", "mango",
    "melon", "mummy", "nanny", "otter", "pizza", "queue", "radar", "robot", "sassy", "sheep",
    "slate", "sneer", "speed", "steel", "taker", "tepee", "tweet", "vivid", "waker", "zesty",
];

fn words() -> Vec<Word> {
    WORDS.iter().map(|w| Word::new(*w).unwrap()).collect()
}

#[test]
fn target_survives_every_round() {
    let all = words();
    let config = SessionConfig {
        solved_threshold: 0,
        ..SessionConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let target = all.choose(&mut rng).unwrap();
        let mut session = GameSession::new(&all, &all, config);

        for _ in 0..4 {
            let guess = all.choose(&mut rng).unwrap();
            let feedback = Feedback::calculate(guess, target);
            if feedback.is_solved() {
                break;
            }

            let outcome = session.apply_round(&feedback.to_clues());
            assert!(
                !matches!(outcome, RoundOutcome::Exhausted { .. }),
                "{guess} -> {target} ({}) emptied the pool",
                feedback.to_input()
            );
            assert!(
                session.pool().contains(&target),
                "{guess} -> {target} ({}) removed the target",
                feedback.to_input()
            );
            assert!(
                session
                    .pool()
                    .iter()
                    .all(|w| session.constraints().admits(w))
            );
        }
    }
}

#[test]
fn synthesised_input_line_parses_back() {
    let all = words();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let target = all.choose(&mut rng).unwrap();
        let guess = all.choose(&mut rng).unwrap();
        let feedback = Feedback::calculate(guess, target);

        let Input::Clues(raw) = parse_input(&feedback.to_input()) else {
            panic!("{} parsed as a command", feedback.to_input());
        };
        let parsed: Vec<_> = raw.into_iter().map(|r| r.parsed.unwrap()).collect();
        assert_eq!(parsed, feedback.to_clues());
    }
}

#[test]
fn positional_feedback_alone_keeps_target() {
    let all = words();
    let pool: Vec<&Word> = all.iter().collect();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let target = all.choose(&mut rng).unwrap();
        let guess = all.choose(&mut rng).unwrap();
        let feedback = Feedback::calculate(guess, target);

        let Some(token) = feedback
            .to_input()
            .split(", ")
            .next()
            .map(str::to_string)
        else {
            continue;
        };
        if let Ok((survivors, _)) = apply_round_feedback(&pool, &token) {
            assert!(survivors.contains(&target), "{token} removed {target}");
        }
    }
}

#[test]
fn gray_letters_absent_from_target_are_safe() {
    let all = words();
    let pool: Vec<&Word> = all.iter().collect();
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..200 {
        let target = all.choose(&mut rng).unwrap();
        let guess = all.choose(&mut rng).unwrap();
        let feedback = Feedback::calculate(guess, target);

        let absent = feedback
            .gray_letters()
            .iter()
            .filter(|&l| !target.has_letter(l))
            .collect();
        let survivors = filter_gray(&pool, absent);
        assert!(survivors.contains(&target));
    }
}
