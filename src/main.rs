//! Number Guessing Game - guess a number from 1 to 100 in five attempts
//!
//! Single-session, in-memory, self-contained terminal application.
//! Score accumulates across rounds; the high score lasts until exit.

mod cli;
mod game;

use clap::Parser;
use cli::display::Display;
use cli::input::{InputAction, InputHandler};
use game::{
    GameConfig, GameSession, GuessError, GuessEvaluator, Outcome, RandomSecret, SecretPolicy,
    SecretSource, SessionStats,
};
use log::{debug, info};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

/// Log file used by `--debug` when `--log-file` is not given
const DEFAULT_LOG_FILE: &str = "number-guess.log";

#[derive(Parser, Debug)]
#[command(name = "Number Guessing Game")]
#[command(about = "Guess the secret number, score points for attempts you have left")]
struct Args {
    /// Keep one secret number per round instead of drawing one per guess
    #[arg(long)]
    secret_per_round: bool,

    /// Enable debug logging (written to the log file, never to the game screen)
    #[arg(short, long)]
    debug: bool,

    /// Write logs to this file [default with --debug: number-guess.log]
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn policy(&self) -> SecretPolicy {
        if self.secret_per_round {
            SecretPolicy::PerRound
        } else {
            SecretPolicy::PerGuess
        }
    }

    /// Where logs go; None keeps the stderr default
    fn log_target(&self) -> Option<PathBuf> {
        match (&self.log_file, self.debug) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
            (None, false) => None,
        }
    }
}

/// Debug output reveals the secret, so it goes to a file instead of the
/// raw-mode screen
fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::builder();
    builder.filter_level(level).parse_default_env();
    if let Some(path) = args.log_target() {
        let file = File::create(&path)
            .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Redraw the whole screen
fn render(
    display: &Display,
    session: &GameSession,
    user_input: &str,
    last: Option<&Result<Outcome, GuessError>>,
) -> Result<(), Box<dyn Error>> {
    display.clear()?;
    display.show_title()?;
    if let Some(result) = last {
        display.show_feedback(result)?;
    }
    display.show_scores(session)?;
    display.show_help()?;
    // Last so the cursor rests after the typed guess
    display.show_input(user_input)?;
    Ok(())
}

/// Event loop: read keys, evaluate submitted guesses, redraw on change
fn run<S: SecretSource>(
    display: &Display,
    evaluator: &mut GuessEvaluator<S>,
    session: &mut GameSession,
    stats: &mut SessionStats,
) -> Result<(), Box<dyn Error>> {
    let input = InputHandler::new();
    let mut user_input = String::new();
    let mut last: Option<Result<Outcome, GuessError>> = None;

    render(display, session, &user_input, last.as_ref())?;

    loop {
        let Some(key) = input.read_key()? else {
            continue;
        };

        match InputHandler::apply(&key, &mut user_input) {
            InputAction::Quit => break,
            InputAction::Ignored => continue,
            InputAction::Edited => {}
            InputAction::Submit => {
                let result = evaluator.evaluate(&user_input, session);
                stats.record(&result);
                // The field is only cleared once a guess is accepted
                if result.is_ok() {
                    user_input.clear();
                }
                last = Some(result);
            }
        }

        render(display, session, &user_input, last.as_ref())?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = GameConfig::DEFAULT;
    let mut session = GameSession::new(&config);
    let mut stats = SessionStats::new();
    let mut evaluator =
        GuessEvaluator::new(config, RandomSecret::thread()).with_policy(args.policy());
    info!(
        "Starting game: range {}..={}, {} attempts, policy {:?}",
        evaluator.config().min_range,
        evaluator.config().max_range,
        evaluator.config().default_attempts,
        evaluator.policy()
    );

    let display = Display::new();
    InputHandler::enable_raw_mode()?;
    let outcome = run(&display, &mut evaluator, &mut session, &mut stats);
    display.shutdown()?;
    outcome?;

    debug!("Final stats: {:?}", stats);

    println!("\nThanks for playing!");
    println!(
        "Rounds won: {} of {} | Guesses: {} | Invalid inputs: {}",
        stats.wins,
        stats.rounds_played(),
        stats.guesses(),
        stats.rejected
    );
    println!(
        "{} | {} | Longest win streak: {}",
        session.score_label(),
        session.high_score_label(),
        stats.best_streak
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("number-guess").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_logs_stay_on_stderr_without_debug() {
        assert_eq!(parse(&[]).log_target(), None);
    }

    #[test]
    fn test_debug_logs_go_to_default_file() {
        assert_eq!(
            parse(&["--debug"]).log_target(),
            Some(PathBuf::from(DEFAULT_LOG_FILE))
        );
        assert_eq!(
            parse(&["-d"]).log_target(),
            Some(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn test_explicit_log_file_wins() {
        assert_eq!(
            parse(&["-d", "--log-file", "game.log"]).log_target(),
            Some(PathBuf::from("game.log"))
        );
        assert_eq!(
            parse(&["--log-file", "game.log"]).log_target(),
            Some(PathBuf::from("game.log"))
        );
    }

    #[test]
    fn test_secret_policy_flag() {
        assert_eq!(parse(&[]).policy(), SecretPolicy::PerGuess);
        assert_eq!(
            parse(&["--secret-per-round"]).policy(),
            SecretPolicy::PerRound
        );
    }
}
