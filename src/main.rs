use std::error::Error;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use ascii_snake::config::GameConfig;
use ascii_snake::error::SnakeError;
use ascii_snake::game::{GameState, GameStatus};
use ascii_snake::input::{GameInput, InputHandler};
use ascii_snake::logging::{DEFAULT_LOG_FILE, init_file_logger};
use ascii_snake::renderer;
use ascii_snake::terminal_runtime::{TerminalSession, restore_terminal};
use clap::Parser;
use log::{LevelFilter, info};

/// Exit status after Ctrl-C.
const INTERRUPT_EXIT_CODE: u8 = 2;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food and bonus placement (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives log output.
    #[arg(long = "log-file", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log verbosity: off, error, warn, info, debug, or trace.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

/// How the session left the game loop.
enum Ending {
    Finished(GameState),
    Interrupted,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    install_panic_hook();

    match run(&cli) {
        Ok(Ending::Finished(state)) => {
            if let GameStatus::Ended(outcome) = state.status {
                println!("{} Score: {}", renderer::end_message(outcome), state.score);
            }
            ExitCode::SUCCESS
        }
        Ok(Ending::Interrupted) => ExitCode::from(INTERRUPT_EXIT_CODE),
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Ending, SnakeError> {
    init_file_logger(&cli.log_file, cli.log_level)?;

    let config = GameConfig::default();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        "starting {}x{} board (wrap: {}), seed {seed}",
        config.grid.width, config.grid.height, config.wrap
    );

    let mut state = GameState::new_with_seed(config, seed);
    let mut input = InputHandler::new();
    let mut session = TerminalSession::enter()?;

    session.draw(&state)?;

    while state.is_running() {
        let command = input.poll_input()?;
        if command == Some(GameInput::Interrupt) {
            info!("interrupted after {} ticks", state.tick_count);
            return Ok(Ending::Interrupted);
        }

        state.update(command);
        session.draw(&state)?;

        thread::sleep(config.tick_interval);
    }

    thread::sleep(config.end_screen_delay);
    drop(session);

    Ok(Ending::Finished(state))
}

fn report(error: &SnakeError) {
    eprintln!("ascii-snake: {error}");

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
