//! Single-screen snake game for the terminal.
//!
//! Diagnostics are logged with `tracing` only when `RUST_LOG` is set and
//! stderr is not a terminal, as the game owns the screen while it runs.
//! Capture a session with e.g. `RUST_LOG=debug termsnake 2>termsnake.log`.
mod app;
mod consts;
mod game;
mod intent;
mod options;
mod surface;
use crate::app::{App, Outcome};
use crate::game::Board;
use crate::surface::Surface;
use anyhow::Context;
use std::env;
use std::io::{self, ErrorKind, IsTerminal};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if logging_enabled(
        env::var_os(EnvFilter::DEFAULT_ENV).is_some(),
        io::stderr().is_terminal(),
    ) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
    match run() {
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => {
            println!("\nGame exited.");
            ExitCode::SUCCESS
        }
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!(
                "Hint: termsnake needs a terminal that supports full-screen text mode and is at least {}x{} characters",
                consts::MIN_TERMINAL_SIZE.width,
                consts::MIN_TERMINAL_SIZE.height,
            );
            ExitCode::from(2)
        }
    }
}

/// Set up the terminal, play until the player quits, and restore the
/// terminal
fn run() -> anyhow::Result<Outcome> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("failed to install interrupt handler")?;
    let mut surface = Surface::init().context("failed to initialize terminal")?;
    let size = surface
        .dimensions()
        .context("failed to get terminal size")?;
    let board = Board::for_screen(size);
    App::new(board, interrupted)
        .run(&mut surface)
        .context("terminal I/O failed")
}

/// Log lines written to the terminal would be drawn over the board, so only
/// log when asked to and when stderr goes somewhere else.
fn logging_enabled(filter_set: bool, stderr_is_terminal: bool) -> bool {
    filter_set && !stderr_is_terminal
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|ioerr| ioerr.kind() == ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, true)]
    #[case(true, true, false)]
    #[case(false, false, false)]
    #[case(false, true, false)]
    fn test_logging_enabled(
        #[case] filter_set: bool,
        #[case] stderr_is_terminal: bool,
        #[case] enabled: bool,
    ) {
        assert_eq!(logging_enabled(filter_set, stderr_is_terminal), enabled);
    }

    #[test]
    fn broken_pipe_in_chain() {
        let e = anyhow::Error::new(io::Error::from(ErrorKind::BrokenPipe))
            .context("terminal I/O failed");
        assert!(is_broken_pipe(&e));
        let e = anyhow::Error::new(io::Error::from(ErrorKind::NotFound))
            .context("terminal I/O failed");
        assert!(!is_broken_pipe(&e));
    }
}
