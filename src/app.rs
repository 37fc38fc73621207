/// Console orchestration: load credentials, resolve the target, map,
/// open. Owns all stdout text and the process exit code.
///
/// Failure surfacing happens in two phases, matching the tool's
/// contract: configuration and target problems are reported precisely;
/// anything after the target validates collapses into one generic
/// `Error mapping drive "<target>"!` line, with the precise cause kept
/// in the tracing output.
use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing::error;

use quickmap_core::credentials::Credentials;
use quickmap_core::flow::{ensure_mapped, MapOutcome};
use quickmap_core::platform::{clipboard_text, open_in_explorer, WnetProvider};
use quickmap_core::target;
use quickmap_core::MapError;

pub fn run() -> ExitCode {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = crate::cli::Args::parse();

    let credentials = match Credentials::load() {
        Ok(credentials) => credentials,
        Err(err) => return fail(&err.to_string(), &err),
    };

    // The clipboard is only consulted when no argument was given.
    let clipboard = match args.target {
        Some(_) => None,
        None => clipboard_text(),
    };
    let target = match target::resolve(args.target, clipboard) {
        Ok(target) => target,
        Err(err) => return fail(&err.to_string(), &err),
    };

    match map_and_open(&target, &credentials) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&format!("Error mapping drive \"{target}\"!"), &err),
    }
}

fn map_and_open(target: &str, credentials: &Credentials) -> Result<(), MapError> {
    let mut provider = WnetProvider;
    match ensure_mapped(&mut provider, target, credentials)? {
        MapOutcome::AlreadyMapped => println!("Drive already mapped."),
        MapOutcome::Mapped(letter) => {
            println!("Mapping drive to letter {}...", letter.as_char());
            println!("Drive mapped.");
        }
    }
    open_in_explorer(target)
}

fn fail(message: &str, err: &MapError) -> ExitCode {
    error!(%err, "run failed");
    println!("{message}");
    pause_if_interactive();
    ExitCode::from(err.exit_code())
}

/// Double-click use leaves a console that vanishes on exit; hold it open
/// until Enter. Scripted (non-TTY) runs skip the pause and rely on the
/// exit code.
fn pause_if_interactive() {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        print!("Press Enter to exit...");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        let _ = stdin.lock().read_line(&mut line);
    }
}
