//! QuickMap — map a network share to the first free drive letter and
//! open it in Explorer.
//!
//! Thin binary entry point. All mapping logic lives in the
//! `quickmap-core` crate; this crate owns the console surface.

#[cfg(windows)]
mod app;
#[cfg(windows)]
mod cli;

#[cfg(windows)]
fn main() -> std::process::ExitCode {
    app::run()
}

// Non-Windows stub builds cleanly and informs the user.
#[cfg(not(windows))]
fn main() {
    println!("QuickMap is Windows-only. Build on Windows to run.");
}
