/// Platform-specific functionality — Win32 drive enumeration, the WNet
/// mapping calls, clipboard read, and the shell launcher.
///
/// Compiled only on Windows; the rest of the crate stays portable so the
/// flow logic can be tested anywhere against the fake provider.

#[cfg(windows)]
mod clipboard;
#[cfg(windows)]
mod shell;
#[cfg(windows)]
mod wnet;

#[cfg(windows)]
pub use clipboard::clipboard_text;
#[cfg(windows)]
pub use shell::open_in_explorer;
#[cfg(windows)]
pub use wnet::WnetProvider;
