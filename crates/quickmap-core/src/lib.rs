/// QuickMap Core — drive-mapping logic.
///
/// This crate contains all business logic with no console or UI
/// dependencies. The Win32 surface is isolated behind the
/// [`provider::DriveProvider`] trait so everything above it runs and
/// tests on any platform.
///
/// # Modules
///
/// - [`credentials`] — two-line secrets file loading.
/// - [`target`] — share-target resolution from argument or clipboard text.
/// - [`letters`] — drive letters and free-letter allocation.
/// - [`provider`] — the OS seam: `DriveProvider` plus a test fake.
/// - [`flow`] — the linear mapping flow (inspect, allocate, connect).
/// - [`error`] — the `MapError` taxonomy and exit codes.
/// - [`platform`] — Windows-only WNet, clipboard, and shell bindings.
pub mod credentials;
pub mod error;
pub mod flow;
pub mod letters;
pub mod platform;
pub mod provider;
pub mod target;

pub use credentials::Credentials;
pub use error::MapError;
pub use flow::{ensure_mapped, MapOutcome};
pub use letters::DriveLetter;
pub use provider::DriveProvider;
