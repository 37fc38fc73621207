/// The seam between mapping logic and the operating system.
///
/// Everything the flow needs from Windows goes through [`DriveProvider`]
/// so the logic stays testable off-box. The real implementation is
/// [`crate::platform::WnetProvider`]; tests use [`FakeProvider`].
use crate::credentials::Credentials;
use crate::letters::DriveLetter;

/// Raw Win32 drive-type codes, as reported by `GetDriveTypeW`.
const DRIVE_REMOVABLE_VAL: u32 = 2;
const DRIVE_FIXED_VAL: u32 = 3;
const DRIVE_REMOTE_VAL: u32 = 4;
const DRIVE_CDROM_VAL: u32 = 5;

/// Drive type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKind {
    Fixed,
    Removable,
    Network,
    CdRom,
    Unknown,
}

impl DriveKind {
    /// Classify a raw Win32 drive-type code.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            DRIVE_FIXED_VAL => Self::Fixed,
            DRIVE_REMOVABLE_VAL => Self::Removable,
            DRIVE_REMOTE_VAL => Self::Network,
            DRIVE_CDROM_VAL => Self::CdRom,
            _ => Self::Unknown,
        }
    }
}

/// A network drive as seen in the live OS drive table: local letter plus
/// its canonical remote UNC path. Read-only view, rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedDrive {
    pub letter: DriveLetter,
    pub remote: String,
}

/// Abstract drive-mapping capability.
///
/// `connect` and `disconnect` return the raw Win32 result code (`0` on
/// success) so the caller decides how to surface failures.
pub trait DriveProvider {
    /// Letters currently present in the logical-drive table.
    fn logical_drives(&self) -> Vec<DriveLetter>;

    /// Drive type of a mounted letter.
    fn disk_type(&self, letter: DriveLetter) -> DriveKind;

    /// Remote UNC path (provider name) for a network-backed letter.
    fn provider_name(&self, letter: DriveLetter) -> Option<String>;

    /// Create a mapping from `letter` to `remote` with the credentials.
    fn connect(&mut self, letter: DriveLetter, remote: &str, credentials: &Credentials) -> u32;

    /// Cancel the mapping on `letter`, optionally forcing open handles.
    fn disconnect(&mut self, letter: DriveLetter, force: bool) -> u32;
}

/// In-memory provider for tests: a canned drive table plus a recording of
/// every connect/disconnect issued against it.
#[derive(Debug, Default)]
pub struct FakeProvider {
    drives: Vec<(DriveLetter, DriveKind, Option<String>)>,
    /// `(letter, remote, username, password)` per connect call.
    pub connects: Vec<(DriveLetter, String, String, String)>,
    /// `(letter, force)` per disconnect call.
    pub disconnects: Vec<(DriveLetter, bool)>,
    /// Result code the next connect calls return.
    pub connect_result: u32,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a local (non-network) drive.
    pub fn with_local_drive(mut self, letter: char, kind: DriveKind) -> Self {
        let letter = DriveLetter::new(letter).expect("test letter");
        self.drives.push((letter, kind, None));
        self
    }

    /// Add a mounted network drive with its remote UNC path.
    pub fn with_network_drive(mut self, letter: char, remote: &str) -> Self {
        let letter = DriveLetter::new(letter).expect("test letter");
        self.drives
            .push((letter, DriveKind::Network, Some(remote.to_string())));
        self
    }
}

impl DriveProvider for FakeProvider {
    fn logical_drives(&self) -> Vec<DriveLetter> {
        self.drives.iter().map(|(letter, _, _)| *letter).collect()
    }

    fn disk_type(&self, letter: DriveLetter) -> DriveKind {
        self.drives
            .iter()
            .find(|(l, _, _)| *l == letter)
            .map(|(_, kind, _)| *kind)
            .unwrap_or(DriveKind::Unknown)
    }

    fn provider_name(&self, letter: DriveLetter) -> Option<String> {
        self.drives
            .iter()
            .find(|(l, _, _)| *l == letter)
            .and_then(|(_, _, remote)| remote.clone())
    }

    fn connect(&mut self, letter: DriveLetter, remote: &str, credentials: &Credentials) -> u32 {
        self.connects.push((
            letter,
            remote.to_string(),
            credentials.username.clone(),
            credentials.password.clone(),
        ));
        if self.connect_result == 0 {
            self.drives
                .push((letter, DriveKind::Network, Some(remote.to_string())));
        }
        self.connect_result
    }

    fn disconnect(&mut self, letter: DriveLetter, force: bool) -> u32 {
        self.disconnects.push((letter, force));
        self.drives.retain(|(l, _, _)| *l != letter);
        0
    }
}
