/// The mapping flow: inspect what is mounted, allocate a letter, connect.
///
/// Strictly linear, mirroring the tool's single-shot nature. The only
/// decision point is "already mapped?" — everything else is a straight
/// sequence of provider calls.
use tracing::{debug, info};

use crate::credentials::Credentials;
use crate::error::MapError;
use crate::letters::{next_free_letter, DriveLetter};
use crate::provider::{DriveKind, DriveProvider, MappedDrive};

/// What `ensure_mapped` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOutcome {
    /// Some letter already pointed at the target; nothing was changed.
    AlreadyMapped,
    /// A fresh mapping was created on this letter.
    Mapped(DriveLetter),
}

/// Canonical remote path for a drive root.
///
/// A root that is already a UNC path is used as-is. Otherwise the letter
/// is checked against the live disk metadata: network-backed letters
/// resolve to their provider name, anything else falls back to the
/// original root unchanged. The type check here is independent of any
/// filtering the caller did, so the fallback stays reachable.
pub fn canonical_remote_path(provider: &dyn DriveProvider, root: &str) -> String {
    if root.starts_with(r"\\") {
        return root.to_string();
    }
    if let Some(letter) = DriveLetter::from_root(root) {
        if provider.disk_type(letter) == DriveKind::Network {
            if let Some(remote) = provider.provider_name(letter) {
                return remote;
            }
        }
    }
    root.to_string()
}

/// All currently mounted network drives with their canonical UNC paths.
pub fn list_network_drives(provider: &dyn DriveProvider) -> Vec<MappedDrive> {
    provider
        .logical_drives()
        .into_iter()
        .filter(|&letter| provider.disk_type(letter) == DriveKind::Network)
        .map(|letter| MappedDrive {
            letter,
            remote: canonical_remote_path(provider, &letter.with_colon()),
        })
        .collect()
}

/// True when some mounted network drive's canonical UNC equals `target`.
///
/// Exact string comparison: case-sensitive, no trailing-slash
/// normalisation. A target differing only by a trailing `\` counts as a
/// new mapping.
pub fn is_already_mapped(provider: &dyn DriveProvider, target: &str) -> bool {
    list_network_drives(provider)
        .iter()
        .any(|drive| drive.remote == target)
}

/// Map `target` onto `letter` using the credentials.
///
/// One trailing backslash is stripped first — the connect call rejects
/// it. A letter that is still present in the logical-drive table gets a
/// forced disconnect before the new connection goes in.
pub fn map_drive(
    provider: &mut dyn DriveProvider,
    letter: DriveLetter,
    target: &str,
    credentials: &Credentials,
) -> Result<(), MapError> {
    let remote = target.strip_suffix('\\').unwrap_or(target);

    if provider.logical_drives().contains(&letter) {
        let code = provider.disconnect(letter, true);
        debug!(%letter, code, "disconnected stale mapping");
    }

    let code = provider.connect(letter, remote, credentials);
    if code != 0 {
        return Err(MapError::MappingFailed(code));
    }
    info!(%letter, remote, "mapping created");
    Ok(())
}

/// The full mapping decision: skip when the target is already mounted,
/// otherwise allocate the first free letter and connect.
pub fn ensure_mapped(
    provider: &mut dyn DriveProvider,
    target: &str,
    credentials: &Credentials,
) -> Result<MapOutcome, MapError> {
    if is_already_mapped(provider, target) {
        info!(share = target, "target already mapped, skipping connect");
        return Ok(MapOutcome::AlreadyMapped);
    }
    let letter = next_free_letter(&provider.logical_drives())?;
    map_drive(provider, letter, target, credentials)?;
    Ok(MapOutcome::Mapped(letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FakeProvider;

    fn creds() -> Credentials {
        Credentials {
            username: r"CORP\alice".into(),
            password: "s3cr3t".into(),
        }
    }

    fn letter(c: char) -> DriveLetter {
        DriveLetter::new(c).unwrap()
    }

    #[test]
    fn network_drives_are_listed_with_canonical_remotes() {
        let fake = FakeProvider::new()
            .with_local_drive('C', DriveKind::Fixed)
            .with_local_drive('D', DriveKind::CdRom)
            .with_network_drive('Z', r"\\srv\share");
        let drives = list_network_drives(&fake);
        assert_eq!(
            drives,
            vec![MappedDrive {
                letter: letter('Z'),
                remote: r"\\srv\share".into()
            }]
        );
    }

    /// A root that is already UNC is returned untouched.
    #[test]
    fn canonical_remote_keeps_unc_roots_as_is() {
        let fake = FakeProvider::new();
        assert_eq!(
            canonical_remote_path(&fake, r"\\srv\share"),
            r"\\srv\share"
        );
    }

    /// Non-network letters fall back to the original root unchanged.
    #[test]
    fn canonical_remote_falls_back_for_local_drives() {
        let fake = FakeProvider::new().with_local_drive('C', DriveKind::Fixed);
        assert_eq!(canonical_remote_path(&fake, "C:"), "C:");
        // Unparseable roots fall back too.
        assert_eq!(canonical_remote_path(&fake, "bogus"), "bogus");
    }

    #[test]
    fn already_mapped_requires_exact_string_equality() {
        let fake = FakeProvider::new().with_network_drive('Z', r"\\srv\share");
        assert!(is_already_mapped(&fake, r"\\srv\share"));
        // Trailing slash, different case: treated as a different target.
        assert!(!is_already_mapped(&fake, r"\\srv\share\"));
        assert!(!is_already_mapped(&fake, r"\\SRV\share"));
        assert!(!is_already_mapped(&fake, r"\\srv\other"));
    }

    #[test]
    fn map_drive_strips_one_trailing_backslash() {
        let mut fake = FakeProvider::new();
        map_drive(&mut fake, letter('A'), r"\\srv\share\", &creds()).unwrap();
        assert_eq!(fake.connects.len(), 1);
        assert_eq!(fake.connects[0].1, r"\\srv\share");
    }

    /// An occupied destination letter is force-disconnected first.
    #[test]
    fn map_drive_disconnects_occupied_letter_first() {
        let mut fake = FakeProvider::new().with_network_drive('A', r"\\old\share");
        map_drive(&mut fake, letter('A'), r"\\srv\share", &creds()).unwrap();
        assert_eq!(fake.disconnects, vec![(letter('A'), true)]);
        assert_eq!(fake.connects.len(), 1);
    }

    /// A free destination letter must not trigger any disconnect.
    #[test]
    fn map_drive_does_not_disconnect_free_letter() {
        let mut fake = FakeProvider::new().with_local_drive('C', DriveKind::Fixed);
        map_drive(&mut fake, letter('A'), r"\\srv\share", &creds()).unwrap();
        assert!(fake.disconnects.is_empty());
    }

    /// The raw Win32 result code survives into the error.
    #[test]
    fn connect_failure_carries_the_result_code() {
        let mut fake = FakeProvider::new();
        fake.connect_result = 1219; // ERROR_SESSION_CREDENTIAL_CONFLICT
        let err = map_drive(&mut fake, letter('A'), r"\\srv\share", &creds()).unwrap_err();
        assert_eq!(err, MapError::MappingFailed(1219));
    }

    #[test]
    fn ensure_mapped_skips_connect_when_target_is_mounted() {
        let mut fake = FakeProvider::new().with_network_drive('Z', r"\\srv\share");
        let outcome = ensure_mapped(&mut fake, r"\\srv\share", &creds()).unwrap();
        assert_eq!(outcome, MapOutcome::AlreadyMapped);
        assert!(fake.connects.is_empty());
        assert!(fake.disconnects.is_empty());
    }

    #[test]
    fn ensure_mapped_allocates_first_free_letter() {
        let mut fake = FakeProvider::new()
            .with_local_drive('A', DriveKind::Removable)
            .with_local_drive('C', DriveKind::Fixed);
        let outcome = ensure_mapped(&mut fake, r"\\srv\share", &creds()).unwrap();
        assert_eq!(outcome, MapOutcome::Mapped(letter('B')));
        assert_eq!(fake.connects[0].0, letter('B'));
    }

    #[test]
    fn ensure_mapped_passes_the_loaded_credentials() {
        let mut fake = FakeProvider::new();
        ensure_mapped(&mut fake, r"\\srv\share", &creds()).unwrap();
        let (_, _, username, password) = &fake.connects[0];
        assert_eq!(username, r"CORP\alice");
        assert_eq!(password, "s3cr3t");
    }

    #[test]
    fn ensure_mapped_surfaces_letter_exhaustion() {
        let mut fake = FakeProvider::new();
        for c in 'A'..='Z' {
            if c != 'U' {
                fake = fake.with_local_drive(c, DriveKind::Fixed);
            }
        }
        let err = ensure_mapped(&mut fake, r"\\srv\share", &creds()).unwrap_err();
        assert_eq!(err, MapError::NoLettersAvailable);
        assert!(fake.connects.is_empty());
    }
}
