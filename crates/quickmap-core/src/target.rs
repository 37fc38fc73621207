/// Target resolution — which share path to map.
///
/// The candidate comes from the single CLI argument when present,
/// otherwise from the clipboard. No normalisation happens here; the
/// mapper strips a trailing backslash just before connecting, while the
/// already-mapped comparison sees the candidate untouched.
use crate::error::MapError;

/// Resolve the share target from the CLI argument or the clipboard text.
///
/// An argument, when supplied, wins outright — the clipboard is never
/// consulted. The winner must pass [`looks_like_unc`].
pub fn resolve(arg: Option<String>, clipboard: Option<String>) -> Result<String, MapError> {
    let candidate = match arg {
        Some(arg) => arg,
        None => clipboard.unwrap_or_default(),
    };
    if candidate.is_empty() {
        return Err(MapError::NoTargetSpecified);
    }
    if !looks_like_unc(&candidate) {
        return Err(MapError::InvalidTargetFormat(candidate));
    }
    Ok(candidate)
}

/// True when the string contains `\\` immediately followed by a
/// non-backslash character, i.e. the start of a `\\server\share` host
/// segment.
pub fn looks_like_unc(candidate: &str) -> bool {
    candidate
        .as_bytes()
        .windows(3)
        .any(|w| w[0] == b'\\' && w[1] == b'\\' && w[2] != b'\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins_over_clipboard() {
        let target = resolve(
            Some(r"\\fileserver\shared".into()),
            Some(r"\\other\place".into()),
        )
        .unwrap();
        assert_eq!(target, r"\\fileserver\shared");
    }

    #[test]
    fn clipboard_is_used_when_no_argument() {
        let target = resolve(None, Some(r"\\fileserver\shared".into())).unwrap();
        assert_eq!(target, r"\\fileserver\shared");
    }

    #[test]
    fn no_argument_and_empty_clipboard_is_no_target() {
        assert_eq!(
            resolve(None, None).unwrap_err(),
            MapError::NoTargetSpecified
        );
        assert_eq!(
            resolve(None, Some(String::new())).unwrap_err(),
            MapError::NoTargetSpecified
        );
    }

    /// An invalid CLI argument fails even with a valid clipboard — the
    /// clipboard must be ignored entirely once an argument exists.
    #[test]
    fn invalid_argument_is_not_rescued_by_clipboard() {
        let err = resolve(Some("notashare".into()), Some(r"\\srv\share".into())).unwrap_err();
        assert_eq!(err, MapError::InvalidTargetFormat("notashare".into()));
    }

    #[test]
    fn unc_paths_pass_validation() {
        assert!(looks_like_unc(r"\\server\share"));
        assert!(looks_like_unc(r"\\server\share\sub\dir"));
        assert!(looks_like_unc(r"\\host"));
    }

    #[test]
    fn non_unc_strings_fail_validation() {
        assert!(!looks_like_unc(r"C:\temp"));
        assert!(!looks_like_unc("notashare"));
        assert!(!looks_like_unc(""));
        assert!(!looks_like_unc(r"\\"));
        // Three backslashes in a row do not start a host segment there,
        // but the pair at offset 1 is followed by a letter.
        assert!(looks_like_unc(r"\\\server"));
    }

    /// A trailing backslash is the mapper's problem, not the resolver's.
    #[test]
    fn trailing_backslash_still_resolves() {
        let target = resolve(Some(r"\\srv\share\".into()), None).unwrap();
        assert_eq!(target, r"\\srv\share\");
    }
}
