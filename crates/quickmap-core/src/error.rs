/// Error taxonomy for the mapping pipeline.
///
/// Every failure class is kept distinguishable even though the console
/// front-end collapses the post-validation classes into one generic
/// message. Exit codes group the classes: 2 = configuration, 3 = target
/// resolution, 4 = anything after the target validated.
use thiserror::Error;

use crate::credentials::CREDENTIALS_FILE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// The secrets file is absent from the working directory.
    #[error("\"{CREDENTIALS_FILE}\" not found!")]
    ConfigMissing,

    /// The secrets file exists but does not hold the two expected lines.
    #[error(
        "Error reading \"{CREDENTIALS_FILE}\". The file needs to have the following structure:\nLine 1:\tdomain\\username\nLine 2:\tpassword"
    )]
    ConfigMalformed,

    /// No CLI argument and nothing usable on the clipboard.
    #[error("A shared drive must be specified as an argument or must be found in the clipboard.")]
    NoTargetSpecified,

    /// The candidate target does not look like a `\\server\share` path.
    #[error("\"{0}\" is not a valid drive name.")]
    InvalidTargetFormat(String),

    /// Every letter A-Z is taken (or only the reserved letter remains).
    #[error("no free drive letter available")]
    NoLettersAvailable,

    /// The WNet connect call returned a non-zero Win32 result code.
    #[error("mapping failed with Win32 error {0}")]
    MappingFailed(u32),

    /// The shell refused to open the mapped path.
    #[error("launching the file explorer failed with code {0}")]
    LaunchFailed(u32),
}

impl MapError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigMissing | Self::ConfigMalformed => 2,
            Self::NoTargetSpecified | Self::InvalidTargetFormat(_) => 3,
            Self::NoLettersAvailable | Self::MappingFailed(_) | Self::LaunchFailed(_) => 4,
        }
    }

    /// True for the classes the console reports with the generic
    /// `Error mapping drive "<target>"!` line rather than their own text.
    pub fn is_umbrella(&self) -> bool {
        matches!(
            self,
            Self::NoLettersAvailable | Self::MappingFailed(_) | Self::LaunchFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_group_by_failure_class() {
        assert_eq!(MapError::ConfigMissing.exit_code(), 2);
        assert_eq!(MapError::ConfigMalformed.exit_code(), 2);
        assert_eq!(MapError::NoTargetSpecified.exit_code(), 3);
        assert_eq!(MapError::InvalidTargetFormat("x".into()).exit_code(), 3);
        assert_eq!(MapError::NoLettersAvailable.exit_code(), 4);
        assert_eq!(MapError::MappingFailed(53).exit_code(), 4);
        assert_eq!(MapError::LaunchFailed(2).exit_code(), 4);
    }

    /// The invalid-target message must quote the literal candidate string.
    #[test]
    fn invalid_target_message_names_the_input() {
        let msg = MapError::InvalidTargetFormat("notashare".into()).to_string();
        assert!(msg.contains("\"notashare\""), "got: {msg}");
    }

    #[test]
    fn umbrella_classes_are_exactly_the_post_validation_ones() {
        assert!(!MapError::ConfigMissing.is_umbrella());
        assert!(!MapError::NoTargetSpecified.is_umbrella());
        assert!(!MapError::InvalidTargetFormat(String::new()).is_umbrella());
        assert!(MapError::NoLettersAvailable.is_umbrella());
        assert!(MapError::MappingFailed(1222).is_umbrella());
        assert!(MapError::LaunchFailed(5).is_umbrella());
    }
}
