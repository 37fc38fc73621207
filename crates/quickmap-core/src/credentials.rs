/// Credential loading from the flat secrets file.
///
/// The file lives in the working directory next to the executable
/// invocation: line 1 is the username (optionally `DOMAIN\user`), line 2
/// the password. Plain text by deployment choice — hardening the store is
/// out of scope.
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::MapError;

/// Fixed name of the secrets file in the working directory.
pub const CREDENTIALS_FILE: &str = "user.txt";

/// Username/password pair used for the WNet connect call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Load from [`CREDENTIALS_FILE`] in the working directory.
    pub fn load() -> Result<Self, MapError> {
        Self::load_from(Path::new(CREDENTIALS_FILE))
    }

    /// Load from an explicit path.
    ///
    /// Lines are taken verbatim apart from line-terminator removal; extra
    /// lines beyond the second are ignored.
    pub fn load_from(path: &Path) -> Result<Self, MapError> {
        if !path.exists() {
            return Err(MapError::ConfigMissing);
        }
        let text = fs::read_to_string(path).map_err(|_| MapError::ConfigMalformed)?;
        let mut lines = text.lines();
        let username = lines.next().ok_or(MapError::ConfigMalformed)?;
        let password = lines.next().ok_or(MapError::ConfigMalformed)?;
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

// Manual Debug so the password never reaches logs or panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
