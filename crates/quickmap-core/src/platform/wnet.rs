/// Drive enumeration and mapping through the Win32 WNet APIs.
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::BOOL;
use windows::Win32::NetworkManagement::WNet::{
    WNetAddConnection2W, WNetCancelConnection2W, WNetGetConnectionW, NETRESOURCEW,
    NET_CONNECT_FLAGS, RESOURCETYPE_DISK,
};
use windows::Win32::Storage::FileSystem::{GetDriveTypeW, GetLogicalDriveStringsW};

use crate::credentials::Credentials;
use crate::letters::DriveLetter;
use crate::provider::{DriveKind, DriveProvider};

/// NUL-terminated UTF-16 for the Win32 W entry points.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// The real [`DriveProvider`] backed by mpr.dll and the drive table.
#[derive(Debug, Default)]
pub struct WnetProvider;

impl DriveProvider for WnetProvider {
    fn logical_drives(&self) -> Vec<DriveLetter> {
        let mut letters = Vec::new();

        // GetLogicalDriveStringsW returns null-separated drive root strings.
        let mut buffer = [0u16; 256];
        let len = unsafe { GetLogicalDriveStringsW(Some(&mut buffer)) };

        if len == 0 {
            tracing::warn!("GetLogicalDriveStringsW returned 0");
            return letters;
        }

        let full = OsString::from_wide(&buffer[..len as usize]);
        let full_str = full.to_string_lossy();

        for root in full_str.split('\0').filter(|s| !s.is_empty()) {
            if let Some(letter) = DriveLetter::from_root(root) {
                letters.push(letter);
            }
        }

        letters
    }

    fn disk_type(&self, letter: DriveLetter) -> DriveKind {
        let root = to_wide(&letter.root());
        let raw = unsafe { GetDriveTypeW(PCWSTR(root.as_ptr())) };
        DriveKind::from_raw(raw)
    }

    fn provider_name(&self, letter: DriveLetter) -> Option<String> {
        let local = to_wide(&letter.with_colon());
        let mut buffer = [0u16; 1024];
        let mut len = buffer.len() as u32;
        let code = unsafe {
            WNetGetConnectionW(
                PCWSTR(local.as_ptr()),
                PWSTR(buffer.as_mut_ptr()),
                &mut len,
            )
        };
        if code != 0 {
            tracing::debug!(%letter, code, "WNetGetConnectionW failed");
            return None;
        }
        let end = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
        Some(String::from_utf16_lossy(&buffer[..end]))
    }

    fn connect(&mut self, letter: DriveLetter, remote: &str, credentials: &Credentials) -> u32 {
        let mut local_wide = to_wide(&letter.with_colon());
        let mut remote_wide = to_wide(remote);
        let username_wide = to_wide(&credentials.username);
        let password_wide = to_wide(&credentials.password);

        let resource = NETRESOURCEW {
            dwType: RESOURCETYPE_DISK,
            lpLocalName: PWSTR(local_wide.as_mut_ptr()),
            lpRemoteName: PWSTR(remote_wide.as_mut_ptr()),
            ..Default::default()
        };

        // Flags 0: the mapping lives for the session, not remembered.
        unsafe {
            WNetAddConnection2W(
                &resource,
                PCWSTR(password_wide.as_ptr()),
                PCWSTR(username_wide.as_ptr()),
                NET_CONNECT_FLAGS(0),
            )
        }
    }

    fn disconnect(&mut self, letter: DriveLetter, force: bool) -> u32 {
        let local = to_wide(&letter.with_colon());
        unsafe {
            WNetCancelConnection2W(PCWSTR(local.as_ptr()), NET_CONNECT_FLAGS(0), BOOL::from(force))
        }
    }
}
