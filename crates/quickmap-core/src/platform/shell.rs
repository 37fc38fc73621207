/// Opening the mapped share in Explorer via the shell's default handler.
use windows::core::{w, PCWSTR};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

use crate::error::MapError;

/// Open `path` with the shell's `open` verb.
///
/// `ShellExecuteW` reports success as an instance value greater than 32;
/// anything at or below that is one of the SE_ERR codes.
pub fn open_in_explorer(path: &str) -> Result<(), MapError> {
    let wide: Vec<u16> = path.encode_utf16().chain(std::iter::once(0)).collect();

    let instance = unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            PCWSTR(wide.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    let code = instance.0 as usize;
    if code <= 32 {
        tracing::error!(path, code, "ShellExecuteW failed");
        return Err(MapError::LaunchFailed(code as u32));
    }
    Ok(())
}
