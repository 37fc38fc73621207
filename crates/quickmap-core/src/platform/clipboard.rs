/// Clipboard text read via the raw Win32 clipboard API.
///
/// No apartment-threading requirement applies at this level, unlike the
/// OLE clipboard wrappers, so callers need no special thread context.
use windows::Win32::Foundation::HGLOBAL;
use windows::Win32::System::DataExchange::{CloseClipboard, GetClipboardData, OpenClipboard};
use windows::Win32::System::Memory::{GlobalLock, GlobalUnlock};

// Clipboard format constant from the Windows API.
const CF_UNICODETEXT_VAL: u32 = 13;

/// Current clipboard contents as text, or `None` when the clipboard is
/// unavailable or holds no text.
pub fn clipboard_text() -> Option<String> {
    unsafe {
        if OpenClipboard(None).is_err() {
            tracing::warn!("OpenClipboard failed");
            return None;
        }
        let text = read_unicode_text();
        let _ = CloseClipboard();
        text
    }
}

unsafe fn read_unicode_text() -> Option<String> {
    let handle = GetClipboardData(CF_UNICODETEXT_VAL).ok()?;
    let global = HGLOBAL(handle.0);

    let ptr = GlobalLock(global) as *const u16;
    if ptr.is_null() {
        return None;
    }

    // The buffer is NUL-terminated UTF-16.
    let mut len = 0usize;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    let text = String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len));

    let _ = GlobalUnlock(global);
    Some(text)
}
