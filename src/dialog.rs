//! Blocking browser dialogs.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("[Dialog] alert failed: {:?}", e);
        }
    }
}

/// Ask the user to confirm. No window or a dismissed dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
