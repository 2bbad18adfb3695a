//! Fire-and-forget clipboard access.

/// Copy text to the system clipboard. Failure (headless session, denied
/// access) is reported on stderr and swallowed; returns whether the copy
/// landed.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("[cvarbook][warn] clipboard write failed: {}", err);
                false
            }
        },
        Err(err) => {
            eprintln!("[cvarbook][warn] clipboard unavailable: {}", err);
            false
        }
    }
}
