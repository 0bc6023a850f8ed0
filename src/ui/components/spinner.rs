use std::time::{SystemTime, UNIX_EPOCH};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_STEP_MS: u128 = 100;

/// Current spinner glyph, driven by wall-clock time so every redraw advances it.
pub fn frame() -> &'static str {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    FRAMES[(now / FRAME_STEP_MS) as usize % FRAMES.len()]
}
