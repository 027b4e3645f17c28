//! Timecode formatting for the player's time display.
//!
//! The display uses `M:SS` with unbounded minutes and zero-padded
//! seconds, matching what the embedded player shows.

/// Format a position in seconds as `M:SS`.
///
/// Negative or non-finite input clamps to `0:00`.
///
/// # Examples
/// ```
/// use formsight_models::timecode::format_time;
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(5.0), "0:05");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format an elapsed/total pair as `M:SS / M:SS`.
pub fn format_position(elapsed: f64, total: f64) -> String {
    format!("{} / {}", format_time(elapsed), format_time(total))
}
