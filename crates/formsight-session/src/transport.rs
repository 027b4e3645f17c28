//! Media transport seam.
//!
//! The controller never owns the player; it delegates playback,
//! muting, fullscreen, and the time display to whatever hosts the
//! media element.

use tracing::debug;

/// External media capabilities the controller delegates to.
pub trait MediaTransport: Send + Sync {
    /// Start playback.
    fn play(&self);

    /// Pause playback.
    fn pause(&self);

    /// Seek to an absolute position in seconds.
    fn seek(&self, seconds: f64);

    /// Apply the muted flag.
    fn set_muted(&self, muted: bool);

    /// Enter fullscreen. Returns false when the capability is absent;
    /// the controller ignores that silently.
    fn request_fullscreen(&self) -> bool {
        false
    }

    /// Write the formatted `M:SS / M:SS` position to the display
    /// surface.
    fn write_time_display(&self, text: &str);
}

/// Transport that drops every call. Useful for headless runs and as a
/// placeholder before media is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

impl MediaTransport for NullTransport {
    fn play(&self) {}

    fn pause(&self) {}

    fn seek(&self, seconds: f64) {
        debug!(seconds, "NullTransport seek");
    }

    fn set_muted(&self, _muted: bool) {}

    fn write_time_display(&self, _text: &str) {}
}
