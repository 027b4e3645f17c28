//! Media references and player state.

use serde::{Deserialize, Serialize};

/// Opaque handle to the media currently shown in the player.
///
/// A `Local` reference points at the user's just-selected file (the
/// object-URL preview); a `Server` reference points at the processed
/// clip once the service has responded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "url")]
pub enum MediaReference {
    /// Locally-selected file, not yet uploaded
    Local(String),
    /// Processed clip resolved against the service
    Server(String),
}

impl MediaReference {
    /// The URL the player should load, regardless of origin.
    pub fn url(&self) -> &str {
        match self {
            MediaReference::Local(url) | MediaReference::Server(url) => url,
        }
    }

    /// Whether this reference points at the processed server clip.
    pub fn is_server(&self) -> bool {
        matches!(self, MediaReference::Server(_))
    }
}

/// Presentational player state mirrored by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Whether the media transport is currently playing
    pub playing: bool,
    /// Whether the transport is muted
    pub muted: bool,
    /// Whether the hover transport controls are shown
    pub controls_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_accessor() {
        let local = MediaReference::Local("blob:abc".to_string());
        let server = MediaReference::Server("http://localhost:8000/videos/out.mp4".to_string());
        assert_eq!(local.url(), "blob:abc");
        assert_eq!(server.url(), "http://localhost:8000/videos/out.mp4");
        assert!(!local.is_server());
        assert!(server.is_server());
    }

    #[test]
    fn test_playback_defaults() {
        let state = PlaybackState::default();
        assert!(!state.playing);
        assert!(!state.muted);
        assert!(!state.controls_visible);
    }
}
