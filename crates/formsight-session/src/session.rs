//! Upload session state.

use formsight_models::{MediaReference, PlaybackState, PredictionResult};
use serde::{Deserialize, Serialize};

/// Visual state of the upload panel during the reveal choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Initial state, nothing revealed
    #[default]
    Collapsed,
    /// Panel is expanding (set immediately on upload success)
    Expanding,
    /// Panel has slid aside to make room for the result box
    Slid,
}

/// Derived phase of the upload-and-analyze cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Uploading,
    AwaitingChoreography,
    Revealed,
}

/// Client-visible state of one upload-and-analyze cycle.
///
/// Ephemeral: lives for one page view, reset to initial values on
/// [`reset`](crate::Controller::reset). All mutation happens under the
/// controller's lock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadSession {
    /// Locally-selected media, set on file selection
    pub preview: Option<MediaReference>,
    /// Upload progress percentage; absent when no upload is in flight
    pub upload_progress: Option<u8>,
    /// Processed clip once the service has responded
    pub server_media: Option<MediaReference>,
    /// Classification returned with the upload response
    pub prediction: Option<PredictionResult>,
    /// Reveal choreography stage
    pub panel: PanelState,
    /// Delayed reveal flag for the result box
    pub result_box_visible: bool,
    /// Presentational player state
    pub playback: PlaybackState,
    /// Cycle counter; bumped on reset so late-arriving upload
    /// responses and stale choreography steps are discarded
    #[serde(skip)]
    pub(crate) generation: u64,
}

impl UploadSession {
    /// Media the player should currently show: the processed clip once
    /// available, otherwise the local preview.
    pub fn active_media(&self) -> Option<&MediaReference> {
        self.server_media.as_ref().or(self.preview.as_ref())
    }

    /// Derive the cycle phase from the session fields.
    pub fn phase(&self) -> Phase {
        if self.result_box_visible {
            Phase::Revealed
        } else if self.prediction.is_some() {
            Phase::AwaitingChoreography
        } else if self.upload_progress.is_some() {
            Phase::Uploading
        } else {
            Phase::Idle
        }
    }

    /// Reset every field to its initial value, keeping the bumped
    /// generation so stale callbacks from the previous cycle miss.
    pub(crate) fn clear(&mut self) {
        let generation = self.generation;
        *self = Self::default();
        self.generation = generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_idle() {
        let session = UploadSession::default();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.panel, PanelState::Collapsed);
        assert!(session.active_media().is_none());
    }

    #[test]
    fn test_phase_uploading() {
        let session = UploadSession {
            preview: Some(MediaReference::Local("local://squat.mp4".into())),
            upload_progress: Some(0),
            ..Default::default()
        };
        assert_eq!(session.phase(), Phase::Uploading);
    }

    #[test]
    fn test_failed_upload_returns_to_idle_with_preview() {
        let session = UploadSession {
            preview: Some(MediaReference::Local("local://squat.mp4".into())),
            ..Default::default()
        };
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.active_media().is_some());
    }

    #[test]
    fn test_active_media_prefers_server() {
        let session = UploadSession {
            preview: Some(MediaReference::Local("local://squat.mp4".into())),
            server_media: Some(MediaReference::Server("http://x/videos/out.mp4".into())),
            ..Default::default()
        };
        assert!(session.active_media().unwrap().is_server());
    }
}
