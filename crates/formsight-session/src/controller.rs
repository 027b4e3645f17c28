//! Upload/feedback controller.
//!
//! Owns the [`UploadSession`] and drives the upload-and-analyze cycle:
//! select → upload → reveal choreography → result. Playback events are
//! forwarded to the external media transport.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use formsight_models::{timecode, FaultLabel, MediaReference};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::VideoApi;
use crate::error::SessionResult;
use crate::session::{PanelState, UploadSession};
use crate::transport::MediaTransport;

/// Delay between the panel starting to expand and sliding aside.
pub const PANEL_SLIDE_DELAY: Duration = Duration::from_millis(1000);

/// Further delay before the result box becomes visible.
pub const RESULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Controller for one upload-and-analyze cycle.
///
/// All session mutation happens under one lock with no await points
/// held across it, matching the single-UI-thread model the session
/// assumes.
pub struct Controller {
    session: Arc<Mutex<UploadSession>>,
    api: Arc<dyn VideoApi>,
    transport: Arc<dyn MediaTransport>,
    reveal_task: Mutex<Option<JoinHandle<()>>>,
}

impl Controller {
    /// Create a controller over the given service seam and media
    /// transport.
    pub fn new(api: Arc<dyn VideoApi>, transport: Arc<dyn MediaTransport>) -> Self {
        Self {
            session: Arc::new(Mutex::new(UploadSession::default())),
            api,
            transport,
            reveal_task: Mutex::new(None),
        }
    }

    /// Snapshot of the current session state.
    pub fn snapshot(&self) -> UploadSession {
        self.session_lock().clone()
    }

    /// Handle a file selection: build the local preview, mark the
    /// upload in flight, and send the video to the service.
    ///
    /// On success the preview is superseded by the processed clip's
    /// server URL, the prediction is stored, and the reveal
    /// choreography starts. On failure the preview stays so the user
    /// can retry; the error is logged and returned.
    pub async fn select_file(&self, filename: &str, bytes: Vec<u8>) -> SessionResult<()> {
        let generation = {
            let mut session = self.session_lock();
            session.preview = Some(MediaReference::Local(format!("local://{filename}")));
            session.upload_progress = Some(0);
            session.generation
        };

        match self.api.upload_video(filename, bytes).await {
            Ok(response) => {
                let url = self.api.video_url(response.resolved_filename());
                {
                    let mut session = self.session_lock();
                    if session.generation != generation {
                        debug!("Discarding upload response from a reset cycle");
                        return Ok(());
                    }
                    session.upload_progress = None;
                    session.server_media = Some(MediaReference::Server(url));
                    session.prediction = Some(response.prediction);
                }
                self.start_reveal(generation);
                Ok(())
            }
            Err(e) => {
                {
                    let mut session = self.session_lock();
                    if session.generation == generation {
                        session.upload_progress = None;
                    }
                }
                warn!("Video upload failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Reset to the idle state from anywhere.
    ///
    /// Cancels pending choreography, discards any in-flight upload's
    /// eventual response, clears the session, and rewinds the player
    /// if media was loaded. Idempotent.
    pub fn reset(&self) {
        if let Some(task) = self.take_reveal_task() {
            task.abort();
        }

        let had_media = {
            let mut session = self.session_lock();
            session.generation += 1;
            let had_media = session.active_media().is_some();
            session.clear();
            had_media
        };

        if had_media {
            self.transport.pause();
            self.transport.seek(0.0);
        }
    }

    /// Toggle play/pause on the media surface.
    pub fn toggle_playback(&self) {
        let playing = {
            let mut session = self.session_lock();
            if session.active_media().is_none() {
                return;
            }
            session.playback.playing = !session.playback.playing;
            session.playback.playing
        };

        if playing {
            self.transport.play();
        } else {
            self.transport.pause();
        }
    }

    /// Pointer entered the media surface: show the transport controls,
    /// but only once media is loaded.
    pub fn pointer_enter(&self) {
        let mut session = self.session_lock();
        if session.active_media().is_some() {
            session.playback.controls_visible = true;
        }
    }

    /// Pointer left the media surface. Controls stay visible while
    /// playback is active.
    pub fn pointer_leave(&self) {
        let mut session = self.session_lock();
        if !session.playback.playing {
            session.playback.controls_visible = false;
        }
    }

    /// Flip the muted flag and apply it to the transport.
    pub fn toggle_mute(&self) {
        let muted = {
            let mut session = self.session_lock();
            session.playback.muted = !session.playback.muted;
            session.playback.muted
        };
        self.transport.set_muted(muted);
    }

    /// Ask the transport for fullscreen. Absent capability is ignored.
    pub fn request_fullscreen(&self) {
        if !self.transport.request_fullscreen() {
            debug!("Fullscreen capability absent; ignoring");
        }
    }

    /// Transport-driven time callback: format and publish the
    /// `M:SS / M:SS` position.
    pub fn on_time_update(&self, elapsed: f64, total: f64) {
        self.transport
            .write_time_display(&timecode::format_position(elapsed, total));
    }

    /// Recommendations for the current prediction, if the label is in
    /// the known vocabulary. Unknown labels yield nothing.
    pub fn recommendations(&self) -> &'static [&'static str] {
        let session = self.session_lock();
        session
            .prediction
            .as_ref()
            .and_then(|p| FaultLabel::from_label(&p.predicted_label))
            .map(|f| f.recommendations())
            .unwrap_or(&[])
    }

    /// Start the reveal choreography: expand immediately, slide after
    /// [`PANEL_SLIDE_DELAY`], show the result box after a further
    /// [`RESULT_REVEAL_DELAY`].
    ///
    /// Both delayed steps run in one chained task so the slide can
    /// never precede the expansion, and aborting the task on reset
    /// cancels whichever steps are still pending.
    fn start_reveal(&self, generation: u64) {
        {
            let mut session = self.session_lock();
            if session.generation != generation {
                return;
            }
            session.panel = PanelState::Expanding;
        }

        // Deadlines are anchored at the Expanding transition, not at the
        // task's first poll, so the stage delays measure from the expand.
        let slide_at = tokio::time::Instant::now() + PANEL_SLIDE_DELAY;
        let reveal_at = slide_at + RESULT_REVEAL_DELAY;

        let session = Arc::clone(&self.session);
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(slide_at).await;
            {
                let mut session = lock_recovering(&session);
                if session.generation != generation {
                    return;
                }
                session.panel = PanelState::Slid;
            }

            tokio::time::sleep_until(reveal_at).await;
            {
                let mut session = lock_recovering(&session);
                if session.generation != generation {
                    return;
                }
                session.result_box_visible = true;
            }
        });

        if let Some(previous) = self.set_reveal_task(task) {
            // One choreography per cycle; a stale task from an earlier
            // success must not fire late.
            previous.abort();
        }
    }

    fn session_lock(&self) -> MutexGuard<'_, UploadSession> {
        lock_recovering(&self.session)
    }

    fn take_reveal_task(&self) -> Option<JoinHandle<()>> {
        lock_recovering(&self.reveal_task).take()
    }

    fn set_reveal_task(&self, task: JoinHandle<()>) -> Option<JoinHandle<()>> {
        lock_recovering(&self.reveal_task).replace(task)
    }
}

/// Lock a mutex, recovering the inner value if a holder panicked.
fn lock_recovering<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
