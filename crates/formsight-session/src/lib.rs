//! Upload/feedback controller for the FormSight demo client.
//!
//! This crate owns the client-visible state of one upload-and-analyze
//! cycle: file selection, upload, processed-clip resolution, the timed
//! reveal choreography, and the presentational playback state of the
//! embedded player. The actual media transport (play/pause/seek) and
//! the prediction service are external collaborators behind traits.

pub mod api;
pub mod controller;
pub mod error;
pub mod session;
pub mod transport;

pub use api::VideoApi;
pub use controller::{Controller, PANEL_SLIDE_DELAY, RESULT_REVEAL_DELAY};
pub use error::{SessionError, SessionResult};
pub use session::{PanelState, Phase, UploadSession};
pub use transport::{MediaTransport, NullTransport};
