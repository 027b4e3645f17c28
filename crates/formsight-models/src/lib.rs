//! Shared data models for the FormSight demo client.
//!
//! This crate provides Serde-serializable types for:
//! - Prediction results returned by the form-analysis service
//! - The exercise-fault vocabulary and coaching recommendations
//! - Media references and playback state for the embedded player
//! - Timecode formatting for the player's time display

pub mod fault;
pub mod media;
pub mod prediction;
pub mod timecode;

// Re-export common types
pub use fault::FaultLabel;
pub use media::{MediaReference, PlaybackState};
pub use prediction::PredictionResult;
pub use timecode::{format_position, format_time};
