//! Client for the FormSight prediction service.
//!
//! This crate wraps the handful of HTTP endpoints the demo client
//! talks to: greeting, video upload, processed-video URL resolution,
//! model status, and CSV prediction. Every call maps to exactly one
//! outbound request; there is no retry, caching, or auth.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use types::{GreetResponse, ModelStatus, UploadResponse, DEFAULT_PROCESSED_FILENAME};
