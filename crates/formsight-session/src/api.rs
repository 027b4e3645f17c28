//! Seam between the controller and the prediction service.

use async_trait::async_trait;
use formsight_client::{ApiClient, ClientResult, UploadResponse};

/// The two service operations the controller needs.
///
/// Implemented by [`formsight_client::ApiClient`]; tests substitute a
/// stub so upload timing can be driven by the test clock.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Upload a video and wait for the service's prediction.
    async fn upload_video(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<UploadResponse>;

    /// Resolve a processed clip's filename to a playable URL.
    fn video_url(&self, filename: &str) -> String;
}

#[async_trait]
impl VideoApi for ApiClient {
    async fn upload_video(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<UploadResponse> {
        ApiClient::upload_video(self, filename, bytes).await
    }

    fn video_url(&self, filename: &str) -> String {
        ApiClient::video_url(self, filename)
    }
}
