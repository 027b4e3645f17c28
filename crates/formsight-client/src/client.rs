//! Prediction service HTTP client.

use formsight_models::PredictionResult;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{GreetRequest, GreetResponse, ModelStatus, UploadResponse};

/// Client for the FormSight prediction service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Base URL this client resolves endpoints against.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Demo greeting endpoint, also useful as a reachability probe.
    pub async fn greet(&self, name: &str) -> ClientResult<GreetResponse> {
        let url = format!("{}api/greet", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .json(&GreetRequest {
                name: name.to_string(),
            })
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Upload a video for analysis.
    ///
    /// One multipart request with a single `file` field; the response
    /// carries the processed clip's filename and the prediction.
    pub async fn upload_video(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<UploadResponse> {
        let url = format!("{}api/upload_video", self.config.base_url);

        debug!(filename, size = bytes.len(), "Uploading video to {}", url);

        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let upload: UploadResponse = Self::check(response).await?.json().await?;

        if upload.filename.is_none() && upload.processed_filename.is_none() {
            warn!("Upload response carried no filename; using fallback");
        }

        Ok(upload)
    }

    /// Build the URL of a processed clip. Pure, no I/O.
    pub fn video_url(&self, filename: &str) -> String {
        format!("{}videos/{}", self.config.base_url, filename)
    }

    /// Fetch the model's load status.
    pub async fn model_status(&self) -> ClientResult<ModelStatus> {
        let url = format!("{}api/model/status", self.config.base_url);
        let response = self.http.get(&url).send().await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Run a prediction over a server-side CSV of extracted features.
    ///
    /// The body is the bare CSV filename as a JSON string.
    pub async fn predict_csv(&self, csv_filename: &str) -> ClientResult<PredictionResult> {
        let url = format!("{}api/predict_csv", self.config.base_url);
        let response = self.http.post(&url).json(&csv_filename).send().await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Turn a non-2xx response into an error, keeping the body for
    /// diagnostics.
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, "Service request failed");
        Err(ClientError::RequestFailed { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client_for(base_url: String) -> ApiClient {
        ApiClient::new(ClientConfig {
            base_url,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_video_url_is_pure_concatenation() {
        let client = client_for("http://localhost:8000/".to_string());
        assert_eq!(
            client.video_url("out.mp4"),
            "http://localhost:8000/videos/out.mp4"
        );
    }
}
