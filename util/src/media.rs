//! Media hosting for room images.
//!
//! Room creation hands raw file buffers to a [`MediaUploader`] and stores the
//! returned URLs. The uploader is injected through `AppState` so services and
//! tests never reach for a global client.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use thiserror::Error;

use crate::config;

/// A file received from a client, ready to be pushed to the media host.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Location of an asset on the media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media host request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The host answered with a non-success status. `message` is what the host said.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected media host response: {0}")]
    InvalidResponse(String),

    #[error("Media host is not configured: {0}")]
    NotConfigured(&'static str),
}

#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: UploadFile) -> Result<UploadedImage, MediaError>;

    /// Removes a previously uploaded asset.
    async fn destroy(&self, public_id: &str) -> Result<(), MediaError>;
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct HostErrorBody {
    error: HostErrorMessage,
}

#[derive(Deserialize)]
struct HostErrorMessage {
    message: String,
}

/// Cloudinary-compatible uploader using signed requests (SHA-256 signatures).
#[derive(Clone)]
pub struct CloudinaryUploader {
    client: reqwest::Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryUploader {
    pub fn new(
        base_url: impl Into<String>,
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        })
    }

    /// Builds an uploader from the `CLOUDINARY_*` and `MEDIA_TIMEOUT_SECS` settings.
    pub fn from_config() -> Result<Self, MediaError> {
        let cloud_name = config::cloudinary_cloud_name();
        if cloud_name.is_empty() {
            return Err(MediaError::NotConfigured("CLOUDINARY_CLOUD_NAME"));
        }

        Self::new(
            config::cloudinary_url_base(),
            cloud_name,
            config::cloudinary_api_key(),
            config::cloudinary_api_secret(),
            Duration::from_secs(config::media_timeout_secs()),
        )
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/v1_1/{}/image/{}", self.base_url, self.cloud_name, action)
    }

    /// Signs request parameters: sorted `key=value` pairs joined by `&`, secret appended.
    pub fn sign(&self, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<_> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let joined = sorted
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    async fn read_error(response: reqwest::Response) -> MediaError {
        let status = response.status().as_u16();
        let message = match response.json::<HostErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("Media host responded with status {status}"),
        };
        MediaError::Rejected { status, message }
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, file: UploadFile) -> Result<UploadedImage, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("timestamp", timestamp.clone())]);

        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name.clone());
        if let Some(ct) = &file.content_type {
            part = part.mime_str(ct)?;
        }

        let form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::InvalidResponse(e.to_string()))?;

        tracing::debug!(file = %file.file_name, public_id = %body.public_id, "Uploaded image");

        Ok(UploadedImage {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp.clone()),
        ]);

        let form = Form::new()
            .text("public_id", public_id.to_string())
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        Ok(())
    }
}
