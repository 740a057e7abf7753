//! Best-effort push of a lecture's first file to the processing server.
//!
//! The store never waits on this and never learns the outcome. Only bytes the
//! client sent along with the lecture are forwarded.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upload endpoint answered {0}")]
    Status(u16),
}

/// Form the processing server parses: `subject_id`, `title` and `file`.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub subject_id: u64,
    pub title: String,
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadRequest {
    pub fn into_form(self) -> Form {
        Form::new()
            .text("subject_id", self.subject_id.to_string())
            .text("title", self.title)
            .part("file", Part::bytes(self.bytes.to_vec()).file_name(self.file_name))
    }
}

#[async_trait]
pub trait LectureUploader: Send + Sync {
    async fn upload(&self, req: &UploadRequest) -> Result<(), UploadError>;
}

pub struct HttpLectureUploader {
    client: Client,
    endpoint: String,
}

impl HttpLectureUploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LectureUploader for HttpLectureUploader {
    async fn upload(&self, req: &UploadRequest) -> Result<(), UploadError> {
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(req.clone().into_form())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UploadError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

pub struct NoopLectureUploader;

#[async_trait]
impl LectureUploader for NoopLectureUploader {
    async fn upload(&self, req: &UploadRequest) -> Result<(), UploadError> {
        info!("upload disabled, skipping {}", req.file_name);
        Ok(())
    }
}

/// Fire-and-forget: the outcome is only logged.
pub fn dispatch_upload(uploader: Arc<dyn LectureUploader>, req: UploadRequest) -> JoinHandle<()> {
    tokio::spawn(async move {
        match uploader.upload(&req).await {
            Ok(()) => info!(
                "uploaded {} for subject {} / {}",
                req.file_name, req.subject_id, req.title
            ),
            Err(e) => warn!("upload of {} failed: {}", req.file_name, e),
        }
    })
}
