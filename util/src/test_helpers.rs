use crate::media::{MediaError, MediaUploader, UploadFile, UploadedImage};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashSet;
use std::sync::Mutex;

/// In-memory `MediaUploader` for tests.
///
/// Every upload succeeds with a deterministic URL unless the file name was
/// registered through [`StubUploader::failing_on`]. Uploaded and destroyed
/// public ids are recorded so tests can assert on compensation.
#[derive(Default)]
pub struct StubUploader {
    failing: HashSet<String>,
    uploaded: Mutex<Vec<String>>,
    destroyed: Mutex<Vec<String>>,
}

impl StubUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads of any of these file names are rejected.
    pub fn failing_on<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().expect("uploaded lock poisoned").clone()
    }

    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.lock().expect("destroyed lock poisoned").clone()
    }
}

#[async_trait]
impl MediaUploader for StubUploader {
    async fn upload(&self, file: UploadFile) -> Result<UploadedImage, MediaError> {
        if self.failing.contains(&file.file_name) {
            return Err(MediaError::Rejected {
                status: 500,
                message: format!("Upload failed for {}", file.file_name),
            });
        }

        let public_id = format!("stub/{}", file.file_name);
        self.uploaded
            .lock()
            .expect("uploaded lock poisoned")
            .push(public_id.clone());

        Ok(UploadedImage {
            url: format!("https://media.test/{}", file.file_name),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        self.destroyed
            .lock()
            .expect("destroyed lock poisoned")
            .push(public_id.to_string());
        Ok(())
    }
}

/// Builds a small fake PNG upload with the given file name.
pub fn image_file(name: &str) -> UploadFile {
    UploadFile {
        file_name: name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: Bytes::from_static(b"\x89PNG\r\n\x1a\nfake"),
    }
}
