use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub name: String,                 // Object name inside the bucket
    pub filepath: PathBuf,            // Local file to copy
    pub bucket: String,               // `bucket`, `bucket/`, `gs://bucket` or `gs://bucket/`
    pub content_type: Option<String>, // Left to gsutil to infer when unset
    pub authenticated_link: bool,
}

impl UploadRequest {
    pub fn new(
        name: impl Into<String>,
        filepath: impl Into<PathBuf>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            filepath: filepath.into(),
            bucket: bucket.into(),
            content_type: None,
            authenticated_link: true,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn authenticated_link(mut self, authenticated_link: bool) -> Self {
        self.authenticated_link = authenticated_link;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub url: String,
    pub gs_path: String,
}
