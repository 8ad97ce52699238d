use crate::gs_path::{normalize_bucket, object_path, viewer_url};
use crate::models::{GsutilConfig, UploadRequest, UploadResult};
use crate::runner::{CommandRunner, TokioCommandRunner};
use crate::Result;
use std::ffi::OsString;
use std::path::Path;
use tracing::{debug, info};

/// Arguments passed to gsutil after the program path.
pub fn build_args(content_type: Option<&str>, filepath: &Path, gs_path: &str) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(5);

    if let Some(content_type) = content_type.filter(|ct| !ct.is_empty()) {
        args.push("-h".into());
        args.push(format!("Content-Type:{}", content_type).into());
    }

    args.push("cp".into());
    args.push(filepath.as_os_str().to_os_string());
    args.push(gs_path.into());
    args
}

/// Copies local files into Google Storage by shelling out to `gsutil cp`.
pub struct Uploader<R = TokioCommandRunner> {
    config: GsutilConfig,
    runner: R,
}

impl Uploader {
    pub fn new(config: GsutilConfig) -> Self {
        Self::with_runner(config, TokioCommandRunner)
    }
}

impl<R: CommandRunner> Uploader<R> {
    pub fn with_runner(config: GsutilConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Uploads and returns the viewer link, keeping the cause on failure.
    pub async fn try_upload(&self, request: &UploadRequest) -> Result<UploadResult> {
        let bucket = normalize_bucket(&request.bucket)?;
        let gs_path = object_path(bucket, &request.name);

        info!("Uploading {} to {}", request.filepath.display(), gs_path);

        let args = build_args(
            request.content_type.as_deref(),
            &request.filepath,
            &gs_path,
        );
        self.runner.run(&self.config.gsutil_path, &args).await?;

        Ok(UploadResult {
            url: viewer_url(bucket, &request.name, request.authenticated_link),
            gs_path,
        })
    }

    /// Uploads and returns the viewer link, or an empty string if anything
    /// went wrong. Never fails; an empty string says nothing about whether the
    /// object actually landed in the bucket.
    pub async fn upload(&self, request: &UploadRequest) -> String {
        match self.try_upload(request).await {
            Ok(result) => result.url,
            Err(e) => {
                debug!("Upload of {} discarded: {}", request.name, e);
                String::new()
            }
        }
    }
}
