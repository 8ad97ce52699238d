use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Invalid bucket: {0:?}")]
    InvalidBucket(String),

    #[error("gsutil process error: {0}")]
    ProcessError(String),

    #[error("gsutil command failed ({status}): {stderr}")]
    CommandFailed { status: String, stderr: String },
}
