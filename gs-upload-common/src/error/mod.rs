mod types;

pub use types::UploadError;
