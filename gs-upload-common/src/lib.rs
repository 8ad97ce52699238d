pub mod error;
pub mod gs_path;
pub mod models;
pub mod naming;
pub mod runner;
pub mod uploader;

pub use error::UploadError;
pub type Result<T> = std::result::Result<T, UploadError>;

pub use models::Device;
pub use naming::{unique_name, unique_name_at};
pub use runner::{CommandRunner, TokioCommandRunner};
pub use uploader::Uploader;
