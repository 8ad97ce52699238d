pub mod config;
pub mod device;
pub mod request;

pub use config::GsutilConfig;
pub use device::{Device, SerialDevice};
pub use request::{UploadRequest, UploadResult};
