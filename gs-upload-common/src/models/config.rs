use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const GSUTIL_NAME: &str = "gsutil";

/// Where the uploader finds the external `gsutil` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GsutilConfig {
    pub gsutil_path: PathBuf,
}

impl GsutilConfig {
    pub fn new(gsutil_path: impl Into<PathBuf>) -> Self {
        Self {
            gsutil_path: gsutil_path.into(),
        }
    }

    /// Uses the gsutil checkout vendored under catapult in a source tree.
    pub fn from_source_root(root: impl AsRef<Path>) -> Self {
        Self::new(
            root.as_ref()
                .join("third_party")
                .join("catapult")
                .join("third_party")
                .join("gsutil")
                .join("gsutil.py"),
        )
    }
}

impl Default for GsutilConfig {
    fn default() -> Self {
        // Bare name lets the OS search PATH at spawn time
        let gsutil_path = which::which(GSUTIL_NAME).unwrap_or_else(|_| PathBuf::from(GSUTIL_NAME));
        Self { gsutil_path }
    }
}
