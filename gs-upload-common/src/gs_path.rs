//! Bucket normalization and the URL shapes handed back to callers.

use crate::{Result, UploadError};

pub const GS_SCHEME: &str = "gs://";

const PUBLIC_URL: &str = "https://storage.googleapis.com";
const AUTHENTICATED_URL: &str = "https://storage.cloud.google.com";

/// Strips one leading `gs://` and one trailing `/` from a bucket name.
pub fn normalize_bucket(raw: &str) -> Result<&str> {
    let bucket = raw.strip_prefix(GS_SCHEME).unwrap_or(raw);
    let bucket = bucket.strip_suffix('/').unwrap_or(bucket);

    if bucket.is_empty() {
        return Err(UploadError::InvalidBucket(raw.to_string()));
    }

    Ok(bucket)
}

/// `gs://<bucket>/<name>`, the address gsutil copies to.
pub fn object_path(bucket: &str, name: &str) -> String {
    format!("{}{}/{}", GS_SCHEME, bucket, name)
}

/// Browser link for an uploaded object.
///
/// Authenticated links require the viewer to be signed into an account with
/// access to the bucket. Public links work without sign-in but only for
/// publicly readable buckets.
pub fn viewer_url(bucket: &str, name: &str, authenticated: bool) -> String {
    let base = if authenticated {
        AUTHENTICATED_URL
    } else {
        PUBLIC_URL
    };
    format!("{}/{}/{}", base, bucket, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_all_bucket_spellings() {
        for bucket in ["gs://b/", "gs://b", "b/", "b"] {
            assert_eq!(normalize_bucket(bucket).unwrap(), "b", "input {}", bucket);
        }
    }

    #[test]
    fn normalize_strips_only_once() {
        assert_eq!(normalize_bucket("gs://gs://b").unwrap(), "gs://b");
        assert_eq!(normalize_bucket("b//").unwrap(), "b/");
    }

    #[test]
    fn normalize_rejects_empty_bucket() {
        for bucket in ["", "gs://", "gs:///", "/"] {
            assert!(matches!(
                normalize_bucket(bucket),
                Err(UploadError::InvalidBucket(_))
            ));
        }
    }

    #[test]
    fn object_path_uses_gs_scheme() {
        assert_eq!(
            object_path("mybucket", "dir/f.txt"),
            "gs://mybucket/dir/f.txt"
        );
    }

    #[test]
    fn viewer_url_selects_host() {
        assert_eq!(
            viewer_url("mybucket", "f.txt", true),
            "https://storage.cloud.google.com/mybucket/f.txt"
        );
        assert_eq!(
            viewer_url("mybucket", "f.txt", false),
            "https://storage.googleapis.com/mybucket/f.txt"
        );
    }
}
