use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tokio::fs;

/// Disk-backed object store. Buckets are directories under the uploads
/// root, created on first use; objects are served read-only via the
/// `/uploads` static route.
#[derive(Clone)]
pub struct StorageService {
    root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub path: String,
    pub url: String,
    pub digest: String,
}

impl StorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn store(&self, bucket: &str, extension: &str, data: &[u8]) -> Result<StoredObject> {
        if data.is_empty() {
            return Err(Error::BadRequest("Uploaded file is empty".to_string()));
        }

        let bucket_dir = self.root.join(bucket);
        fs::create_dir_all(&bucket_dir).await?;

        let object_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);
        let object_path = bucket_dir.join(&object_name);
        fs::write(&object_path, data).await.map_err(|e| {
            tracing::error!(bucket, error = %e, "failed to persist upload");
            Error::Io(e)
        })?;

        let digest = hex::encode(Sha256::digest(data));
        Ok(StoredObject {
            bucket: bucket.to_string(),
            path: object_path.to_string_lossy().into_owned(),
            url: format!("/uploads/{}/{}", bucket, object_name),
            digest,
        })
    }
}

/// Rejects extensions outside the caller's allowlist and checks magic
/// bytes for the formats where the prefix is stable.
pub fn validate_upload(filename: &str, data: &[u8], allowed: &[&str]) -> Result<String> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    if !allowed.contains(&ext.as_str()) {
        return Err(Error::BadRequest(format!(
            "File type .{} is not allowed",
            ext
        )));
    }

    if ext == "pdf" && !data.starts_with(b"%PDF") {
        return Err(Error::BadRequest("Invalid PDF file content".into()));
    }
    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }

    Ok(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_disallowed_extension() {
        let err = validate_upload("resume.exe", b"MZ", &["pdf", "doc", "docx"]).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn rejects_mismatched_magic_bytes() {
        let err = validate_upload("resume.pdf", b"plain text", &["pdf"]).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert!(validate_upload("resume.pdf", b"%PDF-1.7 ...", &["pdf"]).is_ok());
    }

    #[tokio::test]
    async fn stores_and_digests_objects() {
        let root = std::env::temp_dir().join(format!("hiringai-storage-{}", uuid::Uuid::new_v4()));
        let storage = StorageService::new(&root);
        let stored = storage.store("resumes", "pdf", b"%PDF-1.7 data").await.unwrap();
        assert_eq!(stored.bucket, "resumes");
        assert!(stored.url.starts_with("/uploads/resumes/"));
        assert_eq!(stored.digest.len(), 64);
        let on_disk = tokio::fs::read(&stored.path).await.unwrap();
        assert_eq!(on_disk, b"%PDF-1.7 data");
        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
