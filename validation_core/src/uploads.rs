//! Uploaded-file metadata.
//!
//! Upload-aware rules (`file`, `image`, `dimensions`, `mimetypes`, and the
//! size measurement of `min`/`max`/`size`) consult this source instead of
//! the submitted field value. It is threaded explicitly through
//! `validate`; the engine itself never reads it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Error code reported for a fully successful upload.
pub const UPLOAD_OK: i32 = 0;

/// Metadata for one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Location of the uploaded payload in temporary storage
    pub tmp_path: PathBuf,

    /// Transport error code; [`UPLOAD_OK`] means the upload succeeded
    pub error: i32,
}

impl UploadedFile {
    /// Creates metadata for a successful upload.
    pub fn new(tmp_path: impl Into<PathBuf>) -> Self {
        Self {
            tmp_path: tmp_path.into(),
            error: UPLOAD_OK,
        }
    }

    /// Creates metadata for a failed upload with the given error code.
    pub fn with_error(tmp_path: impl Into<PathBuf>, error: i32) -> Self {
        Self {
            tmp_path: tmp_path.into(),
            error,
        }
    }

    /// Returns true if the upload reported no transport error.
    pub fn is_ok(&self) -> bool {
        self.error == UPLOAD_OK
    }

    /// Returns true if the temporary file still exists.
    pub fn tmp_exists(&self) -> bool {
        self.tmp_path.exists()
    }

    /// Returns the payload size in kibibytes, rounded.
    ///
    /// `None` if the temporary file cannot be inspected.
    pub fn size_kib(&self) -> Option<u64> {
        let len = std::fs::metadata(&self.tmp_path).ok()?.len();
        Some((len as f64 / 1024.0).round() as u64)
    }

    /// Returns the temporary path for reading the payload.
    pub fn path(&self) -> &Path {
        &self.tmp_path
    }
}

/// Uploaded-file metadata keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFiles {
    entries: HashMap<String, UploadedFile>,
}

impl UploadedFiles {
    /// Creates an empty upload table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an upload for a field, replacing any previous entry.
    pub fn insert(&mut self, field: impl Into<String>, file: UploadedFile) {
        self.entries.insert(field.into(), file);
    }

    /// Gets the upload metadata for a field.
    pub fn get(&self, field: &str) -> Option<&UploadedFile> {
        self.entries.get(field)
    }

    /// Returns true if an upload was registered for the field.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Returns true if no uploads were registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_sentinel() {
        let ok = UploadedFile::new("/tmp/upload-1");
        assert!(ok.is_ok());

        let failed = UploadedFile::with_error("/tmp/upload-2", 4);
        assert!(!failed.is_ok());
    }

    #[test]
    fn test_missing_tmp_file() {
        let upload = UploadedFile::new("/nonexistent/upload");
        assert!(!upload.tmp_exists());
        assert_eq!(upload.size_kib(), None);
    }

    #[test]
    fn test_table_lookup() {
        let mut uploads = UploadedFiles::new();
        assert!(uploads.is_empty());

        uploads.insert("avatar", UploadedFile::new("/tmp/avatar.png"));
        assert!(uploads.contains("avatar"));
        assert!(!uploads.contains("banner"));
        assert_eq!(uploads.get("avatar").unwrap().error, UPLOAD_OK);
    }
}
