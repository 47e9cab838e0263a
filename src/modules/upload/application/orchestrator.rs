use std::path::PathBuf;
use std::sync::Arc;

use base64::engine::general_purpose;
use base64::Engine;
use futures::future::try_join_all;
use thiserror::Error;

use crate::modules::upload::application::ports::outgoing::{ImageStore, ImageStoreError};
use crate::modules::upload::application::upload_policy::{mime_for_file_name, UploadPolicy};

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("too many files selected: {got} (max {max})")]
    TooManyFiles { max: usize, got: usize },
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("file name too long: {0}")]
    NameTooLong(String),
    #[error("file too large: {name} ({size} bytes)")]
    TooLarge { name: String, size: u64 },
    #[error("could not read {name}: {reason}")]
    Unreadable { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("could not read {name}: {reason}")]
    Read { name: String, reason: String },
    #[error("could not store {name}: {source}")]
    Store {
        name: String,
        source: ImageStoreError,
    },
}

/// Transient, client-side view of a selected image.
///
/// `source: None` marks an already-persisted image seeded by edit mode; its
/// `path` is the stored URL and it must never be re-uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub name: String,
    pub path: String,
    pub progress: u8,
    pub source: Option<PathBuf>,
}

impl FilePreview {
    /// Synthetic preview for the image a record already owns.
    pub fn persisted(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path.clone(),
            path,
            progress: 100,
            source: None,
        }
    }
}

/// Turns selected local files into persisted path strings.
///
/// Selection produces previews only; the persisted encoding happens once, at
/// submission time, via [`UploadOrchestrator::materialize`].
pub struct UploadOrchestrator {
    store: Arc<dyn ImageStore>,
    policy: UploadPolicy,
}

impl UploadOrchestrator {
    pub fn new(store: Arc<dyn ImageStore>, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }

    /// Validate a selection and build its previews. The returned list is a
    /// full replacement for any previous selection, never an append.
    pub async fn select_files(&self, paths: &[PathBuf]) -> Result<Vec<FilePreview>, SelectionError> {
        if paths.len() > self.policy.max_files {
            return Err(SelectionError::TooManyFiles {
                max: self.policy.max_files,
                got: paths.len(),
            });
        }

        let mut previews = Vec::with_capacity(paths.len());
        for path in paths {
            previews.push(self.preview_one(path).await?);
        }
        Ok(previews)
    }

    async fn preview_one(&self, path: &PathBuf) -> Result<FilePreview, SelectionError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        if name.len() > self.policy.max_file_name_len {
            return Err(SelectionError::NameTooLong(name));
        }

        let mime = mime_for_file_name(&name)
            .filter(|m| self.policy.allows_mime(m))
            .ok_or_else(|| SelectionError::UnsupportedType(name.clone()))?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| SelectionError::Unreadable {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        let size = bytes.len() as u64;
        if size > self.policy.max_file_size_bytes {
            return Err(SelectionError::TooLarge { name, size });
        }

        Ok(FilePreview {
            path: format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(&bytes)),
            name,
            progress: 0,
            source: Some(path.clone()),
        })
    }

    /// Resolve every preview to a persisted path, in input order.
    ///
    /// Reads and stores are gathered concurrently but completion is gated on
    /// all of them; one failure rejects the whole batch. Previews without a
    /// source keep their stored path untouched.
    pub async fn materialize(&self, previews: &[FilePreview]) -> Result<Vec<String>, UploadError> {
        let futures = previews.iter().map(|preview| async move {
            match &preview.source {
                None => Ok(preview.path.clone()),
                Some(path) => {
                    let bytes =
                        tokio::fs::read(path)
                            .await
                            .map_err(|e| UploadError::Read {
                                name: preview.name.clone(),
                                reason: e.to_string(),
                            })?;

                    let mime = mime_for_file_name(&preview.name)
                        .unwrap_or("application/octet-stream");

                    self.store
                        .put(bytes, mime)
                        .await
                        .map_err(|source| UploadError::Store {
                            name: preview.name.clone(),
                            source,
                        })
                }
            }
        });

        try_join_all(futures).await
    }
}
