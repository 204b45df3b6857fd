//! # places-adapter-uploads-fs
//!
//! Local filesystem implementation of the `ImageStore` port.
//!
//! Uploaded images are written under a single root directory with a random
//! file name, keeping only the extension of the name the client sent. The
//! returned path (root joined with the file name) is what gets stored on
//! the place and later handed back for removal.

mod error;

use std::future::Future;
use std::path::{Component, Path, PathBuf};

use places_app::ports::ImageStore;
use places_domain::error::{PlacesError, ValidationError};

pub use error::UploadError;

/// Extensions accepted for uploaded images.
const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Image store writing files below `root`.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the stored images.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn target_for(&self, file_name: &str) -> Result<PathBuf, UploadError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                UploadError::Domain(ValidationError::UnsupportedImage(file_name.to_string()).into())
            })?;
        Ok(self
            .root
            .join(format!("{}.{extension}", uuid::Uuid::new_v4())))
    }

    fn check_inside_root(&self, path: &Path) -> Result<(), UploadError> {
        let escapes = path
            .components()
            .any(|component| matches!(component, Component::ParentDir));
        if escapes || !path.starts_with(&self.root) {
            return Err(UploadError::OutsideRoot(path.display().to_string()));
        }
        Ok(())
    }

    async fn write(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, UploadError> {
        let target = self.target_for(file_name)?;
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(&target, bytes).await?;
        tracing::debug!(path = %target.display(), "image stored");
        Ok(target.to_string_lossy().into_owned())
    }

    async fn delete(&self, path: &str) -> Result<(), UploadError> {
        let path = Path::new(path);
        self.check_inside_root(path)?;
        tokio::fs::remove_file(path).await?;
        tracing::debug!(path = %path.display(), "image removed");
        Ok(())
    }
}

impl ImageStore for LocalImageStore {
    fn store(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, PlacesError>> + Send {
        async move { Ok(self.write(file_name, bytes).await?) }
    }

    fn remove(&self, path: &str) -> impl Future<Output = Result<(), PlacesError>> + Send {
        async move { Ok(self.delete(path).await?) }
    }
}
