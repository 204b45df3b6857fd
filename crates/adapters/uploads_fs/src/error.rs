//! Upload adapter error types.

use places_domain::error::PlacesError;

/// Errors specific to the filesystem image store.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Reading or writing the file failed.
    #[error("image file operation failed")]
    Io(#[from] std::io::Error),

    /// The path handed back for removal is not inside the upload directory.
    #[error("path {0} is outside the upload directory")]
    OutsideRoot(String),

    /// A domain-level error (validation, etc.).
    #[error("domain error")]
    Domain(#[source] PlacesError),
}

impl UploadError {
    /// Convert into a [`PlacesError`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> PlacesError {
        match self {
            Self::Domain(err) => err,
            other => PlacesError::storage(other),
        }
    }
}

impl From<UploadError> for PlacesError {
    fn from(err: UploadError) -> Self {
        err.into_domain()
    }
}
