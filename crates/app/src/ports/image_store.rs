//! Image store port: where uploaded place images live.

use std::future::Future;

use places_domain::error::PlacesError;

/// Storage for uploaded image files, addressed by the path it hands out.
pub trait ImageStore {
    /// Persist `bytes` and return the path under which the file was stored.
    ///
    /// `file_name` is the name the client uploaded and is only used to pick
    /// an extension.
    fn store(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, PlacesError>> + Send;

    /// Remove a previously stored file.
    fn remove(&self, path: &str) -> impl Future<Output = Result<(), PlacesError>> + Send;
}
