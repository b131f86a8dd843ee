//! Ergonomic error context helpers.
//!
//! Provides an extension trait for adding context to `Result` types,
//! converting IO errors into context-rich `ConsentError` variants.

use crate::base::error::ConsentError;
use std::io;
use std::path::Path;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Attach the config file path to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use cookieconsent::base::context::IoResultExt;
    ///
    /// let json = std::fs::read_to_string(path).config_context(path)?;
    /// // Error: "Unable to read cookie consent config consent.json: No such file or directory"
    /// ```
    fn config_context(self, path: &Path) -> Result<T, ConsentError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn config_context(self, path: &Path) -> Result<T, ConsentError> {
        self.map_err(|e| ConsentError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
