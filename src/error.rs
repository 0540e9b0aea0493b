//! Error types for site-preflight operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the site bundle or configuring a run.
///
/// Load errors are stored per asset in the bundle rather than returned from
/// the run as a whole, so they need to be cheap to clone into check results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// The site root directory does not exist
    #[error("site directory '{}' not found", path.display())]
    MissingRoot { path: PathBuf },

    /// A required asset is absent from the site root
    #[error("required file '{asset}' not found")]
    MissingAsset { asset: String },

    /// A required asset exists but holds no content
    #[error("file '{asset}' is empty")]
    EmptyAsset { asset: String },

    /// Reading an asset failed
    #[error("I/O error in {context}: {message}")]
    Io { context: String, message: String },

    /// Invalid runtime configuration
    #[error("usage error: {message}")]
    Usage { message: String },
}
