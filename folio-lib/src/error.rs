//! Typed errors for the two boundaries of a page session: loading the
//! profile document and rendering it.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a usable profile document
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document could not be read (missing file, permission denied, ...)
    #[error("Failed to read profile document {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the profile shape
    #[error("Failed to parse profile document {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure partway through a render pass.
///
/// Slots written before the failing section keep their content.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A nested object the section depends on is absent from the profile
    #[error("Profile has no '{0}' section")]
    MissingSection(&'static str),
}
