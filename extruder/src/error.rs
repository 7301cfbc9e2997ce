//! Error types for an extrusion run

use extruder_io::IoError;
use extruder_transform::ExtrusionError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop an extrusion run.
///
/// Each failure happens before the destination file is replaced, so an
/// existing destination is never left half written.
#[derive(Error, Debug)]
pub enum Error {
    /// The tile size or sheet dimensions were rejected by the transform
    #[error(transparent)]
    Extrusion(#[from] ExtrusionError),

    /// The source image does not exist
    #[error("{} does not exist", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source image exists but could not be read or decoded
    #[error("cannot read {}: {source}", path.display())]
    SourceUnreadable { path: PathBuf, source: IoError },

    /// The destination cannot be written in the requested format
    #[error("cannot write {}: {source}", path.display())]
    UnsupportedOutput { path: PathBuf, source: IoError },

    /// Encoding or writing the destination failed
    #[error("failed to write {}: {source}", path.display())]
    DestinationWriteFailure { path: PathBuf, source: IoError },
}

/// Result type for extrusion runs
pub type Result<T> = std::result::Result<T, Error>;
