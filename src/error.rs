//! Error kinds surfaced by the pipeline.
//!
//! Every failure carries the path it occurred on so batch logs stay
//! attributable. The orchestrator decides continue-vs-abort per kind:
//! decode failures are fatal for the batch, everything else is reported
//! and skipped.
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The input image could not be decoded.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The per-file output directory could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The processed edge map could not be encoded/written.
    WriteImage {
        path: PathBuf,
        source: image::ImageError,
    },
    /// A serializer or the batch driver hit a filesystem error.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The JSON config file could not be read or parsed.
    Config { path: PathBuf, detail: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
            Self::CreateDir { path, source } => {
                write!(f, "failed to create {}: {source}", path.display())
            }
            Self::WriteImage { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "i/o error on {}: {source}", path.display())
            }
            Self::Config { path, detail } => {
                write!(f, "bad config {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::WriteImage { source, .. } => Some(source),
            Self::CreateDir { source, .. } | Self::Io { source, .. } => Some(source),
            Self::Config { .. } => None,
        }
    }
}

impl Error {
    /// Whether this failure aborts the remaining batch.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
