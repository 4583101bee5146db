use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can go wrong while inspecting a configuration source.
///
/// Only [`InspectError::UnexpectedIo`] ends a run with an error; the other
/// classes are turned into report text by the inspectors.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("configuration source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("settings loader could not read {}: {reason}", path.display())]
    LoaderUnavailable { path: PathBuf, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    UnexpectedIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, InspectError>;
