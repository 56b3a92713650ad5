//! Configuration errors.

use std::io;
use std::path::PathBuf;

use backdrop_field::FieldError;
use thiserror::Error;

/// Errors raised while loading, validating or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a home directory for the config file")]
    NoHomeDir,

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("fps must be at least 1")]
    ZeroFps,

    #[error("cell size must be non-zero, got {width}x{height}")]
    ZeroCellSize { width: u16, height: u16 },

    #[error(transparent)]
    Field(#[from] FieldError),
}
