use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{}:{line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: LineError,
    },

    #[error("unsupported output format for {}, expected .jpg, .jpeg or .png", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("preview window failed: {0}")]
    Preview(String),
}

impl Error {
    /// Opening an input splits into the missing-file case and everything else.
    pub fn open(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Why a single dump line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 3 values, found {0}")]
    FieldCount(usize),

    #[error("`{field}` is not an integer: {source}")]
    NotAnInteger {
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("`{0}` is not a 6 digit RRGGBB hex value")]
    BadHex(String),
}
