use std::path::PathBuf;
use thiserror::Error;

/// Failure while downloading the upstream repository archive.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to download {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("Rate limited after {0} retries")]
    RateLimited(u32),
    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while unpacking the downloaded archive.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid or corrupt ZIP: {0}")]
    InvalidArchive(#[from] zip::result::ZipError),
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while assembling the resource pack.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Emoji catalog not found: {0}")]
    CatalogMissing(PathBuf),
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PackError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type PackResult<T> = Result<T, PackError>;
