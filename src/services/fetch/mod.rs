//! Downloads the upstream repository archive.

mod download;
mod progress;

pub use download::{
    archive_url, fetch_archive, fetch_repo_archive, http_client, read_body, FetchedArchive,
    SizeMismatch,
};
pub use progress::{ConsoleProgress, DownloadProgress, NoProgress};

#[cfg(test)]
#[path = "tests/download_tests.rs"]
mod tests;
