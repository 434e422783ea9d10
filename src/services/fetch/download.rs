use log::{info, warn};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::io::{ErrorKind, Read};
use std::time::Duration;

use super::progress::DownloadProgress;
use crate::types::errors::FetchError;

/// Body is read in 1 KiB blocks; progress is reported after each one.
const BLOCK_SIZE: usize = 1024;

/// Maximum number of retries on rate-limit (HTTP 429).
pub(crate) const MAX_RETRIES: u32 = 3;

#[cfg(not(test))]
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
#[cfg(test)]
const INITIAL_BACKOFF: Duration = Duration::from_millis(10);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Limit for the response headers and for each body read, not the whole
/// transfer: the blocking client restarts it on every `read`.
const READ_TIMEOUT: Duration = Duration::from_secs(120);

/// Declared and received body length disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub expected: u64,
    pub actual: u64,
}

/// A downloaded archive held in memory.
#[derive(Debug)]
pub struct FetchedArchive {
    pub bytes: Vec<u8>,
    /// `Content-Length` announced by the server, when non-zero.
    pub declared_len: Option<u64>,
    pub size_mismatch: Option<SizeMismatch>,
}

/// Branch snapshot URL for a repository hosted at `base_url`.
pub fn archive_url(base_url: &str, repo_id: &str, branch: &str) -> String {
    format!(
        "{}/{repo_id}/archive/refs/heads/{branch}.zip",
        base_url.trim_end_matches('/')
    )
}

/// Blocking client used for archive downloads.
pub fn http_client() -> Result<Client, FetchError> {
    Ok(Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(READ_TIMEOUT)
        .build()?)
}

/// Download the zip snapshot of `repo_id` at `branch`.
pub fn fetch_repo_archive(
    base_url: &str,
    repo_id: &str,
    branch: &str,
    progress: &mut dyn DownloadProgress,
) -> Result<FetchedArchive, FetchError> {
    let url = archive_url(base_url, repo_id, branch);
    info!("Downloading repository archive: {url}");

    let client = http_client()?;
    fetch_archive(&client, &url, progress)
}

/// GET `url` and read the whole body.
///
/// Any status other than 200 is an error. A length mismatch is logged and
/// recorded on the result but is not fatal.
pub fn fetch_archive(
    client: &Client,
    url: &str,
    progress: &mut dyn DownloadProgress,
) -> Result<FetchedArchive, FetchError> {
    let response = request_with_retry(client, url)?;

    if response.status() != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let declared_len = response.content_length();
    read_body(response, declared_len, progress)
}

/// Drain `reader` into memory, reporting progress after every block.
pub fn read_body<R: Read>(
    mut reader: R,
    declared_len: Option<u64>,
    progress: &mut dyn DownloadProgress,
) -> Result<FetchedArchive, FetchError> {
    let declared_len = declared_len.filter(|&len| len > 0);
    progress.start(declared_len);

    let mut bytes = Vec::new();
    let mut block = [0u8; BLOCK_SIZE];
    loop {
        let read = match reader.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                progress.finish();
                return Err(e.into());
            }
        };
        bytes.extend_from_slice(&block[..read]);
        progress.advance(bytes.len() as u64);
    }
    progress.finish();

    let actual = bytes.len() as u64;
    let size_mismatch = match declared_len {
        Some(expected) if expected != actual => {
            warn!("Size mismatch: expected {expected} bytes, got {actual} bytes");
            Some(SizeMismatch { expected, actual })
        }
        _ => None,
    };

    Ok(FetchedArchive {
        bytes,
        declared_len,
        size_mismatch,
    })
}

/// GET with exponential backoff on 429.
fn request_with_retry(client: &Client, url: &str) -> Result<Response, FetchError> {
    let mut delay = INITIAL_BACKOFF;

    for attempt in 0..=MAX_RETRIES {
        let response = client.get(url).send()?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if attempt < MAX_RETRIES {
                warn!(
                    "Rate limited (429), retry {}/{} in {:?}",
                    attempt + 1,
                    MAX_RETRIES,
                    delay
                );
                std::thread::sleep(delay);
                delay *= 2;
                continue;
            }
            break;
        }

        return Ok(response);
    }

    Err(FetchError::RateLimited(MAX_RETRIES))
}
