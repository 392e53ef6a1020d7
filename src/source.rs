use crate::error::AppError;
use indicatif::ProgressBar;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;

/// Where the default history document comes from when nothing is persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl DocumentSource {
    /// Returns the raw document body. Every failure maps to `LoadFailure`.
    pub fn fetch(&self) -> Result<String, AppError> {
        match self {
            DocumentSource::File(path) => {
                debug!(path = %path.display(), "reading default document");
                fs::read_to_string(path).map_err(|e| {
                    AppError::LoadFailure(format!("{}: {}", path.display(), e))
                })
            }
            DocumentSource::Url(url) => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message(format!("Fetching {}", url));
                spinner.enable_steady_tick(Duration::from_millis(100));

                let result = fetch_url(url);
                spinner.finish_and_clear();
                result
            }
        }
    }
}

fn fetch_url(url: &str) -> Result<String, AppError> {
    let mut retry_count = 0;

    loop {
        let response = ureq::get(url)
            .set("User-Agent", "lotto_stats/0.1.0")
            .call();

        match response {
            Ok(resp) => {
                return resp
                    .into_string()
                    .map_err(|e| AppError::LoadFailure(e.to_string()));
            }
            Err(ureq::Error::Status(429, _)) => {
                if retry_count >= MAX_RETRIES {
                    return Err(AppError::LoadFailure(
                        "HTTP error! status: 429".to_string(),
                    ));
                }
                let wait_ms = 2000 * (retry_count + 1) as u64;
                warn!(wait_ms, "rate limited while fetching default document, retrying");
                thread::sleep(Duration::from_millis(wait_ms));
                retry_count += 1;
            }
            Err(ureq::Error::Status(code, _)) => {
                return Err(AppError::LoadFailure(format!(
                    "HTTP error! status: {}",
                    code
                )));
            }
            Err(e) => {
                return Err(AppError::LoadFailure(e.to_string()));
            }
        }
    }
}
