use crate::error::AppError;
use crate::source::DocumentSource;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MAX_HISTORY: usize = 99_999;
pub const DEFAULT_SEED_FILE: &str = "data/lotto.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub max_history: usize,
    pub seed_source: DocumentSource,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("LOTTO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let max_history = match get("LOTTO_MAX_HISTORY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::ConfigError(format!(
                        "LOTTO_MAX_HISTORY must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            None => DEFAULT_MAX_HISTORY,
        };

        let seed_source = match get("LOTTO_SEED_URL") {
            Some(url) => DocumentSource::Url(url),
            None => DocumentSource::File(PathBuf::from(
                get("LOTTO_SEED_FILE").unwrap_or_else(|| DEFAULT_SEED_FILE.to_string()),
            )),
        };

        Ok(Config {
            data_dir,
            max_history,
            seed_source,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lotto_stats")
}
