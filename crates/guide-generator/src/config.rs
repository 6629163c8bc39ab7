use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_DAILY_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub daily_count: usize,
    pub seed: Option<u64>,
    pub trends_html: Vec<PathBuf>,
}

impl Config {
    /// Required:
    /// - `GUIDE_DATA_DIR` (directory receiving one JSON file per guide)
    ///
    /// Optional:
    /// - `GUIDE_DAILY_COUNT` (default: 3)
    /// - `GUIDE_SEED` (u64; unset means entropy-seeded)
    /// - `GUIDE_TRENDS_HTML` (path list of saved trends pages)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let data_dir = get("GUIDE_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Config("GUIDE_DATA_DIR environment variable is required".to_string())
            })?;

        let daily_count = match get("GUIDE_DAILY_COUNT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::Config(format!(
                        "GUIDE_DAILY_COUNT must be a positive integer, got {raw:?}"
                    )))
                }
            },
            None => DEFAULT_DAILY_COUNT,
        };

        let seed = get("GUIDE_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    AppError::Config(format!("GUIDE_SEED must be a u64, got {raw:?}"))
                })
            })
            .transpose()?;

        let trends_html = get("GUIDE_TRENDS_HTML")
            .map(|raw| std::env::split_paths(&raw).collect())
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            daily_count,
            seed,
            trends_html,
        })
    }
}
