use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Environment variable names
pub const KIKOO_LOG: &str = "KIKOO_LOG";
pub const KIKOO_LOG_DIR: &str = "KIKOO_LOG_DIR";
pub const KIKOO_FLOOD_THREADS: &str = "KIKOO_FLOOD_THREADS";

pub const DEFAULT_FLOOD_THREADS: NonZeroUsize = match NonZeroUsize::new(42) {
    Some(n) => n,
    None => unreachable!(),
};

/// Process-level settings resolved from environment variables and `.env`
/// files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Tracing filter directive; logging is disabled when `None`.
    pub log_filter: Option<String>,
    pub log_dir: PathBuf,
    pub flood_threads: NonZeroUsize,
}

impl Environment {
    /// Loads `.env` files from `cwd` and its ancestors, then reads the
    /// process environment.
    pub fn from_cwd(cwd: &Path) -> Self {
        dot_env(cwd);
        Self::from_process()
    }

    /// Reads the process environment only. Unset or unparsable values fall
    /// back to defaults.
    pub fn from_process() -> Self {
        Self {
            log_filter: parse_env::<String>(KIKOO_LOG),
            log_dir: parse_env::<PathBuf>(KIKOO_LOG_DIR).unwrap_or_else(default_log_dir),
            flood_threads: parse_env::<NonZeroUsize>(KIKOO_FLOOD_THREADS)
                .unwrap_or(DEFAULT_FLOOD_THREADS),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kikoo")
        .join("logs")
}

/// Parses a non-empty environment variable with `FromStr`.
fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .and_then(|val| T::from_str(&val).ok())
}

/// Loads `.env` files walking up from `cwd`. Closer files win, and variables
/// already set in the process are never overridden.
fn dot_env(cwd: &Path) {
    let mut paths = vec![];
    let mut current = PathBuf::new();

    for component in cwd.components() {
        current.push(component);
        paths.push(current.clone());
    }

    paths.reverse();

    for path in paths {
        let env_file = path.join(".env");
        if env_file.is_file() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => tracing::debug!(path = %env_file.display(), "Loaded .env file"),
                Err(error) => {
                    tracing::warn!(path = %env_file.display(), %error, "Skipping unreadable .env file")
                }
            }
        }
    }
}
