//! # Preview Host Configuration
//!
//! Loaded from environment variables (a `.env` file is honoured by `main`):
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `SITE_ADDR` | `127.0.0.1:8080` | Bind address |
//! | `SITE_DIST_DIR` | `dist` | Built front-end bundle to serve |
//! | `LOG_LEVEL` | `info` | Tracing filter level |

use std::net::SocketAddr;
use std::path::PathBuf;

use lib_utils::envs::{self, get_env_or, get_env_parse_or};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    /// Directory holding `index.html` and the wasm bundle
    pub dist_dir: PathBuf,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();

        let bind_address = get_env_parse_or("SITE_ADDR", defaults.bind_address)?;
        let dist_dir = PathBuf::from(get_env_or("SITE_DIST_DIR", DEFAULT_DIST_DIR));
        let log_level = get_env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase();

        Ok(Self {
            bind_address,
            dist_dir,
            log_level,
        })
    }

    /// Fail fast if the bundle directory is missing.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.dist_dir.is_dir() {
            return Err(Error::MissingDist(self.dist_dir.clone()));
        }
        Ok(())
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

// region:    --- Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Env(#[from] envs::Error),

    #[error("dist directory {0:?} does not exist; build the front end with `trunk build`")]
    MissingDist(PathBuf),
}
// endregion: --- Error
