//! On-disk locations used by the client.
//!
//! Everything lives under one directory, `~/.flexjet` by default:
//!
//! ```text
//! ~/.flexjet/
//!   config.json
//!   logs/flexjet.jsonl
//! ```

use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = ".flexjet";
const CONFIG_FILE_NAME: &str = "config.json";
const LOGS_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "flexjet.jsonl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    root: PathBuf,
}

impl Paths {
    /// Paths rooted in the current user's home directory.
    pub fn new() -> CoreResult<Self> {
        dirs::home_dir()
            .map(|home| Self::with_base_dir(home.join(APP_DIR_NAME)))
            .ok_or_else(|| CoreError::Path("home directory is not known".to_string()))
    }

    /// Paths rooted at `base_dir` instead of the home directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { root: base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR_NAME)
    }

    /// JSONL file written by the logging layer.
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILE_NAME)
    }

    /// Create the root and log directories if missing.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}
