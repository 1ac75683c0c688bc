//! Fixture configuration.
//!
//! Controls where fixture roots are allocated and how they are named. Values
//! can be built in code or read from TOML:
//!
//! ```toml
//! prefix = "mytests-"
//! parent_dir = "/var/tmp"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TreeError};

pub const DEFAULT_PREFIX: &str = "filetree-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Prefix of the generated root directory name.
    pub prefix: String,
    /// Directory the root is created in. `None` uses the system temp dir.
    pub parent_dir: Option<PathBuf>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            prefix: DEFAULT_PREFIX.to_string(),
            parent_dir: None,
        }
    }
}

impl TreeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| TreeError::Config(e.to_string()))
    }

    /// Read a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let text = fs::read_to_string(p)
            .map_err(|e| TreeError::Config(format!("reading {}: {e}", p.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_parent_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.parent_dir = Some(dir.into());
        self
    }

    /// Directory new roots are allocated in.
    pub fn parent_dir(&self) -> PathBuf {
        self.parent_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
