//! Shell settings, read from an INI file:
//!
//! ```ini
//! [DEFAULT]
//! username = user
//! hostname = localhost
//! filesystem_path = /path/to/fs.zip
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::core::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShellConfig {
    pub username: String,
    pub hostname: String,
    /// Host path of the zip archive.
    pub filesystem_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(alias = "DEFAULT")]
    default: ShellConfig,
}

impl ShellConfig {
    pub fn new<U, H, P>(username: U, hostname: H, filesystem_path: P) -> Self
    where
        U: Into<String>,
        H: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            username: username.into(),
            hostname: hostname.into(),
            filesystem_path: filesystem_path.into(),
        }
    }

    /// Loads settings from the `[DEFAULT]` section of the INI file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file: ConfigFile = Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Ini).required(true))
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("invalid configuration file {}", path.display()))?;
        Ok(file.default)
    }
}
