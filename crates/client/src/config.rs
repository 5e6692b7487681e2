//! Client configuration from the process environment.

use std::env;
use std::path::PathBuf;

/// Directories the client needs to run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding the content catalogs (`items.ron`, ...).
    pub data_dir: PathBuf,
    /// Directory save files are written to.
    pub save_dir: PathBuf,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WAYFARER_DATA_DIR` - Content directory (default: `content`)
    /// - `WAYFARER_SAVE_DIR` - Save directory (default: platform data dir)
    pub fn from_env() -> Self {
        let data_dir = env::var("WAYFARER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("content"));

        let save_dir = env::var("WAYFARER_SAVE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_save_dir());

        Self { data_dir, save_dir }
    }
}

fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wayfarer")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("saves"))
}
