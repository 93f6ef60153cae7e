//! config.json から CineConfig を読む ConfigLoader 実装

use crate::domain::CineConfig;
use crate::ports::outbound::ConfigLoader;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

pub struct FileConfigLoader {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<CineConfig, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(CineConfig::default());
        }
        let contents = self.fs.read_to_string(&self.path)?;
        CineConfig::parse_json(&contents)
            .map_err(|e| Error::env(format!("{}: {}", self.path.display(), e)))
    }
}
