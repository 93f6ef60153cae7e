//! キーごとに `<dir>/<key>.json` へ保存する KeyValueStore 実装
//!
//! 書き込みは一時ファイル → rename で置き換える。

use crate::ports::outbound::KeyValueStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key);
        match self.fs.metadata(&path) {
            Ok(m) if m.is_file() => self.fs.read_to_string(&path).map(Some),
            _ => Ok(None),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Error> {
        self.fs.create_dir_all(&self.dir)?;
        let path = self.path(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        self.fs.write(&tmp, value)?;
        self.fs.rename(&tmp, &path)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let path = self.path(key);
        if self.fs.exists(&path) {
            self.fs.remove_file(&path)?;
        }
        Ok(())
    }
}
