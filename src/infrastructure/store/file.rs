//! File-backed key-value store
//!
//! Keeps one `<key>.json` file per key under a storage directory. Writes
//! go to a temp file in the same directory and are renamed into place
//! while holding an advisory lock on `.paintrack.lock`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::ports::{KeyValueStore, StoreError, StoreResult};

const LOCK_FILE_NAME: &str = ".paintrack.lock";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the value for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(LOCK_FILE_NAME)
    }

    fn write_atomic(&self, path: &Path, value: &str) -> StoreResult<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(access_error)?;
        tmp.write_all(value.as_bytes()).map_err(access_error)?;
        tmp.as_file().sync_all().map_err(access_error)?;
        tmp.persist(path).map_err(|e| access_error(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(access_error)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(access_error)?;

        let lock_file = fs::File::create(self.lock_path()).map_err(access_error)?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StoreError::LockError {
                message: e.to_string(),
            })?;

        let result = self.write_atomic(&self.path_for(key), value);

        let _ = lock_file.unlock();
        result
    }
}

fn access_error(e: std::io::Error) -> StoreError {
    StoreError::AccessError {
        message: e.to_string(),
    }
}
