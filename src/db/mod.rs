use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::models::Store;

/// Handle on the JSON file backing a [`Store`].
///
/// Every read loads the whole document and every write replaces it. There is no locking:
/// two overlapping processes can lose each other's updates.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store, or the default document when the file does not exist yet.
    pub fn load(&self) -> Result<Store> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file, using defaults");
                return Ok(Store::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let store: Store = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            days = store.records.len(),
            "loaded store"
        );
        Ok(store)
    }

    /// Overwrite the file with `store`, pretty-printed.
    pub fn save(&self, store: &Store) -> Result<()> {
        let contents = serde_json::to_string_pretty(store)?;
        self.write(contents.as_bytes())
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), "saved store");
        Ok(())
    }

    /// Load, apply `f`, and save only if `f` succeeds. An error leaves the file untouched.
    pub fn update<T>(&self, f: impl FnOnce(&mut Store) -> anyhow::Result<T>) -> anyhow::Result<T> {
        let mut store = self.load()?;
        let value = f(&mut store)?;
        self.save(&store)?;
        Ok(value)
    }

    fn write(&self, contents: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::OpenOptions;
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(contents)?;
            file.write_all(b"\n")?;

            // mode() only applies on creation
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&self.path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            let mut buf = contents.to_vec();
            buf.push(b'\n');
            fs::write(&self.path, buf)?;
        }
        Ok(())
    }
}
