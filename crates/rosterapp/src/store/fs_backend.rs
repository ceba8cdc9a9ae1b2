use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<PathBuf> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(RosterError::Io)?;
        }
        Ok(dir)
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("records");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Option<Vec<Record>>> {
        // bytes, so invalid UTF-8 surfaces as a parse error rather than I/O
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RosterError::Io(e)),
        };
        let records: Vec<Record> =
            serde_json::from_slice(&content).map_err(|source| RosterError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(records))
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        let dir = self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(RosterError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path(&dir);
        fs::write(&tmp_path, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RosterError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
