use crate::utils::Result;
use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A file found during a scan. Reconstructed on every scan, never cached
/// across calls.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub last_write: SystemTime,
}

impl FileRecord {
    /// Last-write time truncated to the local calendar date.
    pub fn last_write_date(&self) -> NaiveDate {
        DateTime::<Local>::from(self.last_write).date_naive()
    }
}

/// Lists the files in scope for a root: its direct files plus the direct
/// files of each immediate child directory. Files nested two or more
/// levels deep are out of scope.
pub fn list_scope_files(root: &Path) -> Result<Vec<FileRecord>> {
    let mut files = files_in(root)?;

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            files.extend(files_in(&path)?);
        }
    }

    Ok(files)
}

fn files_in(dir: &Path) -> Result<Vec<FileRecord>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        // An entry can disappear between the directory listing and the
        // stat call; such entries are simply out of scope.
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };

        if metadata.is_file() {
            files.push(FileRecord {
                last_write: metadata.modified()?,
                path,
            });
        }
    }

    Ok(files)
}
