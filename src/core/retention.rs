use crate::core::scan::{self, FileRecord};
use crate::utils::{Result, SweepError};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// Progress update emitted once per file operation. `total` is the size
/// of the candidate list snapshot taken at the start of the call and does
/// not change mid-operation, even if the filesystem does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTick {
    pub processed: usize,
    pub total: usize,
}

/// Sink for progress ticks. Operations take `Option<&mut dyn ProgressSink>`;
/// passing `None` silences progress entirely.
pub trait ProgressSink {
    fn report(&mut self, tick: ProgressTick);
}

impl<F: FnMut(ProgressTick)> ProgressSink for F {
    fn report(&mut self, tick: ProgressTick) {
        self(tick)
    }
}

/// Age-based retention over one source tree, with an optional destination
/// for relocations. Scope is always the root plus its immediate child
/// directories.
pub struct RetentionEngine {
    source: PathBuf,
    destination: Option<PathBuf>,
}

impl RetentionEngine {
    /// Creates an engine for a task. The source path must exist. A
    /// non-blank destination that does not exist yet is created here;
    /// the engine owns that directory's existence and never deletes it.
    pub fn new(source: &Path, destination: Option<&Path>) -> Result<Self> {
        if !source.is_dir() {
            return Err(SweepError::invalid_configuration(format!(
                "source path '{}' does not exist",
                source.display()
            )));
        }

        let destination = match destination {
            Some(path) if !path.as_os_str().is_empty() => {
                if !path.is_dir() {
                    fs::create_dir_all(path)?;
                }
                Some(path.to_path_buf())
            }
            _ => None,
        };

        Ok(Self {
            source: source.to_path_buf(),
            destination,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// The root delete operations run against: the destination when one
    /// is configured, otherwise the source.
    pub fn effective_target(&self) -> &Path {
        self.destination.as_deref().unwrap_or(&self.source)
    }

    /// Deletes every file in scope of the effective target. Returns the
    /// number of files deleted.
    pub fn delete_all(&self, progress: Option<&mut dyn ProgressSink>) -> Result<usize> {
        let files = scan::list_scope_files(self.effective_target())?;
        self.delete_files(files, progress)
    }

    /// Deletes the files in scope of the effective target whose last-write
    /// date is on or before `today - days_ago`. Returns the number of
    /// files deleted.
    pub fn delete_old(&self, days_ago: u32, progress: Option<&mut dyn ProgressSink>) -> Result<usize> {
        let mut files = scan::list_scope_files(self.effective_target())?;
        let cutoff = cutoff_date(days_ago);
        files.retain(|file| file.last_write_date() <= cutoff);

        self.delete_files(files, progress)
    }

    /// Moves the files in scope of the *source* whose last-write date is
    /// on or before `today - days_ago` to the destination, preserving
    /// each file's source-relative path. Returns the number of files
    /// moved. Fails when no destination is configured.
    pub fn move_old(
        &self,
        days_ago: u32,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> Result<usize> {
        let destination = self.destination.as_deref().ok_or_else(|| {
            SweepError::invalid_configuration("no destination path configured for moving files")
        })?;

        let mut files = scan::list_scope_files(&self.source)?;
        let cutoff = cutoff_date(days_ago);
        files.retain(|file| file.last_write_date() <= cutoff);

        let total = files.len();
        let mut moved = 0;

        for file in &files {
            let relative = file.path.strip_prefix(&self.source).map_err(|_| {
                SweepError::file_operation(file.path.to_string_lossy().to_string())
            })?;
            let target = destination.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            move_file(&file.path, &target)?;

            moved += 1;
            if let Some(sink) = progress.as_deref_mut() {
                sink.report(ProgressTick {
                    processed: moved,
                    total,
                });
            }
        }

        Ok(moved)
    }

    fn delete_files(
        &self,
        files: Vec<FileRecord>,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> Result<usize> {
        let total = files.len();
        let mut deleted = 0;

        for file in &files {
            fs::remove_file(&file.path)?;

            deleted += 1;
            if let Some(sink) = progress.as_deref_mut() {
                sink.report(ProgressTick {
                    processed: deleted,
                    total,
                });
            }
        }

        Ok(deleted)
    }
}

/// A file qualifies for action when its last-write date is on or before
/// this date. Calendar dates, not timestamps: both sides are truncated to
/// local midnight, so a threshold of N days never wobbles by hours.
fn cutoff_date(days_ago: u32) -> NaiveDate {
    (Local::now() - chrono::Duration::days(i64::from(days_ago))).date_naive()
}

fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        // rename cannot cross filesystems; fall back to copy + remove.
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
