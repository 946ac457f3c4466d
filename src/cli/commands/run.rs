use crate::cli::parser::RunArgs;
use crate::config::defaults::get_lock_file_path;
use crate::config::{ConfigError, ConfigManager, Settings, TaskConfig};
use crate::core::{ProgressTick, RetentionEngine};
use crate::ui::{ConsoleReporter, ProgressAction, Reporter};
use crate::utils::{Result, SweepError};
use fs2::FileExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub fn execute(config_path: Option<&Path>, args: RunArgs) -> Result<()> {
    let mut reporter = ConsoleReporter::new();
    let settings_path = ConfigManager::resolve_settings_path(config_path);

    let settings = match ConfigManager::load_from_file(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            reporter.error(&startup_error_message(&e, &settings_path));
            wait_for_operator_acknowledgment();
            std::process::exit(1);
        }
    };

    let _lock = acquire_run_lock()?;

    let runner = TaskRunner::new(settings);

    let stop = runner.stop_flag();
    if let Err(e) = ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst)) {
        reporter.error(&format!("Failed to install Ctrl-C handler: {}", e));
    }

    runner.run_loop(&mut reporter, args.once);
    Ok(())
}

/// Result of one cleaning task. `moved` is present only for tasks with a
/// destination configured.
#[derive(Debug, Clone, Copy)]
pub struct TaskOutcome {
    pub moved: Option<usize>,
    pub deleted: usize,
    pub elapsed: Duration,
}

/// Executes the configured task list: each task in order, one pass or a
/// loop with a sleep between passes. Tasks run strictly sequentially; a
/// stop request takes effect between tasks, never mid-task.
pub struct TaskRunner {
    settings: Settings,
    stop: Arc<AtomicBool>,
}

impl TaskRunner {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    pub fn run_loop(&self, reporter: &mut dyn Reporter, once: bool) {
        loop {
            self.run_pass(reporter);

            let delay_minutes = match self.settings.loop_delay_minutes {
                Some(minutes) if !once && !self.stop_requested() => minutes,
                _ => break,
            };

            reporter.summary(&format!("Next pass in {} minute(s).", delay_minutes));
            if self.sleep_interrupted(Duration::from_secs(delay_minutes * 60)) {
                break;
            }
        }
    }

    /// Runs every task once. Task failures are reported and the pass
    /// continues with the next task.
    pub fn run_pass(&self, reporter: &mut dyn Reporter) {
        for task in &self.settings.tasks {
            if self.stop_requested() {
                reporter.summary("Stop requested. Skipping remaining tasks.");
                break;
            }

            if let Err(e) = run_task(task, reporter) {
                reporter.error(&e.to_string());
            }
        }
    }

    fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Sleeps in one-second slices so a stop request cuts the wait short.
    /// Returns true when the sleep was interrupted.
    fn sleep_interrupted(&self, total: Duration) -> bool {
        let mut remaining = total;

        while remaining > Duration::ZERO {
            if self.stop_requested() {
                return true;
            }

            let step = remaining.min(Duration::from_secs(1));
            std::thread::sleep(step);
            remaining -= step;
        }

        self.stop_requested()
    }
}

/// Runs one cleaning task: with a destination configured, first move old
/// files out of the source, then delete at the destination; without one,
/// delete at the source.
pub fn run_task(task: &TaskConfig, reporter: &mut dyn Reporter) -> Result<TaskOutcome> {
    let destination = task.destination().map(PathBuf::from);
    let engine = RetentionEngine::new(Path::new(&task.source_path), destination.as_deref())?;

    reporter.banner(&format!("Path: {}", engine.source().display()));
    reporter.banner("Starting cleanup...");

    let timer = Instant::now();

    let moved = match engine.destination() {
        Some(_) => {
            let move_days = task.move_days_ago.ok_or_else(|| {
                SweepError::invalid_configuration(
                    "move age in days is required when a destination path is set",
                )
            })?;

            let mut sink =
                |tick: ProgressTick| reporter.progress(ProgressAction::Moving, tick);
            Some(engine.move_old(move_days, Some(&mut sink))?)
        }
        None => None,
    };

    let mut sink = |tick: ProgressTick| reporter.progress(ProgressAction::Deleting, tick);
    let deleted = match task.delete_days_ago {
        Some(days) => engine.delete_old(days, Some(&mut sink))?,
        None => engine.delete_all(Some(&mut sink))?,
    };

    let outcome = TaskOutcome {
        moved,
        deleted,
        elapsed: timer.elapsed(),
    };
    reporter.summary(&summary_line(&outcome));

    Ok(outcome)
}

fn summary_line(outcome: &TaskOutcome) -> String {
    let seconds = outcome.elapsed.as_secs_f64();

    match outcome.moved {
        Some(moved) => format!(
            "Cleanup finished. {} files moved and {} files deleted in {:.2}s!",
            moved, outcome.deleted, seconds
        ),
        None => format!(
            "Cleanup finished. {} files deleted in {:.2}s!",
            outcome.deleted, seconds
        ),
    }
}

fn startup_error_message(error: &ConfigError, settings_path: &Path) -> String {
    match error {
        ConfigError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => format!(
            "No settings file found at {}. Run 'sweep init' to create one.",
            settings_path.display()
        ),
        other => format!(
            "Cannot start: {} (settings file: {})",
            other,
            settings_path.display()
        ),
    }
}

/// Overlapping scheduled launches must not interleave cleaning tasks, so
/// a run holds an exclusive lock for its whole lifetime.
fn acquire_run_lock() -> Result<std::fs::File> {
    let path = get_lock_file_path();
    let file = std::fs::File::create(&path)?;

    file.try_lock_exclusive()
        .map_err(|_| SweepError::already_running(path.display().to_string()))?;

    Ok(file)
}

/// The original operator workflow leaves the window open after a fatal
/// configuration error; only applies when a terminal is attached.
fn wait_for_operator_acknowledgment() {
    if !atty::is(atty::Stream::Stdin) {
        return;
    }

    println!("Press Enter to exit.");
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
