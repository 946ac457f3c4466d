pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Settings, TaskConfig};
pub use core::{ProgressSink, ProgressTick, RetentionEngine};
pub use ui::{ConsoleReporter, NullReporter, Reporter};
pub use utils::{Result, SweepError};
