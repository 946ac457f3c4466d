pub mod reporter;

pub use reporter::{ConsoleReporter, NullReporter, ProgressAction, Reporter};
