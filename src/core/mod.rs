pub mod retention;
pub mod scan;

pub use retention::{ProgressSink, ProgressTick, RetentionEngine};
pub use scan::FileRecord;
