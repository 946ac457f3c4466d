use crate::core::ProgressTick;
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAction {
    Moving,
    Deleting,
}

impl ProgressAction {
    pub fn verb(&self) -> &'static str {
        match self {
            ProgressAction::Moving => "Moving",
            ProgressAction::Deleting => "Deleting",
        }
    }
}

/// Output seam between the task runner and the console. Receives per-task
/// banners, progress ticks and summary text; errors are rendered
/// distinctly from normal output.
pub trait Reporter {
    fn banner(&mut self, text: &str);
    fn progress(&mut self, action: ProgressAction, tick: ProgressTick);
    fn summary(&mut self, text: &str);
    fn error(&mut self, text: &str);
}

/// Console implementation: a single live-rewriting progress line (green,
/// only when stdout is a terminal) and red error lines.
pub struct ConsoleReporter {
    interactive: bool,
    progress_line_open: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            interactive: atty::is(atty::Stream::Stdout),
            progress_line_open: false,
        }
    }

    /// The progress line is rewritten in place with `\r`; anything printed
    /// after it needs a fresh line first.
    fn close_progress_line(&mut self) {
        if self.progress_line_open {
            println!();
            self.progress_line_open = false;
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn banner(&mut self, text: &str) {
        self.close_progress_line();
        println!("{}", text);
    }

    fn progress(&mut self, action: ProgressAction, tick: ProgressTick) {
        if !self.interactive {
            return;
        }

        let line = format!(
            "Please wait. {} {}/{} files.",
            action.verb(),
            tick.processed,
            tick.total
        );
        print!("\r{}", line.green());
        let _ = io::stdout().flush();
        self.progress_line_open = true;
    }

    fn summary(&mut self, text: &str) {
        self.close_progress_line();
        println!("{}", text);
    }

    fn error(&mut self, text: &str) {
        self.close_progress_line();
        eprintln!("{}", text.red());
    }
}

/// Reporter that swallows everything. Absence of a sink is a no-op.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn banner(&mut self, _text: &str) {}
    fn progress(&mut self, _action: ProgressAction, _tick: ProgressTick) {}
    fn summary(&mut self, _text: &str) {}
    fn error(&mut self, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_action_verbs() {
        assert_eq!(ProgressAction::Moving.verb(), "Moving");
        assert_eq!(ProgressAction::Deleting.verb(), "Deleting");
    }

    #[test]
    fn test_non_interactive_progress_keeps_line_closed() {
        let mut reporter = ConsoleReporter {
            interactive: false,
            progress_line_open: false,
        };

        reporter.progress(
            ProgressAction::Deleting,
            ProgressTick {
                processed: 1,
                total: 10,
            },
        );

        assert!(!reporter.progress_line_open);
    }

    #[test]
    fn test_null_reporter_accepts_everything() {
        let mut reporter = NullReporter;
        reporter.banner("banner");
        reporter.progress(
            ProgressAction::Moving,
            ProgressTick {
                processed: 1,
                total: 1,
            },
        );
        reporter.summary("summary");
        reporter.error("error");
    }
}
