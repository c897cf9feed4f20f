//! Progress reporting for long scans.

use std::io::{self, Write};

/// Receives scan progress after each decided cell.
///
/// Sinks are purely observational: a sink must swallow its own failures,
/// and nothing it does can change the grid being produced.
pub trait ProgressSink {
    /// Called once per rule-decided cell with the cell's 1-based linear
    /// index and the total cell count (including any seeded row).
    fn emit(&mut self, current: u64, total: u64);
}

/// Prints `\r[current / total]` to stderr, overwriting itself in place.
///
/// Write errors are ignored. A trailing newline is printed when the count
/// reaches the total.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermProgress;

impl TermProgress {
    /// Creates a terminal progress printer.
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for TermProgress {
    fn emit(&mut self, current: u64, total: u64) {
        let mut err = io::stderr();
        let _ = write!(err, "\r[{} / {}]", current, total);
        if current == total {
            let _ = writeln!(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_progress_is_infallible() {
        let mut sink = TermProgress::new();
        sink.emit(1, 4);
        sink.emit(4, 4);
    }
}
