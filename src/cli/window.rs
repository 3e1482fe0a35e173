use std::{
    io::{stderr, Write},
    time::{Duration, Instant},
};

use crossterm::{cursor, terminal, QueueableCommand};

use otter_twise::analysis::Monitor;

/// The least time between redraws.
const REDRAW: Duration = Duration::from_millis(100);

/// A single line of progress, redrawn in place.
pub struct ProgressWindow {
    label: String,
    start: Instant,
    last_draw: Option<Instant>,
}

impl ProgressWindow {
    pub fn new(label: impl Into<String>) -> Self {
        ProgressWindow {
            label: label.into(),
            start: Instant::now(),
            last_draw: None,
        }
    }

    #[allow(unused_must_use)]
    fn draw(&mut self, done: usize, total: usize) {
        let mut stderr = stderr();

        let ratio = match total {
            0 => 1.0,
            _ => done as f64 / total as f64,
        };

        stderr.queue(cursor::MoveToColumn(0));
        stderr.queue(terminal::Clear(terminal::ClearType::CurrentLine));
        write!(
            stderr,
            "c {} {done}/{total} ({:.2}%) {:.2?}",
            self.label,
            ratio * 100.0,
            self.start.elapsed()
        );
        stderr.flush();

        self.last_draw = Some(Instant::now());
    }

    /// Ends the line of progress.
    pub fn finish(&self) {
        if self.last_draw.is_some() {
            eprintln!();
        }
    }
}

impl Monitor for ProgressWindow {
    fn cancelled(&mut self) -> bool {
        false
    }

    fn progress(&mut self, done: usize, total: usize) {
        let due = self.last_draw.map_or(true, |last| last.elapsed() >= REDRAW);
        if due || done == total {
            self.draw(done, total);
        }
    }
}
