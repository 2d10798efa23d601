//! Raw window scroll position, used when no smooth controller is available

use std::cell::Cell;

use tracing::debug;

pub trait WindowScroll {
    /// Assign the window scroll position directly
    fn scroll_window_to(&self, x: f64, y: f64);
}

/// Window stand-in for hosts without a real viewport
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    position: Cell<(f64, f64)>,
    assignments: Cell<u64>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a non-zero scroll position
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Cell::new((x, y)),
            assignments: Cell::new(0),
        }
    }

    pub fn position(&self) -> (f64, f64) {
        self.position.get()
    }

    /// Number of direct position assignments so far
    pub fn assignments(&self) -> u64 {
        self.assignments.get()
    }
}

impl WindowScroll for HeadlessWindow {
    fn scroll_window_to(&self, x: f64, y: f64) {
        debug!(x, y, "Window scroll assigned");
        self.position.set((x, y));
        self.assignments.set(self.assignments.get() + 1);
    }
}
