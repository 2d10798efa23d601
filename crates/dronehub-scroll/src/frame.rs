//! Per-frame callback scheduling
//!
//! [`FrameScheduler`] is the host's "call me on the next display refresh"
//! primitive. [`FrameQueue`] implements it for headless hosts: whoever owns
//! the display clock calls [`FrameQueue::run_frame`] once per refresh.

use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Callback run once on the next frame with the frame timestamp
pub type FrameCallback = Box<dyn FnOnce(Duration)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequestId(u64);

pub trait FrameScheduler {
    /// Schedule `callback` for the next frame
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId;

    /// Cancel a pending request, false when it already ran or was cancelled
    fn cancel_frame(&self, id: FrameRequestId) -> bool;
}

/// Frame callback queue driven by an external clock
#[derive(Default)]
pub struct FrameQueue {
    next_id: Cell<u64>,
    pending: RefCell<Vec<(FrameRequestId, FrameCallback)>>,
    frames_run: Cell<u64>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the callbacks that were pending when the frame started
    ///
    /// Callbacks requested while the frame runs are kept for the next frame.
    /// Returns the number of callbacks run.
    pub fn run_frame(&self, timestamp: Duration) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        self.frames_run.set(self.frames_run.get() + 1);

        let count = batch.len();
        for (_, callback) in batch {
            callback(timestamp);
        }
        count
    }

    /// Requests waiting for the next frame
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run.get()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.pending.borrow_mut().push((id, callback));
        id
    }

    fn cancel_frame(&self, id: FrameRequestId) -> bool {
        let mut pending = self.pending.borrow_mut();
        let before = pending.len();
        pending.retain(|(pending_id, _)| *pending_id != id);
        pending.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_callbacks_receive_timestamp() {
        let queue = FrameQueue::new();
        let seen = Rc::new(Cell::new(Duration::ZERO));
        let sink = Rc::clone(&seen);

        queue.request_frame(Box::new(move |ts| sink.set(ts)));
        assert_eq!(queue.pending(), 1);

        assert_eq!(queue.run_frame(Duration::from_millis(16)), 1);
        assert_eq!(seen.get(), Duration::from_millis(16));
        assert_eq!(queue.pending(), 0);
        assert_eq!(queue.frames_run(), 1);
    }

    #[test]
    fn test_requests_made_during_frame_wait_for_next_frame() {
        let queue = Rc::new(FrameQueue::new());
        let runs = Rc::new(Cell::new(0));

        let inner_queue = Rc::clone(&queue);
        let inner_runs = Rc::clone(&runs);
        queue.request_frame(Box::new(move |_| {
            inner_runs.set(inner_runs.get() + 1);
            let runs = Rc::clone(&inner_runs);
            inner_queue.request_frame(Box::new(move |_| runs.set(runs.get() + 1)));
        }));

        assert_eq!(queue.run_frame(Duration::ZERO), 1);
        assert_eq!(runs.get(), 1);
        assert_eq!(queue.pending(), 1);

        assert_eq!(queue.run_frame(Duration::from_millis(16)), 1);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_cancel_frame() {
        let queue = FrameQueue::new();
        let ran = Rc::new(Cell::new(false));
        let sink = Rc::clone(&ran);

        let id = queue.request_frame(Box::new(move |_| sink.set(true)));
        assert!(queue.cancel_frame(id));
        assert!(!queue.cancel_frame(id));

        assert_eq!(queue.run_frame(Duration::ZERO), 0);
        assert!(!ran.get());
    }
}
