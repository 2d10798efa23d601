//! Tokio display clock for [`FrameQueue`]

use std::rc::Rc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::{ScrollConfig, ScrollConfigExt};
use crate::frame::FrameQueue;

/// Runs a frame queue at a fixed refresh rate
///
/// The queue is not `Send`, so `run` must be awaited on the task that owns
/// the engine (e.g. inside `tokio::join!` on a current-thread runtime).
pub struct FrameDriver {
    queue: Rc<FrameQueue>,
    tick: Duration,
}

impl FrameDriver {
    pub fn new(queue: Rc<FrameQueue>, tick: Duration) -> Self {
        Self {
            queue,
            tick: tick.max(Duration::from_millis(1)),
        }
    }

    /// Refresh rate taken from `scroll.animation_fps`
    pub fn from_config(queue: Rc<FrameQueue>, config: &ScrollConfig) -> Self {
        Self::new(queue, config.animation_tick_duration())
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Run frames until the shutdown signal, returns the number of frames run
    ///
    /// Frame timestamps are measured from the start of the run.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> u64 {
        info!(tick_ms = self.tick.as_millis() as u64, "Frame driver started");

        let start = Instant::now();
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut frames = 0u64;

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!(frames, "Frame driver received shutdown signal");
                        break;
                    }
                }

                at = interval.tick() => {
                    let ran = self.queue.run_frame(at.duration_since(start));
                    frames += 1;
                    if ran == 0 {
                        debug!(frame = frames, "Frame ran with no pending callbacks");
                    }
                }
            }
        }

        frames
    }
}
