//! Frame scheduling
//!
//! The game's clock is "run one frame, then ask the host for the next one".
//! [`FrameLoop`] owns that cycle and a [`CancellationToken`]; once stopped,
//! a frame callback that still fires does nothing and schedules nothing.

use std::cell::Cell;
use std::rc::Rc;

/// Host hook that arranges for the next frame callback
pub trait FrameScheduler {
    /// Request exactly one future call to the frame callback
    fn schedule_next_frame(&mut self);
    /// Withdraw the outstanding request, if any
    fn cancel_scheduled_frame(&mut self);
}

/// Shared flag marking a frame loop as torn down
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Drives a step function once per scheduled frame
#[derive(Debug)]
pub struct FrameLoop<S> {
    scheduler: S,
    token: Option<CancellationToken>,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            token: None,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Begin scheduling frames. No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.token = Some(CancellationToken::new());
        self.scheduler.schedule_next_frame();
        log::info!("Frame loop started");
    }

    /// Stop scheduling frames and cancel the outstanding request
    pub fn stop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
            self.scheduler.cancel_scheduled_frame();
            log::info!("Frame loop stopped after {} frames", self.frames);
        }
    }

    /// Token for the current run of the loop (None before the first start)
    pub fn token(&self) -> Option<CancellationToken> {
        self.token.clone()
    }

    /// Frames run since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Called by the host when a scheduled frame fires. Runs `step` and
    /// schedules the next frame; returns false if the loop was stopped.
    pub fn on_frame(&mut self, step: impl FnOnce()) -> bool {
        if !self.is_running() {
            return false;
        }
        step();
        self.frames += 1;
        // `step` may have stopped the loop
        if self.is_running() {
            self.scheduler.schedule_next_frame();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts requests instead of talking to a display
    #[derive(Debug, Default)]
    struct ManualScheduler {
        pending: bool,
        requests: u32,
        cancels: u32,
    }

    impl FrameScheduler for ManualScheduler {
        fn schedule_next_frame(&mut self) {
            self.pending = true;
            self.requests += 1;
        }

        fn cancel_scheduled_frame(&mut self) {
            self.pending = false;
            self.cancels += 1;
        }
    }

    #[test]
    fn test_frames_reschedule_themselves() {
        let mut frame_loop = FrameLoop::new(ManualScheduler::default());
        assert!(!frame_loop.is_running());
        frame_loop.start();
        assert!(frame_loop.scheduler().pending);

        let mut steps = 0;
        for _ in 0..5 {
            assert!(frame_loop.on_frame(|| steps += 1));
        }
        assert_eq!(steps, 5);
        assert_eq!(frame_loop.frames(), 5);
        assert_eq!(frame_loop.scheduler().requests, 6);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut frame_loop = FrameLoop::new(ManualScheduler::default());
        frame_loop.start();
        let token = frame_loop.token().unwrap();
        frame_loop.stop();

        assert!(token.is_cancelled());
        assert!(!frame_loop.scheduler().pending);
        assert_eq!(frame_loop.scheduler().cancels, 1);

        // A late callback does nothing
        let mut ran = false;
        assert!(!frame_loop.on_frame(|| ran = true));
        assert!(!ran);
        assert_eq!(frame_loop.scheduler().requests, 1);
    }

    #[test]
    fn test_start_is_idempotent_and_restartable() {
        let mut frame_loop = FrameLoop::new(ManualScheduler::default());
        frame_loop.start();
        frame_loop.start();
        assert_eq!(frame_loop.scheduler().requests, 1);

        frame_loop.stop();
        frame_loop.stop();
        assert_eq!(frame_loop.scheduler().cancels, 1);

        frame_loop.start();
        assert!(frame_loop.is_running());
        assert_eq!(frame_loop.scheduler().requests, 2);
    }

    #[test]
    fn test_step_cancelling_token_stops_rescheduling() {
        let mut frame_loop = FrameLoop::new(ManualScheduler::default());
        frame_loop.start();
        let token = frame_loop.token().unwrap();
        assert!(frame_loop.on_frame(|| token.cancel()));
        assert_eq!(frame_loop.scheduler().requests, 1);
        assert!(!frame_loop.is_running());
    }
}
