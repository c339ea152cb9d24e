//! Fixed-rate animation pacing
//!
//! The browser calls back at the display refresh rate (often 120 Hz or more),
//! but the simulation is tuned in per-frame units, so frames are only
//! simulated once the fixed interval has elapsed. Leftover time is carried
//! into the next interval to keep the average rate steady.

use crate::consts::FRAME_INTERVAL_MS;

/// Whether the animation is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Clone)]
pub struct FrameLoop {
    phase: LoopPhase,
    interval_ms: f64,
    /// Timestamp the current interval is measured from
    last_time: f64,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

impl FrameLoop {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            phase: LoopPhase::Stopped,
            interval_ms,
            last_time: 0.0,
            frames: 0,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Frames reported due since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stopped -> Running. Returns false if already running.
    pub fn start(&mut self, now: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = LoopPhase::Running;
        self.last_time = now;
        true
    }

    /// Running -> Stopped. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = LoopPhase::Stopped;
        true
    }

    /// Check whether a frame should be simulated at `timestamp` (ms)
    pub fn frame_due(&mut self, timestamp: f64) -> bool {
        if !self.is_running() {
            return false;
        }

        let delta = timestamp - self.last_time;
        if delta < self.interval_ms {
            return false;
        }

        self.last_time = timestamp - delta % self.interval_ms;
        self.frames += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_due_when_stopped() {
        let mut frame_loop = FrameLoop::new(10.0);
        assert_eq!(frame_loop.phase(), LoopPhase::Stopped);
        assert!(!frame_loop.frame_due(1000.0));
        assert_eq!(frame_loop.frames(), 0);
    }

    #[test]
    fn test_start_stop_transitions() {
        let mut frame_loop = FrameLoop::new(10.0);
        assert!(frame_loop.start(0.0));
        assert!(!frame_loop.start(5.0), "second start is a no-op");
        assert!(frame_loop.is_running());

        assert!(frame_loop.stop());
        assert!(!frame_loop.stop());
        assert!(!frame_loop.frame_due(100.0));
    }

    #[test]
    fn test_due_after_interval() {
        let mut frame_loop = FrameLoop::new(10.0);
        frame_loop.start(100.0);

        // Immediate callback at the start time is not due
        assert!(!frame_loop.frame_due(100.0));
        assert!(!frame_loop.frame_due(109.0));
        assert!(frame_loop.frame_due(110.0));
        assert!(!frame_loop.frame_due(115.0));
        assert!(frame_loop.frame_due(120.0));
        assert_eq!(frame_loop.frames(), 2);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut frame_loop = FrameLoop::new(10.0);
        frame_loop.start(0.0);

        // 14ms late: next interval is measured from 10, not 14
        assert!(frame_loop.frame_due(14.0));
        assert!(frame_loop.frame_due(20.0));
    }

    #[test]
    fn test_restart_resets_reference() {
        let mut frame_loop = FrameLoop::new(10.0);
        frame_loop.start(0.0);
        frame_loop.stop();

        frame_loop.start(1000.0);
        assert!(!frame_loop.frame_due(1005.0));
        assert!(frame_loop.frame_due(1010.0));
    }
}
