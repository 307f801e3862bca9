//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

/// Default target frame rate (20 FPS).
pub const DEFAULT_FPS: u32 = 20;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Length of the FPS measurement window.
pub const FPS_WINDOW: Duration = Duration::from_millis(1000);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether a frame was rendered by this call.
    pub rendered: bool,
}

/// Fixed-cadence frame pacing with drift correction.
///
/// The scheduler only decides *when* a frame is due; rendering is done by the
/// engine. Calling [`FrameScheduler::is_due`] more often than the frame rate is
/// fine, frames are never produced faster than the configured interval.
///
/// # Usage
///
/// ```ignore
/// loop {
///     let result = engine.poll(Instant::now());
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    next_frame: Instant,
    frame_duration: Duration,
}

impl FrameScheduler {
    /// Create a new frame scheduler.
    ///
    /// A zero frame duration falls back to [`DEFAULT_FRAME_DURATION`].
    pub const fn new(frame_duration: Duration) -> Self {
        let frame_duration = if frame_duration.as_ticks() == 0 {
            DEFAULT_FRAME_DURATION
        } else {
            frame_duration
        };
        Self {
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Check if the next frame is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now.as_millis() >= self.next_frame.as_millis()
    }

    /// Mark a frame as rendered at `now` and schedule the next one.
    ///
    /// If we've fallen more than two frames behind, the schedule restarts from
    /// `now` instead of bursting through the backlog.
    pub fn advance(&mut self, now: Instant) -> FrameResult {
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        self.next_frame += self.frame_duration;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.sleep_duration(now),
            rendered: true,
        }
    }

    /// Timing info for a call that did not render.
    pub fn idle(&self, now: Instant) -> FrameResult {
        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.sleep_duration(now),
            rendered: false,
        }
    }

    /// Time left until the next frame (zero if behind schedule).
    pub fn sleep_duration(&self, now: Instant) -> Duration {
        Duration::from_millis(
            self.next_frame
                .as_millis()
                .saturating_sub(now.as_millis()),
        )
    }
}

/// Frames-per-second counter over fixed 1000ms windows.
///
/// Frames are counted in `[window_start, window_start + 1000ms)`. The first
/// frame at or past the end of the window publishes the count and opens the
/// next window.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start: Option<Instant>,
    frames: u32,
    fps: u8,
}

impl FpsCounter {
    pub const fn new() -> Self {
        Self {
            window_start: None,
            frames: 0,
            fps: 0,
        }
    }

    /// Record a presented frame.
    ///
    /// Returns the published FPS value, updated when a window closes.
    pub fn record(&mut self, now: Instant) -> u8 {
        let start = *self.window_start.get_or_insert(now);
        if now.as_millis().saturating_sub(start.as_millis()) >= FPS_WINDOW.as_millis() {
            self.fps = u8::try_from(self.frames).unwrap_or(u8::MAX);
            self.frames = 0;
            self.window_start = Some(now);
        }
        self.frames += 1;
        self.fps
    }

    /// Frames presented in the last full window.
    pub const fn fps(&self) -> u8 {
        self.fps
    }
}
