//! Engine façade - lifecycle and public API
//!
//! Two roles touch the engine:
//! - producers publish [`AnimationState`] values through [`EngineShared`]
//!   (or [`LedEngine::update`]) from any thread, at any rate;
//! - the renderer ([`LedEngine`]) renders frames on its own cadence, either
//!   from a dedicated loop calling [`LedEngine::poll`] or synchronously inside
//!   [`LedEngine::update`].

use core::fmt;

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{StateChannel, StatePublisher};
use crate::color::{ColorRgbw, Rgb};
use crate::frame_scheduler::{DEFAULT_FRAME_DURATION, FpsCounter, FrameResult, FrameScheduler};
use crate::presentation::{CapacityError, PresentationBuffer, SpinRawMutex};
use crate::renderer::Renderer;
use crate::state::AnimationState;
use crate::{ChannelLayout, OutputDriver};

const DEFAULT_BRIGHTNESS: u8 = 128;
const DEFAULT_SEED: u64 = 0x5EED_1ED5;

/// Where render ticks come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerMode {
    /// Every [`LedEngine::update`] renders and presents one frame
    #[default]
    Inline,
    /// Frames are rendered by a loop calling [`LedEngine::poll`]
    Background,
}

/// Construction-time engine configuration
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Number of pixels on the strip, must be non-zero
    pub pixel_count: usize,
    /// Target interval between frames
    pub frame_interval: Duration,
    /// Master brightness used until the first state arrives
    pub default_brightness: u8,
    /// Whether the strip has a dedicated white LED
    pub white_channel: bool,
    pub scheduler: SchedulerMode,
    /// Seed for the random directions and sparkles
    pub seed: u64,
}

impl EngineConfig {
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            frame_interval: DEFAULT_FRAME_DURATION,
            default_brightness: DEFAULT_BRIGHTNESS,
            white_channel: true,
            scheduler: SchedulerMode::Inline,
            seed: DEFAULT_SEED,
        }
    }

    #[must_use]
    pub const fn with_scheduler(mut self, scheduler: SchedulerMode) -> Self {
        self.scheduler = scheduler;
        self
    }

    #[must_use]
    pub const fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Channel layout reported to the output driver
    pub const fn layout(&self) -> ChannelLayout {
        if self.white_channel {
            ChannelLayout::Rgbw
        } else {
            ChannelLayout::Rgb
        }
    }
}

/// Startup failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError<E> {
    /// Pixel count is zero
    NoPixels,
    /// Pixel count does not fit the engine buffers
    CapacityExceeded(CapacityError),
    /// Output driver failed to initialize
    Driver(E),
}

impl<E> From<CapacityError> for EngineError<E> {
    fn from(error: CapacityError) -> Self {
        Self::CapacityExceeded(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EngineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPixels => f.write_str("pixel count is zero"),
            Self::CapacityExceeded(error) => write!(
                f,
                "{} pixels requested, buffers hold {}",
                error.requested, error.capacity
            ),
            Self::Driver(error) => write!(f, "output driver init failed: {error:?}"),
        }
    }
}

/// State shared between producers, the renderer and preview readers
///
/// Holds the state mailbox and the presentation buffer. The mailbox sits
/// behind a critical section, the presentation buffer behind its own
/// [`SpinRawMutex`], so preview reads never block producers. It is `Sync` and
/// `const`-constructible, so it can live in a `static` or be borrowed by
/// scoped threads.
pub struct EngineShared<const MAX_LEDS: usize> {
    states: StateChannel,
    frames: PresentationBuffer<SpinRawMutex, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> EngineShared<MAX_LEDS> {
    pub const fn new() -> Self {
        Self {
            states: StateChannel::new(AnimationState::new()),
            frames: PresentationBuffer::new(),
        }
    }

    /// Get a publisher handle for producer tasks
    pub const fn publisher(&self) -> StatePublisher<'_> {
        self.states.publisher()
    }

    pub const fn states(&self) -> &StateChannel {
        &self.states
    }

    pub const fn frames(&self) -> &PresentationBuffer<SpinRawMutex, MAX_LEDS> {
        &self.frames
    }

    /// Last state the renderer picked up
    pub fn state(&self) -> AnimationState {
        self.states.active()
    }

    /// Frames presented in the last full second
    pub fn fps(&self) -> u8 {
        self.frames.fps()
    }

    /// Snapshot of the presented frame, RGB only
    pub fn preview_pixels(&self) -> Vec<Rgb, MAX_LEDS> {
        self.frames.preview_pixels()
    }
}

impl<const MAX_LEDS: usize> Default for EngineShared<MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

/// LED engine - the main orchestrator
pub struct LedEngine<'a, D: OutputDriver, const MAX_LEDS: usize> {
    // External dependencies and configuration
    config: EngineConfig,
    driver: D,
    shared: &'a EngineShared<MAX_LEDS>,

    // Internal state, `None` until `begin` succeeds
    renderer: Option<Renderer<MAX_LEDS>>,
    scheduler: FrameScheduler,
    fps: FpsCounter,
    brightness: u8,
    push_errors: u32,
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize> LedEngine<'a, D, MAX_LEDS> {
    /// Create an engine. Nothing is allocated until [`LedEngine::begin`].
    pub const fn new(shared: &'a EngineShared<MAX_LEDS>, driver: D, config: EngineConfig) -> Self {
        Self {
            config,
            driver,
            shared,
            renderer: None,
            scheduler: FrameScheduler::new(config.frame_interval),
            fps: FpsCounter::new(),
            brightness: config.default_brightness,
            push_errors: 0,
        }
    }

    /// Allocate buffers, initialize the driver and push a black frame.
    ///
    /// Calling it again on a running engine is a no-op.
    pub fn begin(&mut self) -> Result<(), EngineError<D::Error>> {
        if self.renderer.is_some() {
            return Ok(());
        }

        let count = self.config.pixel_count;
        if count == 0 {
            #[cfg(feature = "esp32-log")]
            println!("[LedEngine.begin] refusing to start with zero pixels");
            return Err(EngineError::NoPixels);
        }

        let renderer = Renderer::new(count, self.scheduler.frame_duration(), self.config.seed)?;
        self.shared.frames.allocate(count)?;

        if let Err(error) = self.driver.init(count, self.config.layout()) {
            #[cfg(feature = "esp32-log")]
            println!("[LedEngine.begin] driver init failed: {:?}", error);
            self.shared.frames.release();
            return Err(EngineError::Driver(error));
        }

        self.shared.states.seed_active(
            self.shared
                .states
                .active()
                .with_brightness(self.config.default_brightness),
        );
        self.brightness = self.config.default_brightness;
        self.fps = FpsCounter::new();
        self.push_errors = 0;

        if self.driver.write(renderer.frame(), self.brightness).is_err() {
            self.push_errors += 1;
        }
        self.renderer = Some(renderer);

        #[cfg(feature = "esp32-log")]
        println!(
            "[LedEngine.begin] {} pixels, {:?}, frame interval {}ms",
            count,
            self.config.layout(),
            self.scheduler.frame_duration().as_millis()
        );
        Ok(())
    }

    /// Publish a new state.
    ///
    /// With [`SchedulerMode::Inline`] this also renders and presents one frame
    /// at `timestamp`. Before [`LedEngine::begin`] this does nothing.
    pub fn update(&mut self, timestamp: Instant, state: AnimationState) {
        if !self.is_initialized() {
            return;
        }
        self.shared.states.publish(timestamp, state);
        if self.config.scheduler == SchedulerMode::Inline {
            self.tick(timestamp);
        }
    }

    /// Render and present one frame now, regardless of the schedule.
    ///
    /// A freshly published state brings its own timestamp as the frame clock,
    /// otherwise `now` is used.
    pub fn tick(&mut self, now: Instant) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        #[cfg(feature = "esp32-log")]
        let previous_mode = self.shared.states.active().mode;

        let snapshot = self.shared.states.consume();
        let clock = if snapshot.fresh { snapshot.timestamp } else { now };

        #[cfg(feature = "esp32-log")]
        if snapshot.state.mode != previous_mode {
            println!("[LedEngine.tick] mode -> {}", snapshot.state.mode.as_str());
        }

        renderer.render(&snapshot.state, clock);
        self.brightness = snapshot.state.master_brightness;
        self.present(now);
    }

    /// Render a frame if one is due at `now`.
    ///
    /// Call from the renderer loop; returns how long to sleep before the next
    /// call.
    pub fn poll(&mut self, now: Instant) -> FrameResult {
        if !self.is_initialized() || !self.scheduler.is_due(now) {
            return self.scheduler.idle(now);
        }
        self.tick(now);
        self.scheduler.advance(now)
    }

    /// Present the most recently rendered frame again.
    pub fn show(&mut self) {
        self.show_at(Instant::now());
    }

    /// Present the most recently rendered frame, counting it at `now`.
    pub fn show_at(&mut self, now: Instant) {
        if !self.is_initialized() {
            return;
        }
        self.present(now);
    }

    /// Copy the render buffer to the presentation buffer and push it out.
    fn present(&mut self, now: Instant) {
        let Some(renderer) = self.renderer.as_ref() else {
            return;
        };
        let frame = renderer.frame();

        let fps = self.fps.record(now);
        self.shared.frames.present(frame, fps);

        // The render buffer is not touched again until the next frame, so the
        // driver reads it outside the presentation lock.
        if let Err(_error) = self.driver.write(frame, self.brightness) {
            self.push_errors = self.push_errors.saturating_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[LedEngine.present] driver write failed: {:?}", _error);
        }
    }

    /// Release the driver and buffers. [`LedEngine::begin`] may be called again.
    pub fn shutdown(&mut self) {
        if self.renderer.take().is_none() {
            return;
        }
        self.driver.shutdown();
        self.shared.frames.release();
        self.scheduler = FrameScheduler::new(self.config.frame_interval);

        #[cfg(feature = "esp32-log")]
        println!("[LedEngine.shutdown] stopped");
    }

    pub const fn is_initialized(&self) -> bool {
        self.renderer.is_some()
    }

    pub const fn pixel_count(&self) -> usize {
        self.config.pixel_count
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frames presented in the last full second
    pub fn fps(&self) -> u8 {
        self.shared.fps()
    }

    /// Last active state
    pub fn state(&self) -> AnimationState {
        self.shared.state()
    }

    /// Snapshot of the presented frame, RGB only. Empty before `begin`.
    pub fn preview_pixels(&self) -> Vec<Rgb, MAX_LEDS> {
        self.shared.preview_pixels()
    }

    /// Last rendered frame. Empty before `begin`.
    pub fn render_buffer(&self) -> &[ColorRgbw] {
        match &self.renderer {
            Some(renderer) => renderer.frame(),
            None => &[],
        }
    }

    /// Driver writes that failed since `begin`
    pub const fn push_errors(&self) -> u32 {
        self.push_errors
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const MAX_LEDS: usize> Drop for LedEngine<'_, D, MAX_LEDS> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
