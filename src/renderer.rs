use embassy_time::{Duration, Instant};
use fastrand::Rng;
use heapless::Vec;

use crate::color::ColorRgbw;
use crate::filter::FilterProcessor;
use crate::mode::RenderContext;
use crate::phase::Phase;
use crate::presentation::CapacityError;
use crate::state::AnimationState;

/// Frame renderer - owns the render buffer and the animation phase
///
/// One call to [`Renderer::render`] produces one frame: the phase is advanced
/// by the time elapsed since the previous frame, the mode algorithm fills the
/// buffer, then the filter pipeline runs over it.
pub struct Renderer<const MAX_LEDS: usize> {
    frame: Vec<ColorRgbw, MAX_LEDS>,
    phase: Phase,
    last_clock: Option<Instant>,
    frame_interval: Duration,
    filters: FilterProcessor,
    rng: Rng,
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    /// Create a renderer with `pixel_count` black pixels
    pub fn new(pixel_count: usize, frame_interval: Duration, seed: u64) -> Result<Self, CapacityError> {
        let mut frame = Vec::new();
        frame
            .resize(pixel_count, ColorRgbw::BLACK)
            .map_err(|()| CapacityError {
                requested: pixel_count,
                capacity: MAX_LEDS,
            })?;

        Ok(Self {
            frame,
            phase: Phase::default(),
            last_clock: None,
            frame_interval,
            filters: FilterProcessor::new(),
            rng: Rng::with_seed(seed),
        })
    }

    /// Render one frame of `state` at `clock`
    pub fn render(&mut self, state: &AnimationState, clock: Instant) -> &[ColorRgbw] {
        let elapsed = self.elapsed_ms(clock);
        self.phase = self.phase.advance(state.animation_speed, elapsed);
        self.last_clock = Some(clock);

        let mut ctx = RenderContext {
            state,
            phase: self.phase,
            clock,
            rng: &mut self.rng,
        };
        state.mode.render(&mut ctx, &mut self.frame);

        self.filters.configure(state);
        self.filters.tick(clock);
        self.filters.apply(&mut self.frame);

        &self.frame
    }

    /// Milliseconds since the previous frame, never 0
    ///
    /// The first frame uses the frame interval so the phase does not jump.
    #[allow(clippy::cast_possible_truncation)]
    fn elapsed_ms(&self, clock: Instant) -> u32 {
        let elapsed = match self.last_clock {
            Some(last) => clock.as_millis().saturating_sub(last.as_millis()),
            None => self.frame_interval.as_millis(),
        };
        (elapsed.min(u64::from(u32::MAX)) as u32).max(1)
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[ColorRgbw] {
        &self.frame
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Reset phase and timing, clearing the frame to black
    pub fn reset(&mut self) {
        self.frame.fill(ColorRgbw::BLACK);
        self.phase = Phase::default();
        self.last_clock = None;
    }
}
