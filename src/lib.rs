#![no_std]

pub mod channel;
pub mod color;
pub mod engine;
pub mod filter;
pub mod frame_scheduler;
pub mod gamma;
pub mod math8;
pub mod mode;
pub mod phase;
pub mod presentation;
pub mod renderer;
pub mod state;

pub use channel::{StateChannel, StatePublisher, StateSnapshot};
pub use engine::{EngineConfig, EngineError, EngineShared, LedEngine, SchedulerMode};
pub use filter::{FilterProcessor, strobe_level, strobe_period_ms};
pub use frame_scheduler::{FpsCounter, FrameResult, FrameScheduler};
pub use mode::WaveformKind;
pub use phase::Phase;
pub use presentation::{CapacityError, PresentationBuffer, SpinRawMutex};
pub use renderer::Renderer;
pub use state::{AnimationMode, AnimationState, Direction, MirrorMode};

pub use color::{ColorRgbw, Hsv, Rgb};
pub use math8::{lerp8, map_range, scale8};
pub use embassy_time::{Duration, Instant};

/// Pixel layout of the physical strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb,
    Rgbw,
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait. Drivers apply gamma and the
/// brightness limit themselves, see [`gamma::output_level`].
pub trait OutputDriver {
    type Error: core::fmt::Debug;

    /// Prepare the hardware for `pixel_count` pixels
    fn init(&mut self, pixel_count: usize, layout: ChannelLayout) -> Result<(), Self::Error>;

    /// Write colors to the LED strip, scaled by `brightness_limit`
    fn write(&mut self, colors: &[ColorRgbw], brightness_limit: u8) -> Result<(), Self::Error>;

    /// Release the hardware
    fn shutdown(&mut self) {}
}
