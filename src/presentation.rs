//! Presentation side of the double buffer.
//!
//! The renderer writes into its own buffer and copies the finished frame here.
//! Readers (UI previews) only ever see complete frames. The buffer is guarded
//! by its own lock, never by the critical section of the state mailbox, so a
//! long preview read does not hold up state producers.

use core::cell::RefCell;
use core::hint::spin_loop;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

use crate::color::{ColorRgbw, Rgb};

/// Error returned when a pixel count does not fit the buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub requested: usize,
    pub capacity: usize,
}

/// Spin lock usable from any thread or task.
///
/// Interrupts stay enabled while it is held. A reader running in an interrupt
/// that preempts the renderer on the same core would spin forever, use
/// `CriticalSectionRawMutex` for that setup instead.
pub struct SpinRawMutex {
    locked: AtomicBool,
}

struct SpinGuard<'a>(&'a AtomicBool);

impl Drop for SpinGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// SAFETY: `lock` runs `f` only while `locked` is held exclusively, and the
// guard releases it even if `f` panics.
unsafe impl RawMutex for SpinRawMutex {
    const INIT: Self = Self {
        locked: AtomicBool::new(false),
    };

    fn lock<R>(&self, f: impl FnOnce() -> R) -> R {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            spin_loop();
        }
        let _guard = SpinGuard(&self.locked);
        f()
    }
}

#[derive(Debug)]
struct Presented<const MAX_LEDS: usize> {
    pixels: Vec<ColorRgbw, MAX_LEDS>,
    fps: u8,
}

/// Last frame handed to the output driver
pub struct PresentationBuffer<M: RawMutex, const MAX_LEDS: usize> {
    inner: Mutex<M, RefCell<Presented<MAX_LEDS>>>,
}

impl<M: RawMutex, const MAX_LEDS: usize> PresentationBuffer<M, MAX_LEDS> {
    /// Create an empty (unallocated) buffer.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Presented {
                pixels: Vec::new(),
                fps: 0,
            })),
        }
    }

    /// Size the buffer to `count` black pixels.
    pub fn allocate(&self, count: usize) -> Result<(), CapacityError> {
        if count > MAX_LEDS {
            return Err(CapacityError {
                requested: count,
                capacity: MAX_LEDS,
            });
        }
        self.inner.lock(|inner| {
            let mut presented = inner.borrow_mut();
            presented.pixels.clear();
            presented.pixels.resize(count, ColorRgbw::BLACK).map_err(|()| CapacityError {
                requested: count,
                capacity: MAX_LEDS,
            })?;
            presented.fps = 0;
            Ok(())
        })
    }

    /// Drop the frame, leaving an empty buffer.
    pub fn release(&self) {
        self.inner.lock(|inner| {
            let mut presented = inner.borrow_mut();
            presented.pixels.clear();
            presented.fps = 0;
        });
    }

    /// Copy a finished frame in.
    ///
    /// Copies `min(frame.len(), len())` pixels; the buffer length never changes.
    pub fn present(&self, frame: &[ColorRgbw], fps: u8) {
        self.inner.lock(|inner| {
            let mut presented = inner.borrow_mut();
            let len = presented.pixels.len().min(frame.len());
            presented.pixels[..len].copy_from_slice(&frame[..len]);
            presented.fps = fps;
        });
    }

    /// Run `f` on the presented frame without copying it.
    ///
    /// The renderer cannot present while `f` runs, keep it short.
    pub fn read<R>(&self, f: impl FnOnce(&[ColorRgbw], u8) -> R) -> R {
        self.inner.lock(|inner| {
            let presented = inner.borrow();
            f(&presented.pixels, presented.fps)
        })
    }

    /// Number of pixels in the buffer (0 before allocation)
    pub fn len(&self) -> usize {
        self.read(|pixels, _| pixels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frames presented in the last full second
    pub fn fps(&self) -> u8 {
        self.read(|_, fps| fps)
    }

    /// Copy of the presented frame including the white channel
    pub fn snapshot(&self) -> Vec<ColorRgbw, MAX_LEDS> {
        self.read(|pixels, _| pixels.iter().copied().collect())
    }

    /// Copy of the presented frame without the white channel
    pub fn preview_pixels(&self) -> Vec<Rgb, MAX_LEDS> {
        self.read(|pixels, _| pixels.iter().map(|pixel| pixel.to_rgb()).collect())
    }
}

impl<M: RawMutex, const MAX_LEDS: usize> Default for PresentationBuffer<M, MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}
