//! Latest-write-wins state mailbox for `no_std` environments.
//!
//! Producers overwrite a single pending slot; the renderer moves it into the
//! active slot once per frame. Bursts of updates between two frames collapse to
//! the most recent one. Thread/interrupt safe via critical sections, and the
//! critical section only ever copies a fixed-size [`AnimationState`].

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::state::AnimationState;

/// State selected for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub state: AnimationState,
    /// Producer timestamp that came with `state`
    pub timestamp: Instant,
    /// `true` if `state` was published since the previous consume
    pub fresh: bool,
}

#[derive(Debug)]
struct Slots {
    pending: AnimationState,
    pending_timestamp: Instant,
    dirty: bool,
    active: AnimationState,
    active_timestamp: Instant,
}

/// Single-slot state channel with overwrite-on-publish semantics
pub struct StateChannel {
    inner: Mutex<RefCell<Slots>>,
}

impl StateChannel {
    /// Create a channel whose active state is `initial`.
    pub const fn new(initial: AnimationState) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Slots {
                pending: initial,
                pending_timestamp: Instant::from_millis(0),
                dirty: false,
                active: initial,
                active_timestamp: Instant::from_millis(0),
            })),
        }
    }

    /// Get a publisher handle for this channel.
    ///
    /// Any number of publishers can coexist, the last one to publish wins.
    pub const fn publisher(&self) -> StatePublisher<'_> {
        StatePublisher { channel: self }
    }

    /// Replace the pending state, discarding any unconsumed one.
    ///
    /// Never blocks on the consumer and never queues.
    pub fn publish(&self, timestamp: Instant, state: AnimationState) {
        critical_section::with(|cs| {
            let mut slots = self.inner.borrow(cs).borrow_mut();
            slots.pending = state;
            slots.pending_timestamp = timestamp;
            slots.dirty = true;
        });
    }

    /// Take the state for the next frame.
    ///
    /// Promotes the pending state to active if one was published, otherwise
    /// returns the active state unchanged.
    pub fn consume(&self) -> StateSnapshot {
        critical_section::with(|cs| {
            let mut slots = self.inner.borrow(cs).borrow_mut();
            let fresh = slots.dirty;
            if fresh {
                slots.active = slots.pending;
                slots.active_timestamp = slots.pending_timestamp;
                slots.dirty = false;
            }
            StateSnapshot {
                state: slots.active,
                timestamp: slots.active_timestamp,
                fresh,
            }
        })
    }

    /// Last state promoted to active
    pub fn active(&self) -> AnimationState {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().active)
    }

    /// Check if a published state is waiting to be consumed
    pub fn has_pending(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().dirty)
    }

    /// Overwrite the active state without touching a pending one
    pub fn seed_active(&self, state: AnimationState) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().active = state;
        });
    }
}

impl Default for StateChannel {
    fn default() -> Self {
        Self::new(AnimationState::new())
    }
}

/// A publisher handle for a [`StateChannel`].
///
/// This is a lightweight reference that can be copied into producer tasks.
#[derive(Clone, Copy)]
pub struct StatePublisher<'a> {
    channel: &'a StateChannel,
}

impl StatePublisher<'_> {
    /// Publish a new state, see [`StateChannel::publish`]
    pub fn publish(&self, timestamp: Instant, state: AnimationState) {
        self.channel.publish(timestamp, state);
    }
}
