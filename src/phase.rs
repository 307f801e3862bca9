/// Engine-owned animation phase accumulator
///
/// Advanced by `speed * elapsed_ms` every frame with 32-bit wraparound. The
/// upper 24 bits (`phase >> 8`) are the animation "step" the algorithms work
/// with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Phase(u32);

impl Phase {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn advance(self, speed: u8, elapsed_ms: u32) -> Self {
        Self(self.0.wrapping_add((speed as u32).wrapping_mul(elapsed_ms)))
    }

    /// Animation step (`phase >> 8`)
    pub const fn step(self) -> u32 {
        self.0 >> 8
    }

    /// Low byte of the step, one full turn of an 8-bit wave
    #[allow(clippy::cast_possible_truncation)]
    pub const fn phase8(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Step position within a cycle of `len` steps
    pub const fn position(self, len: u32) -> u32 {
        if len == 0 { 0 } else { self.step() % len }
    }

    /// Number of completed cycles of `len` steps
    pub const fn lap(self, len: u32) -> u32 {
        if len == 0 { 0 } else { self.step() / len }
    }
}
