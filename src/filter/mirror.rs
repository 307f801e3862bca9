use super::Filter;
use crate::color::ColorRgbw;
use crate::state::MirrorMode;

/// Mirrors the rendered frame
///
/// - `Full` reflects the first half onto the second half.
/// - `SplitN` cuts the strip into `2N` equal segments and reverses every odd
///   one. Pixels past the last whole segment are left untouched, and a strip
///   shorter than `2N` pixels is not modified at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorFilter {
    mode: MirrorMode,
}

impl MirrorFilter {
    pub const fn new(mode: MirrorMode) -> Self {
        Self { mode }
    }

    pub const fn mode(self) -> MirrorMode {
        self.mode
    }
}

impl Filter for MirrorFilter {
    fn apply(&self, frame: &mut [ColorRgbw]) {
        match self.mode {
            MirrorMode::None => {}
            MirrorMode::Full => {
                let count = frame.len();
                for i in 0..count / 2 {
                    frame[count - 1 - i] = frame[i];
                }
            }
            MirrorMode::Split2 | MirrorMode::Split3 | MirrorMode::Split4 => {
                let Some(pairs) = self.mode.split_pairs() else {
                    return;
                };
                let segments = pairs * 2;
                let segment_len = frame.len() / segments;
                if segment_len == 0 {
                    return;
                }
                for segment in frame
                    .chunks_exact_mut(segment_len)
                    .take(segments)
                    .skip(1)
                    .step_by(2)
                {
                    segment.reverse();
                }
            }
        }
    }
}
