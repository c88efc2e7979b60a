use crate::core::base::*;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;
const ONE_MINUS_EPSILON: f32 = 1.0 - f32::EPSILON / 2.0;

/// PCG32 generator. Deterministic per sequence, used to build the
/// procedural point clouds.
#[derive(Debug, PartialEq, Clone)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new() -> Self {
        Pcg32 {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }

    pub fn new_sequence(initseq: u64) -> Self {
        let mut r = Pcg32 { state: 0, inc: (initseq << 1) | 1 };
        r.next_u32();
        r.state = r.state.wrapping_add(PCG32_DEFAULT_STATE);
        r.next_u32();
        return r;
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted = ((old.wrapping_shr(18) ^ old).wrapping_shr(27)) as u32;
        let rot = old.wrapping_shr(59) as u32;
        return xorshifted.rotate_right(rot);
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn uniform_float(&mut self) -> Float {
        let f = self.next_u32() as f32 * 2.3283064365386963e-10;
        return ONE_MINUS_EPSILON.min(f) as Float;
    }

    /// Uniform in `[lo, hi)`.
    pub fn uniform_range(&mut self, lo: Float, hi: Float) -> Float {
        return lo + (hi - lo) * self.uniform_float();
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new()
    }
}
