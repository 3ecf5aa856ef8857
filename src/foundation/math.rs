pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Map `v` from `[in0, in1]` to `[out0, out1]`, clamping outside the input
/// range. `out0 > out1` is allowed (descending output).
pub(crate) fn remap_clamped(v: f64, in0: f64, in1: f64, out0: f64, out1: f64) -> f64 {
    if in0 == in1 {
        return out0;
    }
    let t = clamp01((v - in0) / (in1 - in0));
    lerp(out0, out1, t)
}

/// Small deterministic generator for shuffled tile orders.
///
/// Identical seeds replay identical sequences; no ambient entropy.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// A generator seeded at `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit draw.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform-ish draw in `0..bound`; returns 0 for an empty range.
    pub fn next_usize_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }
}

/// A Fisher-Yates shuffled order of `0..len`, drawn from `rng`.
pub(crate) fn shuffled_indices(len: usize, rng: &mut Rng64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = rng.next_usize_below(i + 1);
        order.swap(i, j);
    }
    order
}
