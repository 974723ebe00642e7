use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic SHAKE-256 counter RNG.
///
/// Every draw ratchets an internal 32-byte state forward and hashes it
/// together with a caller-supplied context label, so distinct sampling
/// sites never consume the same stream position. Two instances built
/// from the same seed produce identical sequences.
pub struct ShakeRng {
    state: [u8; 32],
    step: u64,
}

impl ShakeRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"CHAIN_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Uniform draw in [0, 1) with 53 bits of precision.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"CHAIN_STEP"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        (u64::from_be_bytes(out) >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
