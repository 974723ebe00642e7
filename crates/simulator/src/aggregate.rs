use crate::error::{SimError, SimResult};

/// Per-step arithmetic mean over trajectory energy sequences.
///
/// The sum is commutative, so the result does not depend on trajectory
/// order. Zero sequences is an error, never a NaN.
pub fn mean_energy(sequences: &[Vec<f64>]) -> SimResult<Vec<f64>> {
    let first = sequences.first().ok_or(SimError::NoTrajectories)?;
    let len = first.len();
    if sequences.iter().any(|s| s.len() != len) {
        return Err(SimError::RaggedSequences);
    }

    let mut mean = vec![0.0f64; len];
    for seq in sequences {
        for (acc, e) in mean.iter_mut().zip(seq) {
            *acc += e;
        }
    }

    let n = sequences.len() as f64;
    for acc in &mut mean {
        *acc /= n;
    }
    Ok(mean)
}
