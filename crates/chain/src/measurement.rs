use rng::ShakeRng;

use crate::error::{ChainError, ChainResult};
use crate::op::C64;
use crate::state::State;

/// Projective Z measurement of qubit `k`, collapsing the state in place.
///
/// The outcome is sampled by the Born rule: P(0) is the squared norm of
/// the projection onto the subspace where bit k is clear, and the draw
/// selects 0 iff it falls below P(0). Amplitudes inconsistent with the
/// outcome are zeroed and the state is renormalized.
pub fn measure_z(psi: &mut State, k: usize, rng: &mut ShakeRng) -> ChainResult<u8> {
    if k >= psi.n {
        return Err(ChainError::QubitOutOfRange {
            qubit: k,
            n_qubits: psi.n,
        });
    }

    let prob0: f64 = psi
        .amps
        .iter()
        .enumerate()
        .filter(|(idx, _)| (idx >> k) & 1 == 0)
        .map(|(_, a)| a.norm_sqr())
        .sum();

    let outcome: u8 = if rng.next_f64(b"MEASURE_Z") < prob0 { 0 } else { 1 };

    for (idx, a) in psi.amps.iter_mut().enumerate() {
        if ((idx >> k) & 1) as u8 != outcome {
            *a = C64::new(0.0, 0.0);
        }
    }
    psi.normalize();

    Ok(outcome)
}
