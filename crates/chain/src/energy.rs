use crate::error::ChainResult;
use crate::op::Op;
use crate::state::State;

/// Imaginary residue above this indicates a non-Hermitian operator or
/// accumulated floating-point drift.
const IMAG_TOL: f64 = 1e-9;

/// Re⟨ψ|H|ψ⟩.
///
/// For Hermitian H the imaginary part is floating-point residue; it is
/// discarded after a tolerance check that warns instead of failing.
pub fn energy(psi: &State, h: &Op) -> ChainResult<f64> {
    let e = psi.expectation(h)?;
    if e.im.abs() > IMAG_TOL {
        log::warn!(
            "energy expectation has imaginary residue {:.3e}; discarding",
            e.im
        );
    }
    Ok(e.re)
}
