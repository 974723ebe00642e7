use crate::error::{ChainError, ChainResult};
use crate::op::{C64, Op};

/// Pure state of an n-qubit register: 2^n complex amplitudes.
///
/// Qubit k is bit k of the amplitude index. Unit norm is maintained by
/// every operation that consumes the state.
#[derive(Clone, Debug)]
pub struct State {
    pub amps: Vec<C64>,
    pub n: usize,
}

impl State {
    /// The all-zero basis state |0…0⟩.
    pub fn zero(n: usize) -> Self {
        let mut amps = vec![C64::new(0.0, 0.0); 1 << n];
        amps[0] = C64::new(1.0, 0.0);
        Self { amps, n }
    }

    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    /// L2 norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Rescale to unit norm. A zero vector is left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            return;
        }
        for a in &mut self.amps {
            *a /= norm;
        }
    }

    /// In-place update ψ ← Uψ.
    pub fn apply(&mut self, u: &Op) -> ChainResult<()> {
        if u.dim != self.dim() {
            return Err(ChainError::DimensionMismatch {
                expected: self.dim(),
                got: u.dim,
            });
        }
        self.amps = u.apply(&self.amps);
        Ok(())
    }

    /// ⟨ψ|op|ψ⟩, complex.
    pub fn expectation(&self, op: &Op) -> ChainResult<C64> {
        if op.dim != self.dim() {
            return Err(ChainError::DimensionMismatch {
                expected: self.dim(),
                got: op.dim,
            });
        }
        let mut acc = C64::new(0.0, 0.0);
        for r in 0..op.dim {
            let mut row = C64::new(0.0, 0.0);
            for c in 0..op.dim {
                row += op.get(r, c) * self.amps[c];
            }
            acc += self.amps[r].conj() * row;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::op::{C64, Op};

    #[test]
    fn zero_state_has_unit_norm() {
        let psi = State::zero(3);
        assert_eq!(psi.dim(), 8);
        assert!((psi.norm() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn apply_rejects_mismatched_operator() {
        let mut psi = State::zero(3);
        let u = Op::identity(4);
        assert!(psi.apply(&u).is_err());
    }

    #[test]
    fn expectation_of_identity_is_one() {
        let psi = State::zero(2);
        let e = psi.expectation(&Op::identity(4)).unwrap();
        assert!((e - C64::new(1.0, 0.0)).norm() < 1e-15);
    }
}
