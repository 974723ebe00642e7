use crate::op::{C64, Op};
use crate::pauli::{identity, kron3, pauli_x, pauli_z};

/// Two-body Hamiltonian of the 3-qubit closed chain:
///
///   H = -(j1/2)·(I⊗X⊗X) + (j2/2)·(Z⊗Z⊗I) - (j3/2)·(X⊗I⊗X)
///
/// Qubit k is bit k of the basis-state index; the leftmost factor of each
/// written tensor product acts on qubit 2. The same convention applies to
/// the evolution operator and the measured-qubit index.
#[derive(Clone, Debug)]
pub struct ChainHamiltonian {
    pub j1: f64,
    pub j2: f64,
    pub j3: f64,
}

impl ChainHamiltonian {
    pub const NUM_QUBITS: usize = 3;

    pub fn new(j1: f64, j2: f64, j3: f64) -> Self {
        Self { j1, j2, j3 }
    }

    /// Dense 8×8 Hermitian matrix of H.
    pub fn matrix(&self) -> Op {
        let i = identity();
        let x = pauli_x();
        let z = pauli_z();

        let xx = kron3(&i, &x, &x).scaled(C64::new(-self.j1 / 2.0, 0.0));
        let zz = kron3(&z, &z, &i).scaled(C64::new(self.j2 / 2.0, 0.0));
        let xix = kron3(&x, &i, &x).scaled(C64::new(-self.j3 / 2.0, 0.0));

        xx.add(&zz).add(&xix)
    }
}

impl Default for ChainHamiltonian {
    /// Couplings of the closed-chain model.
    fn default() -> Self {
        Self::new(-2.0, 2.0, 2.0)
    }
}
