use crate::op::{C64, Op};

pub fn identity() -> Op {
    Op::identity(2)
}

pub fn pauli_x() -> Op {
    let mut m = Op::zeros(2);
    m.set(0, 1, C64::new(1.0, 0.0));
    m.set(1, 0, C64::new(1.0, 0.0));
    m
}

pub fn pauli_y() -> Op {
    let mut m = Op::zeros(2);
    m.set(0, 1, C64::new(0.0, -1.0));
    m.set(1, 0, C64::new(0.0, 1.0));
    m
}

pub fn pauli_z() -> Op {
    let mut m = Op::zeros(2);
    m.set(0, 0, C64::new(1.0, 0.0));
    m.set(1, 1, C64::new(-1.0, 0.0));
    m
}

/// Dense matrix of a2 ⊗ a1 ⊗ a0.
///
/// Qubit k is bit k of the basis-state index, so the last argument acts
/// on qubit 0 (the least-significant bit).
pub fn kron3(a2: &Op, a1: &Op, a0: &Op) -> Op {
    a2.kron(a1).kron(a0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paulis_are_involutions() {
        let i = identity();
        for p in [pauli_x(), pauli_y(), pauli_z()] {
            assert!(p.matmul(&p).max_abs_diff(&i) < 1e-15);
        }
    }

    #[test]
    fn xy_equals_i_times_z() {
        let xy = pauli_x().matmul(&pauli_y());
        let iz = pauli_z().scaled(C64::new(0.0, 1.0));
        assert!(xy.max_abs_diff(&iz) < 1e-15);
    }

    #[test]
    fn kron3_places_rightmost_factor_on_qubit_zero() {
        // (I ⊗ I ⊗ X)|000> = |001>: column 0 has its 1 in row 1.
        let m = kron3(&identity(), &identity(), &pauli_x());
        assert_eq!(m.dim, 8);
        assert!((m.get(1, 0) - C64::new(1.0, 0.0)).norm() < 1e-15);
        assert!(m.get(4, 0).norm() < 1e-15);

        // (X ⊗ I ⊗ I)|000> = |100>: the 1 moves to row 4.
        let m = kron3(&pauli_x(), &identity(), &identity());
        assert!((m.get(4, 0) - C64::new(1.0, 0.0)).norm() < 1e-15);
    }
}
