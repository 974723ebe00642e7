use faer::{Mat, Side};

use crate::op::{C64, Op};

/// Unitary U = exp(i·dt·H) for Hermitian `h`.
///
/// Computed by self-adjoint eigendecomposition H = V·diag(λ)·V†, so that
/// U = V·diag(e^{i·dt·λ})·V†. Unitary by construction for any real `dt`
/// and real couplings.
pub fn evolution_operator(h: &Op, dt: f64) -> Op {
    let dim = h.dim;

    let mut m = Mat::<C64>::zeros(dim, dim);
    for r in 0..dim {
        for c in 0..dim {
            m.write(r, c, h.get(r, c));
        }
    }

    let evd = m.selfadjoint_eigendecomposition(Side::Lower);
    let v = evd.u();
    let lambda = evd.s().column_vector();

    let mut u = Op::zeros(dim);
    for r in 0..dim {
        for c in 0..dim {
            let mut acc = C64::new(0.0, 0.0);
            for j in 0..dim {
                let phase = C64::new(0.0, dt * lambda.read(j).re).exp();
                acc += v.read(r, j) * phase * v.read(c, j).conj();
            }
            u.set(r, c, acc);
        }
    }
    u
}
