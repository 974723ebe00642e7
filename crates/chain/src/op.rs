use num_complex::Complex64;

pub type C64 = Complex64;

/// Dense square complex matrix, row-major.
#[derive(Clone, Debug)]
pub struct Op {
    pub data: Vec<C64>,
    pub dim: usize,
}

impl Op {
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![C64::new(0.0, 0.0); dim * dim],
            dim,
        }
    }

    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.set(i, i, C64::new(1.0, 0.0));
        }
        m
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.dim + c
    }

    pub fn get(&self, r: usize, c: usize) -> C64 {
        self.data[self.idx(r, c)]
    }

    pub fn set(&mut self, r: usize, c: usize, v: C64) {
        let i = self.idx(r, c);
        self.data[i] = v;
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Op {
        let mut out = Op::zeros(self.dim);
        for r in 0..self.dim {
            for c in 0..self.dim {
                out.set(c, r, self.get(r, c).conj());
            }
        }
        out
    }

    pub fn matmul(&self, rhs: &Op) -> Op {
        debug_assert_eq!(self.dim, rhs.dim, "matmul requires equal dimensions");
        let mut out = Op::zeros(self.dim);
        for r in 0..self.dim {
            for k in 0..self.dim {
                let lv = self.get(r, k);
                for c in 0..self.dim {
                    let cur = out.get(r, c);
                    out.set(r, c, cur + lv * rhs.get(k, c));
                }
            }
        }
        out
    }

    /// Kronecker product; `self` supplies the high-order index bits.
    pub fn kron(&self, rhs: &Op) -> Op {
        let (da, db) = (self.dim, rhs.dim);
        let mut out = Op::zeros(da * db);
        for ra in 0..da {
            for ca in 0..da {
                let av = self.get(ra, ca);
                for rb in 0..db {
                    for cb in 0..db {
                        out.set(ra * db + rb, ca * db + cb, av * rhs.get(rb, cb));
                    }
                }
            }
        }
        out
    }

    pub fn scaled(&self, s: C64) -> Op {
        let mut out = self.clone();
        for v in &mut out.data {
            *v *= s;
        }
        out
    }

    pub fn add(&self, rhs: &Op) -> Op {
        debug_assert_eq!(self.dim, rhs.dim, "add requires equal dimensions");
        let mut out = self.clone();
        for (v, w) in out.data.iter_mut().zip(&rhs.data) {
            *v += w;
        }
        out
    }

    /// Matrix-vector product. Caller checks the dimension.
    pub fn apply(&self, v: &[C64]) -> Vec<C64> {
        debug_assert_eq!(self.dim, v.len(), "apply requires a matching vector");
        let mut out = vec![C64::new(0.0, 0.0); self.dim];
        for r in 0..self.dim {
            let mut acc = C64::new(0.0, 0.0);
            for c in 0..self.dim {
                acc += self.get(r, c) * v[c];
            }
            out[r] = acc;
        }
        out
    }

    /// Largest elementwise |a - b|.
    pub fn max_abs_diff(&self, rhs: &Op) -> f64 {
        debug_assert_eq!(self.dim, rhs.dim, "max_abs_diff requires equal dimensions");
        self.data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::{C64, Op};

    #[test]
    fn identity_is_matmul_neutral() {
        let mut a = Op::zeros(2);
        a.set(0, 1, C64::new(2.0, -1.0));
        a.set(1, 0, C64::new(0.5, 3.0));

        let i = Op::identity(2);
        assert_eq!(a.matmul(&i).max_abs_diff(&a), 0.0);
        assert_eq!(i.matmul(&a).max_abs_diff(&a), 0.0);
    }

    #[test]
    fn dagger_is_involutive() {
        let mut a = Op::zeros(2);
        a.set(0, 0, C64::new(1.0, 2.0));
        a.set(0, 1, C64::new(-3.0, 0.5));
        a.set(1, 1, C64::new(0.0, -1.0));

        assert_eq!(a.dagger().dagger().max_abs_diff(&a), 0.0);
    }

    #[test]
    fn kron_dimensions_multiply() {
        let a = Op::identity(2);
        let b = Op::identity(4);
        assert_eq!(a.kron(&b).dim, 8);
    }
}
