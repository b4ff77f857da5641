use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

use crate::ModInt;

/// Square matrix over [`ModInt`], stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    inner: Vec<ModInt>,
    size: usize,
}

impl Matrix {
    pub fn zero(size: usize) -> Matrix {
        Matrix {
            inner: vec![ModInt::ZERO; size * size],
            size,
        }
    }

    pub fn identity(size: usize) -> Matrix {
        let mut m = Matrix::zero(size);
        for i in 0..size {
            m[(i, i)] = ModInt::ONE;
        }
        m
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn inner_index(&self, index: (usize, usize)) -> usize {
        index.0 * self.size + index.1
    }

    /// Transition matrix for appending one element of value `v` over states `0..=k`.
    pub fn elemental(v: usize, k: usize) -> Matrix {
        let mut m = Matrix::zero(k + 1);
        m.assign_elemental(v);
        m
    }

    /// Overwrites `self` with the elemental matrix of `v`: the identity with
    /// one added to row `v` across columns `0..=v`.
    pub fn assign_elemental(&mut self, v: usize) {
        debug_assert!(v < self.size);
        self.inner.fill(ModInt::ZERO);
        for i in 0..self.size {
            self[(i, i)] = ModInt::ONE;
        }
        for i in 0..=v {
            self[(v, i)] += ModInt::ONE;
        }
    }

    /// Writes `elemental(v) * self` into `dest`.
    ///
    /// Only row `v` changes: every column gains the sum of its entries in rows `0..=v`.
    pub fn compose_left_into(&self, v: usize, dest: &mut Matrix) {
        debug_assert_eq!(self.size, dest.size);
        debug_assert!(v < self.size);
        dest.inner.copy_from_slice(&self.inner);
        for col in 0..self.size {
            let column_sum: ModInt = (0..=v).map(|row| self[(row, col)]).sum();
            dest[(v, col)] += column_sum;
        }
    }

    /// Writes `self * elemental(v)` into `dest`.
    ///
    /// Every row gains its entry in column `v` on columns `0..=v`.
    pub fn compose_right_into(&self, v: usize, dest: &mut Matrix) {
        debug_assert_eq!(self.size, dest.size);
        debug_assert!(v < self.size);
        dest.inner.copy_from_slice(&self.inner);
        for row in 0..self.size {
            let pivot = self[(row, v)];
            for col in 0..=v {
                dest[(row, col)] += pivot;
            }
        }
    }

    pub fn compose_left(&self, v: usize) -> Matrix {
        let mut dest = Matrix::zero(self.size);
        self.compose_left_into(v, &mut dest);
        dest
    }

    pub fn compose_right(&self, v: usize) -> Matrix {
        let mut dest = Matrix::zero(self.size);
        self.compose_right_into(v, &mut dest);
        dest
    }

    /// Writes `self * vector` into `out`.
    pub fn apply_into(&self, vector: &[ModInt], out: &mut [ModInt]) {
        assert_eq!(vector.len(), self.size);
        assert_eq!(out.len(), self.size);
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = self
                .row(row)
                .iter()
                .zip(vector)
                .map(|(&a, &x)| a * x)
                .sum();
        }
    }

    pub fn apply(&self, vector: &[ModInt]) -> Vec<ModInt> {
        let mut out = vec![ModInt::ZERO; self.size];
        self.apply_into(vector, &mut out);
        out
    }

    pub fn row(&self, row: usize) -> &[ModInt] {
        let start = row * self.size;
        &self.inner[start..start + self.size]
    }

    pub fn column(&self, col: usize) -> Vec<ModInt> {
        (0..self.size).map(|row| self[(row, col)]).collect()
    }
}

/// Canonical start vector of length `size`: one at state zero, zero elsewhere.
pub fn unit_vector(size: usize) -> Vec<ModInt> {
    let mut vector = vec![ModInt::ZERO; size];
    if let Some(first) = vector.first_mut() {
        *first = ModInt::ONE;
    }
    vector
}

impl Index<(usize, usize)> for Matrix {
    type Output = ModInt;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.inner.index(self.inner_index(index))
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let index = self.inner_index(index);
        self.inner.index_mut(index)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        assert_eq!(self.size, rhs.size);
        let n = self.size;
        let mut c = Matrix::zero(n);
        for row in 0..n {
            for col in 0..n {
                c[(row, col)] = (0..n).map(|i| self[(row, i)] * rhs[(i, col)]).sum();
            }
        }
        c
    }
}

#[derive(Debug)]
pub struct NotSquareError;

impl TryFrom<Vec<Vec<u32>>> for Matrix {
    type Error = NotSquareError;

    fn try_from(value: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        let size = value.len();
        if value.iter().any(|row| row.len() != size) {
            return Err(NotSquareError);
        }
        Ok(Matrix {
            inner: value.into_iter().flatten().map(ModInt::from).collect(),
            size,
        })
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.size).map(|row| self.row(row)))
            .finish()
    }
}
