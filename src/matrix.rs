//! Dense integer matrices with the modular operations the cipher needs.
//!
//! A [`Matrix`] plays two roles: the key (n×n) and the block grid (n rows,
//! one column per block). Entries are plain `i64`; callers normalize into
//! `[0, 26)` at the boundaries with [`Matrix::normalized_mod26`].

use crate::error::{CipherError, Result};
use crate::modular::{mod_inverse, normalize_mod26, MODULUS};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Row-major dense matrix of `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Creates a zero-filled `rows × cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    /// Returns [`CipherError::DimensionMismatch`] if the rows differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcipher::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![3, 3], vec![2, 5]]).unwrap();
    /// assert_eq!(m.determinant(), 9);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(CipherError::DimensionMismatch {
                expected: cols,
                found: bad.len(),
            });
        }
        let num_rows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix {
            rows: num_rows,
            cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Sets the entry at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col] = value;
    }

    /// Copies column `col` out as a vector.
    pub fn column(&self, col: usize) -> Vec<i64> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// Returns a copy with every entry reduced into `[0, 26)`.
    pub fn normalized_mod26(&self) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| normalize_mod26(v)).collect(),
        }
    }

    /// Integer determinant.
    ///
    /// Uses the closed form `a*d - b*c` for 2×2 and Laplace expansion along
    /// the first row otherwise. The determinant of a 0×0 matrix is 1.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn determinant(&self) -> i64 {
        assert!(self.is_square(), "determinant of a non-square matrix");
        match self.rows {
            0 => 1,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => (0..n)
                .map(|c| self.get(0, c) * self.cofactor(0, c))
                .sum(),
        }
    }

    /// Matrix with row `row` and column `col` removed.
    fn minor(&self, row: usize, col: usize) -> Matrix {
        let mut out = Matrix::new(self.rows - 1, self.cols - 1);
        let mut k = 0;
        for r in (0..self.rows).filter(|&r| r != row) {
            for c in (0..self.cols).filter(|&c| c != col) {
                out.data[k] = self.get(r, c);
                k += 1;
            }
        }
        out
    }

    /// Signed minor `(-1)^(row+col) * det(minor(row, col))`.
    fn cofactor(&self, row: usize, col: usize) -> i64 {
        let det = self.minor(row, col).determinant();
        if (row + col).is_multiple_of(2) {
            det
        } else {
            -det
        }
    }

    /// Adjugate (transpose of the cofactor matrix).
    ///
    /// For 2×2 this swaps the diagonal and negates the off-diagonal entries.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn adjugate(&self) -> Matrix {
        assert!(self.is_square(), "adjugate of a non-square matrix");
        let n = self.rows;
        let mut adj = Matrix::new(n, n);
        match n {
            0 => {}
            1 => adj.data[0] = 1,
            2 => {
                adj.data = vec![self.data[3], -self.data[1], -self.data[2], self.data[0]];
            }
            _ => {
                for r in 0..n {
                    for c in 0..n {
                        adj.set(c, r, self.cofactor(r, c));
                    }
                }
            }
        }
        adj
    }

    /// Inverse modulo 26, with every entry in `[0, 26)`.
    ///
    /// Computed as `adj(K) * det(K)^-1 mod 26` on the normalized matrix.
    ///
    /// # Errors
    /// - [`CipherError::NotSquare`] if the matrix is not square.
    /// - [`CipherError::NotInvertibleMod26`] if the determinant shares a
    ///   factor with 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcipher::Matrix;
    ///
    /// let key = Matrix::from([[3, 3], [2, 5]]);
    /// assert_eq!(key.inverse_mod26().unwrap(), Matrix::from([[15, 17], [20, 9]]));
    /// ```
    pub fn inverse_mod26(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(CipherError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let reduced = self.normalized_mod26();
        let det = normalize_mod26(reduced.determinant());
        let det_inv =
            mod_inverse(det, MODULUS).ok_or(CipherError::NotInvertibleMod26 { determinant: det })?;

        let mut inv = reduced.adjugate();
        for v in inv.data.iter_mut() {
            *v = normalize_mod26(normalize_mod26(*v) * det_inv);
        }
        Ok(inv)
    }

    /// Multiplies this matrix by a column vector.
    ///
    /// # Errors
    /// Returns [`CipherError::DimensionMismatch`] if `vector.len() != cols`.
    pub fn mul_vector(&self, vector: &[i64]) -> Result<Vec<i64>> {
        if vector.len() != self.cols {
            return Err(CipherError::DimensionMismatch {
                expected: self.cols,
                found: vector.len(),
            });
        }
        Ok((0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.get(r, c) * vector[c]).sum())
            .collect())
    }

    /// Multiplies this matrix into every column of `grid` independently.
    ///
    /// The result has `self.rows()` rows and `grid.cols()` columns. Entries
    /// are not reduced.
    ///
    /// # Errors
    /// Returns [`CipherError::DimensionMismatch`] if `grid.rows() != cols`.
    pub fn mul_columns(&self, grid: &Matrix) -> Result<Matrix> {
        if grid.rows != self.cols {
            return Err(CipherError::DimensionMismatch {
                expected: self.cols,
                found: grid.rows,
            });
        }

        #[cfg(feature = "parallel")]
        let columns: Vec<Vec<i64>> = (0..grid.cols)
            .into_par_iter()
            .map(|c| self.mul_vector(&grid.column(c)))
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let columns: Vec<Vec<i64>> = (0..grid.cols)
            .map(|c| self.mul_vector(&grid.column(c)))
            .collect::<Result<_>>()?;

        let mut out = Matrix::new(self.rows, grid.cols);
        for (c, column) in columns.iter().enumerate() {
            for (r, &v) in column.iter().enumerate() {
                out.set(r, c, v);
            }
        }
        Ok(out)
    }
}

impl<const R: usize, const C: usize> From<[[i64; C]; R]> for Matrix {
    fn from(rows: [[i64; C]; R]) -> Self {
        Matrix {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }
}
