//! Dense matrix helpers for gate matrices
//!
//! Matrices are square and stored row-major in flat vectors. These helpers
//! back the reference (dense) strategy of the state engine, which embeds a
//! gate into the full register operator by Kronecker products.
//!
//! # Example
//!
//! ```rust
//! use qcomp_gates::matrix_ops::{identity_matrix, is_unitary, matrix_to_vec, tensor_product};
//! use qcomp_gates::matrices::PAULI_X;
//!
//! // X on qubit 0 of a 2-qubit register: I ⊗ X (qubit 1 is the left factor)
//! let op = tensor_product(&identity_matrix(2), &matrix_to_vec(&PAULI_X));
//! assert_eq!(op.len(), 16);
//! assert!(is_unitary(&op, 1e-12));
//! ```

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Side length of a square row-major matrix
#[inline]
pub fn matrix_dimension(matrix: &[Complex64]) -> usize {
    let n = (matrix.len() as f64).sqrt().round() as usize;
    debug_assert_eq!(n * n, matrix.len(), "matrix must be square");
    n
}

/// Compute the tensor (Kronecker) product A ⊗ B
///
/// For A (m×m) and B (n×n) the result is (mn)×(mn); element
/// `(i*n + k, j*n + l)` equals `A[i][j] * B[k][l]`.
pub fn tensor_product(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let n_a = matrix_dimension(a);
    let n_b = matrix_dimension(b);
    let n_result = n_a * n_b;
    let mut result = vec![ZERO; n_result * n_result];

    for i in 0..n_a {
        for j in 0..n_a {
            let a_ij = a[i * n_a + j];
            if a_ij == ZERO {
                continue;
            }
            for k in 0..n_b {
                for l in 0..n_b {
                    let row = i * n_b + k;
                    let col = j * n_b + l;
                    result[row * n_result + col] = a_ij * b[k * n_b + l];
                }
            }
        }
    }

    result
}

/// Create an identity matrix of the given size
pub fn identity_matrix(size: usize) -> Vec<Complex64> {
    let mut matrix = vec![ZERO; size * size];
    for i in 0..size {
        matrix[i * size + i] = ONE;
    }
    matrix
}

/// Multiply two square matrices of equal size
pub fn matrix_multiply(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let n = matrix_dimension(a);
    debug_assert_eq!(a.len(), b.len());
    let mut result = vec![ZERO; n * n];

    for i in 0..n {
        for k in 0..n {
            let a_ik = a[i * n + k];
            for j in 0..n {
                result[i * n + j] += a_ik * b[k * n + j];
            }
        }
    }

    result
}

/// Conjugate transpose
pub fn matrix_adjoint(matrix: &[Complex64]) -> Vec<Complex64> {
    let n = matrix_dimension(matrix);
    let mut result = vec![ZERO; n * n];
    for i in 0..n {
        for j in 0..n {
            result[j * n + i] = matrix[i * n + j].conj();
        }
    }
    result
}

/// Check U†U = I within `tolerance` in every element
pub fn is_unitary(matrix: &[Complex64], tolerance: f64) -> bool {
    let n = matrix_dimension(matrix);
    let product = matrix_multiply(&matrix_adjoint(matrix), matrix);

    (0..n).all(|i| {
        (0..n).all(|j| {
            let expected = if i == j { ONE } else { ZERO };
            (product[i * n + j] - expected).norm() <= tolerance
        })
    })
}

/// Flatten a fixed-size matrix to row-major order
pub fn matrix_to_vec<const N: usize>(matrix: &[[Complex64; N]; N]) -> Vec<Complex64> {
    matrix.iter().flatten().copied().collect()
}
