//! Gate application kernels
//!
//! Two in-place traversals of the amplitude vector, both touching only the
//! amplitudes a gate acts on:
//!
//! - [`indexed`]: walks the compressed index space (2^(n-1) pair indices or
//!   2^(n-2) quadruple indices) and rebuilds each full index by inserting
//!   zero bits at the gate's qubit positions
//! - [`blocked`]: cuts the vector into contiguous blocks of 2^(q+1)
//!   amplitudes and updates each block with unit-stride inner loops; blocks
//!   are independent and can be processed on the rayon pool
//!
//! Both produce the same amplitudes as the dense reference in
//! [`operator`](crate::operator), up to floating-point rounding.
//!
//! Kernels assume their preconditions (`state.len() == 2^num_qubits`, gate
//! qubits below `num_qubits`); the [`Computer`](crate::Computer) validates
//! a whole circuit before calling them.

pub mod blocked;
pub mod indexed;

use num_complex::Complex64;
use qcomp_core::{Matrix2, Matrix4};

/// Insert a zero bit at position `bit`, shifting the higher bits up
///
/// Maps the compressed index `k` in `[0, 2^(n-1))` to the k-th index in
/// `[0, 2^n)` whose bit `bit` is clear.
#[inline(always)]
pub fn insert_zero_bit(index: usize, bit: usize) -> usize {
    let low_mask = (1usize << bit) - 1;
    ((index & !low_mask) << 1) | (index & low_mask)
}

/// `(a0', a1') = M · (a0, a1)`
#[inline(always)]
pub(crate) fn apply_2x2(m: &Matrix2, a0: Complex64, a1: Complex64) -> (Complex64, Complex64) {
    (
        m[0][0] * a0 + m[0][1] * a1,
        m[1][0] * a0 + m[1][1] * a1,
    )
}

/// `a' = M · a` for the four amplitudes of a two-qubit block
#[inline(always)]
pub(crate) fn apply_4x4(m: &Matrix4, a: [Complex64; 4]) -> [Complex64; 4] {
    let mut out = [Complex64::new(0.0, 0.0); 4];
    for (r, row) in m.iter().enumerate() {
        out[r] = row[0] * a[0] + row[1] * a[1] + row[2] * a[2] + row[3] * a[3];
    }
    out
}
