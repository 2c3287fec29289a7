//! Dense embedding of a gate into the full register (`apply_circuit`)
//!
//! A gate on qubits `t` (and `c`) acts on an n-qubit register as
//!
//! ```text
//! I ⊗ … ⊗ M ⊗ … ⊗ I      (qubit n-1 is the leftmost factor)
//! ```
//!
//! Row `r` and column `k` of that operator are non-zero only when `r` and `k`
//! agree on every bit outside the gate's support; the value is then the gate
//! matrix entry at their local indices. [`EmbeddedOperator::element`] uses
//! that closed form, [`EmbeddedOperator::to_dense`] builds the same matrix
//! from explicit Kronecker products.

use crate::error::{Result, StateError};
use num_complex::Complex64;
use qcomp_core::Gate;
use qcomp_gates::matrix_ops::{identity_matrix, tensor_product};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A gate viewed as a 2^n × 2^n operator
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedOperator<'a> {
    gate: &'a Gate,
    num_qubits: usize,
}

impl<'a> EmbeddedOperator<'a> {
    /// Embed `gate` into a register of `num_qubits` qubits
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the gate uses a qubit outside the register
    pub fn new(gate: &'a Gate, num_qubits: usize) -> Result<Self> {
        if gate.max_qubit() >= num_qubits {
            return Err(StateError::DimensionMismatch {
                expected: num_qubits,
                actual: gate.max_qubit().saturating_add(1),
            });
        }
        Ok(Self { gate, num_qubits })
    }

    /// Side length of the operator (2^n)
    #[inline]
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    /// Operator entry at (`row`, `col`)
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> Complex64 {
        if (row ^ col) & !self.gate.support_mask() != 0 {
            return ZERO;
        }
        self.gate
            .matrix()
            .get(self.gate.local_index(row), self.gate.local_index(col))
    }

    /// Row-major dense operator built from Kronecker products
    ///
    /// The gate matrix is split into its outer-product terms
    /// `m[a][b] · |a⟩⟨b|`; each term becomes a product of one factor per
    /// qubit and the terms are summed.
    pub fn to_dense(&self) -> Vec<Complex64> {
        let dim = self.dimension();
        let matrix = self.gate.matrix();
        let local_dim = matrix.dimension();
        let mut dense = vec![ZERO; dim * dim];

        for a in 0..local_dim {
            for b in 0..local_dim {
                let coefficient = matrix.get(a, b);
                if coefficient == ZERO {
                    continue;
                }
                let term = (0..self.num_qubits)
                    .rev()
                    .fold(vec![ONE], |acc, qubit| {
                        tensor_product(&acc, &self.factor(qubit, a, b))
                    });
                for (out, value) in dense.iter_mut().zip(term) {
                    *out += coefficient * value;
                }
            }
        }

        dense
    }

    /// Single-qubit factor of the `|a⟩⟨b|` term at `qubit`
    fn factor(&self, qubit: usize, a: usize, b: usize) -> Vec<Complex64> {
        let local_bit = if qubit == self.gate.target().index() {
            Some(0)
        } else if self.gate.control().map(|c| c.index()) == Some(qubit) {
            Some(1)
        } else {
            None
        };

        match local_bit {
            Some(bit) => {
                let mut outer = vec![ZERO; 4];
                outer[((a >> bit) & 1) * 2 + ((b >> bit) & 1)] = ONE;
                outer
            }
            None => identity_matrix(2),
        }
    }

    /// Dense matrix-vector product `O · state`
    ///
    /// `state.len()` must equal [`dimension`](Self::dimension).
    pub fn apply(&self, state: &[Complex64]) -> Vec<Complex64> {
        (0..self.dimension())
            .map(|row| {
                state
                    .iter()
                    .enumerate()
                    .fold(ZERO, |acc, (col, amplitude)| {
                        acc + self.element(row, col) * amplitude
                    })
            })
            .collect()
    }
}
