//! Quantum Fourier transform circuits
//!
//! For an n-qubit register the transform is built from a Hadamard on each
//! qubit `j`, followed by controlled phase rotations `cR(2π / 2^k)` with
//! target `j` and control `j + k - 1`, and a final layer of SWAPs reversing
//! the qubit order. Qubit 0 is the most significant digit of the transformed
//! value.
//!
//! The circuits are unitary, so no rescaling is needed after applying them.

use qcomp_core::{Circuit, Result};
use qcomp_gates::{make_gate, make_param_gate};
use std::f64::consts::PI;
use tracing::debug;

/// Forward quantum Fourier transform on qubits `0..num_qubits`
///
/// # Example
///
/// ```
/// use qcomp::qft::qft_circuit;
/// use qcomp::Computer;
///
/// let circuit = qft_circuit(3).unwrap();
/// let mut computer = Computer::new(3).unwrap();
/// computer.apply_circuit_fast(&circuit).unwrap();
///
/// // |000⟩ maps to the uniform superposition
/// for p in computer.probabilities() {
///     assert!((p - 0.125).abs() < 1e-12);
/// }
/// ```
pub fn qft_circuit(num_qubits: usize) -> Result<Circuit> {
    let mut circuit = Circuit::new();

    for j in 0..num_qubits {
        circuit.append(make_gate("H", j, None)?);
        for k in 2..=num_qubits - j {
            let phase = 2.0 * PI / (1u64 << k) as f64;
            circuit.append(make_param_gate("cR", j, Some(j + k - 1), phase)?);
        }
    }

    for i in 0..num_qubits / 2 {
        circuit.append(make_gate("SWAP", i, Some(num_qubits - 1 - i))?);
    }

    debug!(num_qubits, gates = circuit.len(), "built QFT circuit");
    Ok(circuit)
}

/// Inverse quantum Fourier transform, the adjoint of [`qft_circuit`]
pub fn inverse_qft_circuit(num_qubits: usize) -> Result<Circuit> {
    Ok(qft_circuit(num_qubits)?.adjoint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::{Complex64, Computer};

    fn reverse_bits(value: usize, width: usize) -> usize {
        (0..width).fold(0, |acc, k| (acc << 1) | ((value >> k) & 1))
    }

    #[test]
    fn test_gate_count() {
        // n Hadamards, n(n-1)/2 phases, n/2 swaps
        assert_eq!(qft_circuit(4).unwrap().len(), 4 + 6 + 2);
        assert_eq!(qft_circuit(1).unwrap().len(), 1);
        assert!(qft_circuit(0).unwrap().is_empty());
    }

    #[test]
    fn test_matches_discrete_fourier_transform() {
        let n = 3;
        let dim = 1usize << n;
        let circuit = qft_circuit(n).unwrap();

        for input in 0..dim {
            let mut computer = Computer::new(n).unwrap();
            computer
                .set_basis_state(qcomp_core::BasisState::new(input, n).unwrap())
                .unwrap();
            computer.apply_circuit_fast(&circuit).unwrap();

            for (output, amplitude) in computer.amplitudes().iter().enumerate() {
                let angle = 2.0 * PI * (reverse_bits(input, n) * reverse_bits(output, n)) as f64
                    / dim as f64;
                let expected = Complex64::from_polar(1.0 / (dim as f64).sqrt(), angle);
                assert_relative_eq!((amplitude - expected).norm(), 0.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_inverse_restores_input() {
        let n = 4;
        let forward = qft_circuit(n).unwrap();
        let inverse = inverse_qft_circuit(n).unwrap();

        let mut computer = Computer::new(n).unwrap();
        computer
            .set_basis_state(qcomp_core::BasisState::new(0b1011, n).unwrap())
            .unwrap();
        let input = computer.to_vec();

        computer.apply_circuit(&forward).unwrap();
        computer.apply_circuit_fast(&inverse).unwrap();
        for (a, b) in computer.amplitudes().iter().zip(&input) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-10);
        }

        computer.apply_circuit_fast2(&forward).unwrap();
        computer.apply_circuit(&inverse).unwrap();
        for (a, b) in computer.amplitudes().iter().zip(&input) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-10);
        }
    }
}
