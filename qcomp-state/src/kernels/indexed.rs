//! Indexed gate application (`apply_circuit_fast`)
//!
//! Instead of scanning all 2^n indices and skipping the ones whose target bit
//! is set, the kernels iterate over the compressed index space and rebuild
//! each full index with [`insert_zero_bit`]. Every loop iteration does useful
//! work and each pair or quadruple is produced exactly once.

use super::{apply_2x2, apply_4x4, insert_zero_bit};
use num_complex::Complex64;
use qcomp_core::{Gate, GateMatrix, Matrix2, Matrix4};

/// Index pairs `(i0, i1)` that differ only in bit `target`, with `i0` having it clear
pub fn pair_indices(target: usize, num_qubits: usize) -> impl Iterator<Item = (usize, usize)> {
    let mask = 1usize << target;
    (0..(1usize << num_qubits) >> 1).map(move |k| {
        let i0 = insert_zero_bit(k, target);
        (i0, i0 | mask)
    })
}

/// Index pairs differing in bit `target` whose `control` bit is set
pub fn controlled_pair_indices(
    control: usize,
    target: usize,
    num_qubits: usize,
) -> impl Iterator<Item = (usize, usize)> {
    quad_indices(control, target, num_qubits).map(|[_, _, i2, i3]| (i2, i3))
}

/// Quadruples of indices sharing every bit except `control` and `target`
///
/// Each quadruple is ordered by local index `2 * bit(control) + bit(target)`.
pub fn quad_indices(
    control: usize,
    target: usize,
    num_qubits: usize,
) -> impl Iterator<Item = [usize; 4]> {
    let (low, high) = (control.min(target), control.max(target));
    let control_mask = 1usize << control;
    let target_mask = 1usize << target;
    (0..(1usize << num_qubits) >> 2).map(move |k| {
        let base = insert_zero_bit(insert_zero_bit(k, low), high);
        [
            base,
            base | target_mask,
            base | control_mask,
            base | control_mask | target_mask,
        ]
    })
}

/// Apply a 2×2 matrix to qubit `target`
pub fn apply_single(state: &mut [Complex64], matrix: &Matrix2, target: usize, num_qubits: usize) {
    for (i0, i1) in pair_indices(target, num_qubits) {
        let (a0, a1) = apply_2x2(matrix, state[i0], state[i1]);
        state[i0] = a0;
        state[i1] = a1;
    }
}

/// Apply `block` to `target` on the amplitudes whose `control` bit is set
///
/// Amplitudes with the control bit clear are not read or written.
pub fn apply_controlled(
    state: &mut [Complex64],
    block: &Matrix2,
    control: usize,
    target: usize,
    num_qubits: usize,
) {
    for (i0, i1) in controlled_pair_indices(control, target, num_qubits) {
        let (a0, a1) = apply_2x2(block, state[i0], state[i1]);
        state[i0] = a0;
        state[i1] = a1;
    }
}

/// Apply a general 4×4 matrix to the (`control`, `target`) qubit pair
pub fn apply_two_qubit(
    state: &mut [Complex64],
    matrix: &Matrix4,
    control: usize,
    target: usize,
    num_qubits: usize,
) {
    for idx in quad_indices(control, target, num_qubits) {
        let out = apply_4x4(matrix, idx.map(|i| state[i]));
        for (i, value) in idx.into_iter().zip(out) {
            state[i] = value;
        }
    }
}

/// Apply any gate with the indexed traversal
pub fn apply_gate(state: &mut [Complex64], gate: &Gate, num_qubits: usize) {
    let target = gate.target().index();
    match (gate.matrix(), gate.control()) {
        (GateMatrix::Single(m), _) => apply_single(state, m, target, num_qubits),
        (GateMatrix::Two(m), Some(control)) => match gate.controlled_block() {
            Some(block) => apply_controlled(state, &block, control.index(), target, num_qubits),
            None => apply_two_qubit(state, m, control.index(), target, num_qubits),
        },
        // constructors and the deserializer always set the second qubit
        (GateMatrix::Two(_), None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qcomp_gates::matrices::{HADAMARD, PAULI_X, SWAP};
    use std::collections::HashSet;

    fn basis(num_qubits: usize, index: usize) -> Vec<Complex64> {
        let mut state = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        state[index] = Complex64::new(1.0, 0.0);
        state
    }

    #[test]
    fn test_pair_indices_cover_each_pair_once() {
        for target in 0..3 {
            let pairs: Vec<(usize, usize)> = pair_indices(target, 3).collect();
            assert_eq!(pairs.len(), 4);

            let touched: HashSet<usize> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
            assert_eq!(touched.len(), 8);

            for (i0, i1) in pairs {
                assert_eq!(i0 ^ i1, 1 << target);
                assert_eq!(i0 & (1 << target), 0);
            }
        }
    }

    #[test]
    fn test_quad_indices_partition_state() {
        for (control, target) in [(0, 1), (1, 0), (0, 2), (2, 1)] {
            let quads: Vec<[usize; 4]> = quad_indices(control, target, 3).collect();
            assert_eq!(quads.len(), 2);
            let touched: HashSet<usize> = quads.iter().flatten().copied().collect();
            assert_eq!(touched.len(), 8);
            for q in quads {
                assert_eq!(q[1] ^ q[0], 1 << target);
                assert_eq!(q[2] ^ q[0], 1 << control);
            }
        }
    }

    #[test]
    fn test_controlled_pairs_have_control_set() {
        let pairs: Vec<(usize, usize)> = controlled_pair_indices(2, 0, 3).collect();
        assert_eq!(pairs, vec![(0b100, 0b101), (0b110, 0b111)]);
    }

    #[test]
    fn test_x_on_each_qubit() {
        for target in 0..3 {
            let mut state = basis(3, 0);
            apply_single(&mut state, &PAULI_X, target, 3);
            assert_eq!(state[1 << target], Complex64::new(1.0, 0.0));
            assert_eq!(state[0], Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_hadamard() {
        let mut state = basis(1, 0);
        apply_single(&mut state, &HADAMARD, 0, 1);
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(state[0].re, inv_sqrt2, epsilon = 1e-12);
        assert_relative_eq!(state[1].re, inv_sqrt2, epsilon = 1e-12);
    }

    #[test]
    fn test_controlled_x_only_fires_with_control_set() {
        // control 0, target 1
        let mut state = basis(2, 0b00);
        apply_controlled(&mut state, &PAULI_X, 0, 1, 2);
        assert_eq!(state[0b00], Complex64::new(1.0, 0.0));

        let mut state = basis(2, 0b01);
        apply_controlled(&mut state, &PAULI_X, 0, 1, 2);
        assert_eq!(state[0b11], Complex64::new(1.0, 0.0));
        assert_eq!(state[0b01], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_swap() {
        let mut state = basis(3, 0b001);
        apply_two_qubit(&mut state, &SWAP, 2, 0, 3);
        assert_eq!(state[0b100], Complex64::new(1.0, 0.0));
    }
}
