//! End-to-end scenarios on small registers

use approx::assert_relative_eq;
use num_complex::Complex64;
use qcomp_core::{BasisState, Circuit, Gate, QubitId};
use qcomp_gates::{make_gate, matrices};
use qcomp_state::kernels::{blocked, indexed};
use qcomp_state::{Computer, ComputerConfig, StateError};
use std::collections::HashSet;

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn circuit_of(gates: &[(&str, usize, Option<usize>)]) -> Circuit {
    gates
        .iter()
        .map(|&(name, target, control)| make_gate(name, target, control).unwrap())
        .collect()
}

/// Run `circuit` from |0...0⟩ with every strategy
fn run_all(num_qubits: usize, circuit: &Circuit) -> [Vec<Complex64>; 3] {
    let mut a = Computer::new(num_qubits).unwrap();
    let mut b = Computer::new(num_qubits).unwrap();
    let mut c = Computer::with_config(num_qubits, ComputerConfig::parallel()).unwrap();
    a.apply_circuit(circuit).unwrap();
    b.apply_circuit_fast(circuit).unwrap();
    c.apply_circuit_fast2(circuit).unwrap();
    [a.to_vec(), b.to_vec(), c.to_vec()]
}

fn assert_state(actual: &[Complex64], expected: &[Complex64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(a.re, e.re, epsilon = 1e-10);
        assert_relative_eq!(a.im, e.im, epsilon = 1e-10);
    }
}

#[test]
fn test_x_flips_single_qubit() {
    for state in run_all(1, &circuit_of(&[("X", 0, None)])) {
        assert_state(&state, &[c(0.0, 0.0), c(1.0, 0.0)]);
    }
}

#[test]
fn test_bell_state() {
    let circuit = circuit_of(&[("H", 0, None), ("X", 1, Some(0))]);
    for state in run_all(2, &circuit) {
        assert_state(
            &state,
            &[c(INV_SQRT2, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(INV_SQRT2, 0.0)],
        );
    }
}

#[test]
fn test_z_on_ground_state_is_identity() {
    for state in run_all(2, &circuit_of(&[("Z", 0, None)])) {
        assert_state(
            &state,
            &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        );
    }
}

#[test]
fn test_empty_circuit_is_identity() {
    let mut computer = Computer::new(2).unwrap();
    let input = [c(0.5, 0.0), c(0.0, 0.5), c(-0.5, 0.0), c(0.0, -0.5)];
    computer.set_amplitudes(&input).unwrap();

    let empty = Circuit::new();
    computer.apply_circuit(&empty).unwrap();
    computer.apply_circuit_fast(&empty).unwrap();
    computer.apply_circuit_fast2(&empty).unwrap();
    assert_eq!(computer.amplitudes(), &input);
}

#[test]
fn test_self_inverse_gates() {
    let input = [c(0.1, 0.2), c(0.3, -0.4), c(0.5, 0.0), c(0.0, 0.66)];
    for name in ["X", "Y", "Z", "H"] {
        for target in 0..2 {
            let circuit = circuit_of(&[(name, target, None), (name, target, None)]);
            let mut computer = Computer::new(2).unwrap();
            computer.set_amplitudes(&input).unwrap();
            computer.apply_circuit_fast(&circuit).unwrap();
            assert_state(computer.amplitudes(), &input);
        }
    }
}

#[test]
fn test_ghz_state() {
    let circuit = circuit_of(&[("H", 0, None), ("CNOT", 1, Some(0)), ("CNOT", 2, Some(1))]);
    for state in run_all(3, &circuit) {
        assert_relative_eq!(state[0b000].re, INV_SQRT2, epsilon = 1e-10);
        assert_relative_eq!(state[0b111].re, INV_SQRT2, epsilon = 1e-10);
        let rest: f64 = state[1..7].iter().map(|a| a.norm_sqr()).sum();
        assert_relative_eq!(rest, 0.0, epsilon = 1e-10);
    }
}

#[test]
fn test_controlled_gate_ignores_unset_control() {
    // control qubit 1 stays |0⟩
    let circuit = circuit_of(&[("H", 0, None), ("Y", 0, Some(1))]);
    for state in run_all(2, &circuit) {
        assert_state(
            &state,
            &[c(INV_SQRT2, 0.0), c(INV_SQRT2, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        );
    }
}

#[test]
fn test_swap_exchanges_qubits() {
    let circuit = circuit_of(&[("X", 0, None), ("SWAP", 0, Some(2))]);
    for state in run_all(3, &circuit) {
        assert_relative_eq!(state[0b100].re, 1.0, epsilon = 1e-10);
    }
}

/// Apply `gate` to an all-ones register with both optimized strategies
fn scaled_by(num_qubits: usize, gate: &Gate) -> [Vec<Complex64>; 2] {
    let ones = vec![c(1.0, 0.0); 1 << num_qubits];
    let mut fast = Computer::new(num_qubits).unwrap();
    let mut fast2 = Computer::with_config(num_qubits, ComputerConfig::parallel()).unwrap();
    fast.set_amplitudes(&ones).unwrap();
    fast2.set_amplitudes(&ones).unwrap();
    fast.apply_gate_fast(gate).unwrap();
    fast2.apply_gate_fast2(gate).unwrap();
    [fast.to_vec(), fast2.to_vec()]
}

#[test]
fn test_single_qubit_kernels_touch_every_amplitude_once() {
    // a pair visited twice would show 4, 6 or 9
    let diag = [[c(2.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(3.0, 0.0)]];
    for target in 0..3 {
        let gate = Gate::single("D", QubitId::new(target), diag);
        for state in scaled_by(3, &gate) {
            for (i, a) in state.iter().enumerate() {
                let expected = if i & (1 << target) == 0 { 2.0 } else { 3.0 };
                assert_eq!(*a, c(expected, 0.0), "index {} target {}", i, target);
            }
        }
    }
}

#[test]
fn test_controlled_kernels_touch_control_set_amplitudes_once() {
    let diag = [[c(2.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(3.0, 0.0)]];
    for control in 0..3 {
        for target in (0..3).filter(|&t| t != control) {
            let gate =
                Gate::controlled("cD", QubitId::new(target), QubitId::new(control), diag).unwrap();
            for state in scaled_by(3, &gate) {
                for (i, a) in state.iter().enumerate() {
                    let expected = match ((i >> control) & 1, (i >> target) & 1) {
                        (0, _) => 1.0,
                        (_, 0) => 2.0,
                        _ => 3.0,
                    };
                    assert_eq!(*a, c(expected, 0.0), "index {} c{} t{}", i, control, target);
                }
            }
        }
    }
}

#[test]
fn test_two_qubit_kernels_touch_every_quadruple_once() {
    let mut diag = [[c(0.0, 0.0); 4]; 4];
    for (k, value) in [2.0, 3.0, 5.0, 7.0].into_iter().enumerate() {
        diag[k][k] = c(value, 0.0);
    }
    for control in 0..3 {
        for target in (0..3).filter(|&t| t != control) {
            let gate =
                Gate::two_qubit("D4", QubitId::new(target), QubitId::new(control), diag).unwrap();
            for state in scaled_by(3, &gate) {
                for (i, a) in state.iter().enumerate() {
                    let local = (((i >> control) & 1) << 1) | ((i >> target) & 1);
                    assert_eq!(*a, diag[local][local], "index {} c{} t{}", i, control, target);
                }
            }
        }
    }
}

#[test]
fn test_indexed_pairs_cover_every_index_once() {
    for target in 0..3 {
        let mut seen = HashSet::new();
        for (i0, i1) in indexed::pair_indices(target, 3) {
            assert_eq!(i0 ^ i1, 1 << target);
            assert!(seen.insert(i0));
            assert!(seen.insert(i1));
        }
        assert_eq!(seen.len(), 8);
    }
}

#[test]
fn test_out_of_range_gate_rejected_by_all_strategies() {
    let circuit = circuit_of(&[("H", 0, None), ("X", 0, Some(3))]);
    let input = [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)];
    let expected = Err(StateError::DimensionMismatch {
        expected: 2,
        actual: 4,
    });

    let mut computer = Computer::new(2).unwrap();
    computer.set_amplitudes(&input).unwrap();
    assert_eq!(computer.apply_circuit(&circuit), expected);
    assert_eq!(computer.apply_circuit_fast(&circuit), expected);
    assert_eq!(computer.apply_circuit_fast2(&circuit), expected);
    assert_eq!(computer.amplitudes(), &input);
}

#[test]
fn test_non_unitary_gate_is_not_renormalized() {
    let half = c(0.5, 0.0);
    let zero = c(0.0, 0.0);
    let shrink = Gate::single("shrink", 0.into(), [[half, zero], [zero, half]]);

    let mut circuit = Circuit::new();
    circuit.append(shrink);
    let mut computer = Computer::new(1).unwrap();
    computer.apply_circuit_fast(&circuit).unwrap();
    assert_relative_eq!(computer.norm(), 0.5, epsilon = 1e-12);
}

#[test]
fn test_basis_state_round_trip() {
    let mut computer = Computer::new(3).unwrap();
    let basis = BasisState::from_bit_string("010").unwrap();
    computer.set_basis_state(basis).unwrap();

    let circuit = circuit_of(&[("X", 1, None)]);
    computer.apply_circuit_fast2(&circuit).unwrap();
    assert_relative_eq!(computer.amplitudes()[0].re, 1.0, epsilon = 1e-12);
}

#[test]
fn test_kernels_run_on_plain_slices() {
    let mut state = vec![c(1.0, 0.0), c(0.0, 0.0)];
    indexed::apply_single(&mut state, &matrices::HADAMARD, 0, 1);
    blocked::apply_single(&mut state, &matrices::HADAMARD, 0, false);
    assert_state(&state, &[c(1.0, 0.0), c(0.0, 0.0)]);
}
