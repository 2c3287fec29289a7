//! Integration tests for gates, circuits and basis states

use num_complex::Complex64;
use qcomp_core::{BasisState, Circuit, Gate, QuantumError, QubitId};

fn zero() -> Complex64 {
    Complex64::new(0.0, 0.0)
}

fn one() -> Complex64 {
    Complex64::new(1.0, 0.0)
}

fn x(target: usize) -> Gate {
    Gate::single("X", QubitId::new(target), [[zero(), one()], [one(), zero()]])
}

fn s(target: usize) -> Gate {
    Gate::single(
        "S",
        QubitId::new(target),
        [[one(), zero()], [zero(), Complex64::new(0.0, 1.0)]],
    )
}

fn cx(target: usize, control: usize) -> Gate {
    Gate::controlled(
        "cX",
        QubitId::new(target),
        QubitId::new(control),
        [[zero(), one()], [one(), zero()]],
    )
    .unwrap()
}

#[test]
fn test_build_circuit() {
    let mut circuit = Circuit::new();
    circuit.append(x(0));
    circuit.append(cx(2, 0));
    circuit.append(s(1));

    assert_eq!(circuit.len(), 3);
    assert_eq!(circuit.num_qubits(), 3);
    assert_eq!(circuit.to_string(), "[X(q0) cX(q2, q0) S(q1)]");
    assert!(circuit.validate(3).is_ok());
    assert_eq!(
        circuit.validate(2),
        Err(QuantumError::InvalidIndex {
            index: 2,
            num_qubits: 2
        })
    );
}

#[test]
fn test_collect_and_extend() {
    let first: Circuit = (0..3).map(x).collect();
    let mut second = Circuit::with_capacity(2);
    second.extend([s(0), s(1)]);

    let mut combined = first.clone();
    combined.extend_from(&second);
    assert_eq!(combined.len(), 5);
    assert_eq!(combined.get(3), Some(&s(0)));
    assert_eq!(&combined.gates()[..3], first.gates());

    let names: Vec<&str> = combined.iter().map(Gate::name).collect();
    assert_eq!(names, ["X", "X", "X", "S", "S"]);
}

#[test]
fn test_adjoint_circuit_reverses_and_conjugates() {
    let mut circuit = Circuit::new();
    circuit.append(s(0));
    circuit.append(cx(1, 0));

    let adjoint = circuit.adjoint();
    let names: Vec<&str> = adjoint.iter().map(Gate::name).collect();
    assert_eq!(names, ["cX†", "S†"]);
    assert_eq!(adjoint.adjoint(), circuit);

    let reversed = circuit.reversed();
    assert_eq!(reversed.get(0), Some(&cx(1, 0)));
}

#[test]
fn test_basis_states_of_register() {
    let states: Vec<String> = BasisState::all(2).unwrap().map(|b| b.to_string()).collect();
    assert_eq!(states, ["|00>", "|10>", "|01>", "|11>"]);

    let state = BasisState::from_bit_string("0011").unwrap();
    assert_eq!(state.value(), 0b1100);
    assert_eq!(usize::from(state), 12);
    assert_eq!(state.flip_bit(0).unwrap().to_bit_string(), "1011");
    assert!(matches!(
        BasisState::from_bit_string("01x"),
        Err(QuantumError::InvalidBitString { .. })
    ));
}

#[test]
fn test_gate_qubits_fit_register() {
    let gate = cx(0, 4);
    assert_eq!(gate.max_qubit(), 4);
    assert!(gate.check_width(5).is_ok());
    assert!(gate.check_width(4).is_err());
}
