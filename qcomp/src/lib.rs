//! # qcomp
//!
//! Dense pure-state quantum circuit simulator.
//!
//! A register of n qubits is held as 2^n complex amplitudes. Gates are built
//! by name from a fixed registry, collected into a [`Circuit`] and applied to
//! a [`Computer`] with one of three equivalent strategies:
//!
//! - `apply_circuit`: dense embedded operator, the reference
//! - `apply_circuit_fast`: indexed pair updates
//! - `apply_circuit_fast2`: stride-blocked updates, parallel on large registers
//!
//! ## Crates
//!
//! - `qcomp-core`: basis states, gates, circuits, errors
//! - `qcomp-gates`: gate matrices and the name registry
//! - `qcomp-state`: the state vector and the [`Computer`] engine
//!
//! ## Example
//!
//! ```
//! use qcomp::prelude::*;
//!
//! let mut circuit = Circuit::new();
//! circuit.append(make_gate("H", 0, None).unwrap());
//! circuit.append(make_gate("X", 1, Some(0)).unwrap());
//!
//! let mut computer = Computer::new(2).unwrap();
//! computer.apply_circuit_fast(&circuit).unwrap();
//! println!("{computer}");
//! ```

pub mod qft;

pub use qcomp_core::{BasisState, Circuit, Complex64, Gate, GateMatrix, QuantumError, QubitId};
pub use qcomp_gates::{make_gate, make_gate_checked, make_param_gate, registry};
pub use qcomp_state::{Computer, ComputerConfig, StateError, StateVector, MAX_QUBITS};

/// Commonly used items
pub mod prelude {
    pub use crate::qft::{inverse_qft_circuit, qft_circuit};
    pub use qcomp_core::{BasisState, Circuit, Complex64, Gate, QubitId};
    pub use qcomp_gates::{make_gate, make_gate_checked, make_param_gate};
    pub use qcomp_state::{Computer, ComputerConfig};
}
