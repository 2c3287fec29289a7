//! Gate library for qcomp
//!
//! This crate provides the standard gate matrices and the gate-name
//! registry used to build [`Gate`](qcomp_core::Gate) values:
//!
//! - **Matrices**: compile-time constants for fixed gates (H, X, Y, Z, S, T,
//!   V, SWAP) and functions for parameterized ones (Rx, Ry, Rz, phase)
//! - **Registry**: a process-wide read-only name table, initialized once,
//!   with the [`make_gate`] factory
//! - **Matrix helpers**: Kronecker product and unitarity checks used by the
//!   dense reference strategy and by tests
//!
//! # Example
//!
//! ```
//! use qcomp_core::Circuit;
//! use qcomp_gates::make_gate;
//!
//! let mut bell = Circuit::new();
//! bell.append(make_gate("H", 0, None).unwrap());
//! bell.append(make_gate("X", 1, Some(0)).unwrap());
//! assert_eq!(bell.num_qubits(), 2);
//! ```

pub mod matrices;
pub mod matrix_ops;
pub mod registry;

// Re-export commonly used items
pub use registry::{
    make_gate, make_gate_checked, make_param_gate, registry, GateDefinition, GateKind,
    GateRegistry,
};
