//! Dense state-vector engine for qcomp
//!
//! A [`Computer`] owns the 2^n complex amplitudes of an n-qubit register and
//! applies [`Circuit`](qcomp_core::Circuit)s to them in place. Three
//! strategies are available as separate methods and give the same result up
//! to floating-point rounding:
//!
//! | Method                 | Traversal                                    | Cost per gate |
//! |------------------------|----------------------------------------------|---------------|
//! | `apply_circuit`        | dense embedded operator ([`EmbeddedOperator`]) | O(4^n)      |
//! | `apply_circuit_fast`   | compressed index + bit insertion             | O(2^n)        |
//! | `apply_circuit_fast2`  | stride blocks, optionally on rayon           | O(2^n)        |
//!
//! The dense strategy is the reference the other two are tested against.
//!
//! # Example
//!
//! ```
//! use qcomp_core::Circuit;
//! use qcomp_gates::make_gate;
//! use qcomp_state::{Computer, ComputerConfig};
//!
//! let mut circuit = Circuit::new();
//! circuit.append(make_gate("X", 0, None).unwrap());
//!
//! let mut computer = Computer::with_config(1, ComputerConfig::sequential()).unwrap();
//! computer.apply_circuit_fast2(&circuit).unwrap();
//! assert_eq!(computer.amplitudes()[1].re, 1.0);
//! ```

pub mod computer;
pub mod config;
pub mod error;
pub mod kernels;
pub mod operator;
pub mod state_vector;

pub use computer::Computer;
pub use config::ComputerConfig;
pub use error::{Result, StateError};
pub use operator::EmbeddedOperator;
pub use state_vector::{StateVector, MAX_QUBITS};
