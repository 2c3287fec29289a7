//! Core types for the qcomp state-vector simulator
//!
//! This crate provides the value types a simulation is built from:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`BasisState`]: One computational basis state (bit `k` = qubit `k`)
//! - [`Gate`]: Immutable named unitary with its dense matrix
//! - [`Circuit`]: Ordered, append-only sequence of gates
//!
//! Gates are normally obtained from the registry in `qcomp-gates`, and
//! circuits are applied by the `Computer` of `qcomp-state`.
//!
//! # Example
//! ```
//! use qcomp_core::{BasisState, Circuit};
//!
//! let circuit = Circuit::new();
//! assert!(circuit.is_empty());
//!
//! let basis = BasisState::new(0b10, 2).unwrap();
//! assert_eq!(basis.to_string(), "|01>");
//! ```

pub mod basis;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

// Re-exports for convenience
pub use basis::BasisState;
pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{controlled_matrix, Gate, GateMatrix, Matrix2, Matrix4};
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Type alias for results in qcomp-core
pub type Result<T> = std::result::Result<T, QuantumError>;
