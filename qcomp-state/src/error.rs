//! Error types for state vector operations

use qcomp_core::QuantumError;
use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Circuit, gate or amplitude data built for a different register size
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Register too large to allocate
    #[error("Invalid register size: {num_qubits} qubits exceeds the limit of {max} qubits")]
    InvalidDimension { num_qubits: usize, max: usize },

    /// Computer configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Memory allocation error
    #[error("Failed to allocate {size} bytes for state vector")]
    AllocationError { size: usize },

    /// Error from building basis states or gates
    #[error(transparent)]
    Quantum(#[from] QuantumError),
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
