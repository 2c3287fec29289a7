//! Error types for qcomp core types

use crate::QubitId;
use thiserror::Error;

/// Errors raised while building basis states, gates and circuits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// Gate name is not present in the gate registry
    #[error("Unknown gate '{name}'")]
    UnknownGate { name: String },

    /// Qubit or basis index outside the register
    #[error("Index {index} is out of range for a {num_qubits}-qubit register")]
    InvalidIndex { index: usize, num_qubits: usize },

    /// Same qubit used as target and control
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Two-qubit gate built without its second qubit
    #[error("Gate '{gate}' acts on two qubits, but no control qubit was given")]
    MissingControl { gate: String },

    /// Gate fields that no constructor produces, e.g. from deserialized input
    #[error("Gate '{gate}' is inconsistent: {reason}")]
    InconsistentGate { gate: String, reason: &'static str },

    /// Parameterized gate built without its parameter
    #[error("Gate '{gate}' requires a parameter")]
    MissingParameter { gate: String },

    /// Basis-state string with characters other than '0' and '1'
    #[error("Invalid bit string '{input}': expected only '0' and '1'")]
    InvalidBitString { input: String },
}

impl QuantumError {
    /// Create an invalid index error
    pub fn invalid_index(index: usize, num_qubits: usize) -> Self {
        Self::InvalidIndex { index, num_qubits }
    }

    /// Create an unknown gate error
    pub fn unknown_gate(name: impl Into<String>) -> Self {
        Self::UnknownGate { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_error() {
        let err = QuantumError::invalid_index(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains('5'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_unknown_gate_error() {
        let err = QuantumError::unknown_gate("FOO");
        assert_eq!(
            err,
            QuantumError::UnknownGate {
                name: "FOO".to_string()
            }
        );
        assert!(format!("{}", err).contains("FOO"));
    }

    #[test]
    fn test_duplicate_qubit_error() {
        let err = QuantumError::DuplicateQubit(QubitId::new(2));
        assert!(format!("{}", err).contains("q2"));
    }
}
