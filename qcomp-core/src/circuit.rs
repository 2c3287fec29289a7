//! Quantum circuit representation

use crate::{Gate, Result};
use std::fmt;

/// An ordered sequence of gates
///
/// Gates run in insertion order; the circuit never simplifies, cancels or
/// reorders them. A circuit does not fix a register width: it can be applied
/// to any register with at least [`Circuit::num_qubits`] qubits.
///
/// # Example
/// ```
/// use qcomp_core::{Circuit, Gate, QubitId};
/// use num_complex::Complex64;
///
/// let zero = Complex64::new(0.0, 0.0);
/// let one = Complex64::new(1.0, 0.0);
///
/// let mut circuit = Circuit::new();
/// circuit.append(Gate::single("X", QubitId::new(2), [[zero, one], [one, zero]]));
/// assert_eq!(circuit.len(), 1);
/// assert_eq!(circuit.num_qubits(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty circuit with room for `capacity` gates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            gates: Vec::with_capacity(capacity),
        }
    }

    /// Add a gate at the end of the circuit
    #[inline]
    pub fn append(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Append every gate of `other`, in order
    pub fn extend_from(&mut self, other: &Circuit) {
        self.gates.extend_from_slice(&other.gates);
    }

    /// Number of gates
    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Gates in execution order
    #[inline]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Iterate over gates in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// Gate at position `index`
    pub fn get(&self, index: usize) -> Option<&Gate> {
        self.gates.get(index)
    }

    /// Smallest register width able to hold every gate (0 when empty)
    pub fn num_qubits(&self) -> usize {
        self.gates
            .iter()
            .map(|g| g.max_qubit().saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Check every gate against a register of `num_qubits` qubits
    ///
    /// # Errors
    /// Returns `InvalidIndex` for the first gate using a qubit outside the register
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        self.gates
            .iter()
            .try_for_each(|gate| gate.check_width(num_qubits))
    }

    /// Copy of the circuit with the gate order reversed
    pub fn reversed(&self) -> Self {
        Self {
            gates: self.gates.iter().rev().cloned().collect(),
        }
    }

    /// The inverse circuit: reversed order, each gate replaced by its adjoint
    pub fn adjoint(&self) -> Self {
        Self {
            gates: self.gates.iter().rev().map(Gate::adjoint).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

impl IntoIterator for Circuit {
    type Item = Gate;
    type IntoIter = std::vec::IntoIter<Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Gate> for Circuit {
    fn extend<I: IntoIterator<Item = Gate>>(&mut self, iter: I) {
        self.gates.extend(iter);
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gate) in self.gates.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", gate)?;
        }
        write!(f, "]")
    }
}
