//! Computational basis states
//!
//! A basis state is an n-bit pattern. Bit `k` of the value is qubit `k`
//! (little-endian), so the amplitude of a basis state lives at index
//! `value` in a state vector. The canonical string form lists qubit 0
//! first: the 3-qubit state with only qubit 0 set is `"100"` and has
//! value 1.

use crate::{QuantumError, Result};
use std::fmt;

const MAX_WIDTH: usize = usize::BITS as usize;

/// One computational basis state of an n-qubit register
///
/// # Example
/// ```
/// use qcomp_core::BasisState;
///
/// let state = BasisState::from_bit_string("110").unwrap();
/// assert_eq!(state.value(), 0b011);
/// assert!(state.get_bit(1).unwrap());
/// assert_eq!(state.to_string(), "|110>");
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisState {
    value: usize,
    num_qubits: usize,
}

impl BasisState {
    /// Create a basis state from its integer value
    ///
    /// # Errors
    /// Returns `InvalidIndex` if `value` does not fit in `num_qubits` bits
    pub fn new(value: usize, num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_WIDTH || (num_qubits < MAX_WIDTH && value >> num_qubits != 0) {
            return Err(QuantumError::invalid_index(value, num_qubits));
        }
        Ok(Self { value, num_qubits })
    }

    /// The all-zero state |0...0⟩
    ///
    /// # Errors
    /// Returns `InvalidIndex` if the register is wider than a machine word
    pub fn zero(num_qubits: usize) -> Result<Self> {
        Self::new(0, num_qubits)
    }

    /// Iterate over every basis state of an n-qubit register in index order
    ///
    /// # Errors
    /// Returns `InvalidIndex` unless 2^n fits in a `usize`
    pub fn all(num_qubits: usize) -> Result<impl Iterator<Item = BasisState>> {
        if num_qubits >= MAX_WIDTH {
            return Err(QuantumError::invalid_index(num_qubits, MAX_WIDTH));
        }
        Ok((0..1usize << num_qubits).map(move |value| Self { value, num_qubits }))
    }

    /// Integer value, equal to the index of this state in an amplitude vector
    #[inline]
    pub const fn value(&self) -> usize {
        self.value
    }

    /// Register width in qubits
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Read the bit of qubit `k`
    ///
    /// # Errors
    /// Returns `InvalidIndex` if `k >= num_qubits`
    pub fn get_bit(&self, k: usize) -> Result<bool> {
        self.check_position(k)?;
        Ok((self.value >> k) & 1 == 1)
    }

    /// Return a copy with the bit of qubit `k` set to `bit`
    ///
    /// # Errors
    /// Returns `InvalidIndex` if `k >= num_qubits`
    pub fn set_bit(&self, k: usize, bit: bool) -> Result<Self> {
        self.check_position(k)?;
        let value = if bit {
            self.value | (1 << k)
        } else {
            self.value & !(1 << k)
        };
        Ok(Self { value, ..*self })
    }

    /// Return a copy with the bit of qubit `k` inverted
    pub fn flip_bit(&self, k: usize) -> Result<Self> {
        self.check_position(k)?;
        Ok(Self {
            value: self.value ^ (1 << k),
            ..*self
        })
    }

    /// Canonical string of `num_qubits` characters, qubit 0 first
    pub fn to_bit_string(&self) -> String {
        (0..self.num_qubits)
            .map(|k| if (self.value >> k) & 1 == 1 { '1' } else { '0' })
            .collect()
    }

    /// Parse the canonical string form (qubit 0 first)
    ///
    /// # Errors
    /// Returns `InvalidBitString` for characters other than '0' and '1',
    /// and `InvalidIndex` if the string is wider than a machine word.
    pub fn from_bit_string(bits: &str) -> Result<Self> {
        let num_qubits = bits.chars().count();
        if num_qubits > MAX_WIDTH {
            return Err(QuantumError::invalid_index(num_qubits, MAX_WIDTH));
        }

        let mut value = 0usize;
        for (k, c) in bits.chars().enumerate() {
            match c {
                '0' => {}
                '1' => value |= 1 << k,
                _ => {
                    return Err(QuantumError::InvalidBitString {
                        input: bits.to_string(),
                    })
                }
            }
        }

        Ok(Self { value, num_qubits })
    }

    fn check_position(&self, k: usize) -> Result<()> {
        if k >= self.num_qubits {
            return Err(QuantumError::invalid_index(k, self.num_qubits));
        }
        Ok(())
    }
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}>", self.to_bit_string())
    }
}

impl From<BasisState> for usize {
    #[inline]
    fn from(state: BasisState) -> Self {
        state.value
    }
}
