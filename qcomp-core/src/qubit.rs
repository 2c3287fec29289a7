//! Qubit addressing

use std::fmt;

/// Type-safe identifier for a qubit
///
/// Qubit `k` is bit `k` of a basis-state index, counted from the least
/// significant end.
///
/// # Example
/// ```
/// use qcomp_core::QubitId;
///
/// let q2 = QubitId::new(2);
/// assert_eq!(q2.mask(), 0b100);
/// assert!(QubitId::new(0) < q2);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Bit mask selecting this qubit in a basis-state index
    #[inline]
    pub const fn mask(&self) -> usize {
        1 << self.0
    }

    /// Value (0 or 1) of this qubit in the given basis-state index
    #[inline]
    pub const fn bit_of(&self, index: usize) -> usize {
        (index >> self.0) & 1
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_ordering() {
        assert!(QubitId::new(0) < QubitId::new(1));
        assert_eq!(QubitId::new(3), QubitId::from(3));
    }

    #[test]
    fn test_qubit_mask() {
        assert_eq!(QubitId::new(0).mask(), 1);
        assert_eq!(QubitId::new(4).mask(), 16);
    }

    #[test]
    fn test_bit_of() {
        let q1 = QubitId::new(1);
        assert_eq!(q1.bit_of(0b010), 1);
        assert_eq!(q1.bit_of(0b101), 0);
    }

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId::new(5)), "q5");
    }

    #[test]
    fn test_usize_round_trip() {
        let i: usize = QubitId::new(7).into();
        assert_eq!(i, 7);
    }
}
