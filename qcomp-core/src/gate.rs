//! Quantum gate definitions
//!
//! A [`Gate`] is an immutable value: a name, the qubit(s) it acts on and its
//! dense matrix. Two-qubit matrices are written in the local basis
//! `2 * bit(control) + bit(target)`, so for a controlled gate the upper-left
//! 2×2 block is the identity and the lower-right block is the controlled
//! unitary.

use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;

/// 2×2 complex matrix, row-major
pub type Matrix2 = [[Complex64; 2]; 2];

/// 4×4 complex matrix, row-major
pub type Matrix4 = [[Complex64; 4]; 4];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

const ADJOINT_SUFFIX: char = '†';

/// Dense matrix of a gate
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateMatrix {
    /// Single-qubit gate
    Single(Matrix2),
    /// Two-qubit gate over the local basis `2 * bit(control) + bit(target)`
    Two(Matrix4),
}

impl GateMatrix {
    /// Number of qubits the matrix acts on
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Two(_) => 2,
        }
    }

    /// Matrix dimension (2 or 4)
    #[inline]
    pub const fn dimension(&self) -> usize {
        1 << self.num_qubits()
    }

    /// Element at (`row`, `col`)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        match self {
            Self::Single(m) => m[row][col],
            Self::Two(m) => m[row][col],
        }
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        match self {
            Self::Single(m) => Self::Single(adjoint_of(m)),
            Self::Two(m) => Self::Two(adjoint_of(m)),
        }
    }

    /// Row-major flattened copy of the matrix
    pub fn to_vec(&self) -> Vec<Complex64> {
        match self {
            Self::Single(m) => m.iter().flatten().copied().collect(),
            Self::Two(m) => m.iter().flatten().copied().collect(),
        }
    }
}

fn adjoint_of<const N: usize>(m: &[[Complex64; N]; N]) -> [[Complex64; N]; N] {
    let mut out = [[ZERO; N]; N];
    for (r, row) in m.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            out[c][r] = value.conj();
        }
    }
    out
}

/// Embed a 2×2 unitary as the controlled block of a 4×4 matrix
pub fn controlled_matrix(u: &Matrix2) -> Matrix4 {
    [
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, u[0][0], u[0][1]],
        [ZERO, ZERO, u[1][0], u[1][1]],
    ]
}

/// An immutable quantum gate bound to its qubits
///
/// Gates are usually created through the gate registry (`qcomp_gates::make_gate`),
/// but can be built directly from a matrix.
///
/// # Example
/// ```
/// use qcomp_core::{Gate, QubitId};
/// use num_complex::Complex64;
///
/// let zero = Complex64::new(0.0, 0.0);
/// let one = Complex64::new(1.0, 0.0);
/// let x = Gate::single("X", QubitId::new(0), [[zero, one], [one, zero]]);
/// assert_eq!(x.num_qubits(), 1);
/// assert_eq!(x.to_string(), "X(q0)");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GateRepr")
)]
pub struct Gate {
    name: String,
    target: QubitId,
    control: Option<QubitId>,
    matrix: GateMatrix,
    controlled: bool,
}

impl Gate {
    /// Create a single-qubit gate
    pub fn single(name: impl Into<String>, target: QubitId, matrix: Matrix2) -> Self {
        Self {
            name: name.into(),
            target,
            control: None,
            matrix: GateMatrix::Single(matrix),
            controlled: false,
        }
    }

    /// Create a controlled gate applying `u` to `target` when `control` is |1⟩
    ///
    /// # Errors
    /// Returns `DuplicateQubit` if control and target coincide
    pub fn controlled(
        name: impl Into<String>,
        target: QubitId,
        control: QubitId,
        u: Matrix2,
    ) -> Result<Self> {
        check_distinct(target, control)?;
        Ok(Self {
            name: name.into(),
            target,
            control: Some(control),
            matrix: GateMatrix::Two(controlled_matrix(&u)),
            controlled: true,
        })
    }

    /// Create a general two-qubit gate
    ///
    /// `matrix` is indexed by `2 * bit(control) + bit(target)`; `control`
    /// only names the second qubit and carries no conditional meaning.
    ///
    /// # Errors
    /// Returns `DuplicateQubit` if the two qubits coincide
    pub fn two_qubit(
        name: impl Into<String>,
        target: QubitId,
        control: QubitId,
        matrix: Matrix4,
    ) -> Result<Self> {
        check_distinct(target, control)?;
        Ok(Self {
            name: name.into(),
            target,
            control: Some(control),
            matrix: GateMatrix::Two(matrix),
            controlled: false,
        })
    }

    /// Gate name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target qubit
    #[inline]
    pub fn target(&self) -> QubitId {
        self.target
    }

    /// Control (or second) qubit of a two-qubit gate
    #[inline]
    pub fn control(&self) -> Option<QubitId> {
        self.control
    }

    /// Gate matrix
    #[inline]
    pub fn matrix(&self) -> &GateMatrix {
        &self.matrix
    }

    /// Number of qubits the gate acts on
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.matrix.num_qubits()
    }

    /// Qubits the gate acts on, target first
    pub fn qubits(&self) -> SmallVec<[QubitId; 2]> {
        let mut qubits = SmallVec::new();
        qubits.push(self.target);
        if let Some(control) = self.control {
            qubits.push(control);
        }
        qubits
    }

    /// Highest qubit index used by the gate
    #[inline]
    pub fn max_qubit(&self) -> usize {
        self.control
            .map_or(self.target.index(), |c| c.index().max(self.target.index()))
    }

    /// Check that every qubit of the gate fits in a `num_qubits` register
    ///
    /// # Errors
    /// Returns `InvalidIndex` naming the first offending qubit
    pub fn check_width(&self, num_qubits: usize) -> Result<()> {
        for qubit in self.qubits() {
            if qubit.index() >= num_qubits {
                return Err(QuantumError::invalid_index(qubit.index(), num_qubits));
            }
        }
        Ok(())
    }

    /// Whether the matrix is `diag(I, U)`, i.e. acts only when the control is set
    #[inline]
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// The 2×2 block applied when the control qubit is |1⟩
    pub fn controlled_block(&self) -> Option<Matrix2> {
        match (&self.matrix, self.controlled) {
            (GateMatrix::Two(m), true) => Some([[m[2][2], m[2][3]], [m[3][2], m[3][3]]]),
            _ => None,
        }
    }

    /// Index of `basis_index` in the gate's local basis
    #[inline]
    pub fn local_index(&self, basis_index: usize) -> usize {
        let t = self.target.bit_of(basis_index);
        match self.control {
            Some(c) => (c.bit_of(basis_index) << 1) | t,
            None => t,
        }
    }

    /// Mask of all basis-index bits the gate acts on
    #[inline]
    pub fn support_mask(&self) -> usize {
        self.control
            .map_or(self.target.mask(), |c| c.mask() | self.target.mask())
    }

    /// The inverse gate: conjugate-transposed matrix on the same qubits
    pub fn adjoint(&self) -> Self {
        let name = match self.name.strip_suffix(ADJOINT_SUFFIX) {
            Some(base) => base.to_string(),
            None => format!("{}{}", self.name, ADJOINT_SUFFIX),
        };
        Self {
            name,
            target: self.target,
            control: self.control,
            matrix: self.matrix.adjoint(),
            controlled: self.controlled,
        }
    }
}

fn check_distinct(target: QubitId, control: QubitId) -> Result<()> {
    if target == control {
        return Err(QuantumError::DuplicateQubit(target));
    }
    Ok(())
}

/// Unchecked field layout of a serialized [`Gate`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GateRepr {
    name: String,
    target: QubitId,
    control: Option<QubitId>,
    matrix: GateMatrix,
    controlled: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<GateRepr> for Gate {
    type Error = QuantumError;

    /// Accept only field combinations the constructors can produce
    fn try_from(repr: GateRepr) -> Result<Self> {
        let GateRepr {
            name,
            target,
            control,
            matrix,
            controlled,
        } = repr;

        match (&matrix, control) {
            (GateMatrix::Single(_), Some(_)) => {
                return Err(QuantumError::InconsistentGate {
                    gate: name,
                    reason: "single-qubit matrix with a control qubit",
                })
            }
            (GateMatrix::Single(_), None) if controlled => {
                return Err(QuantumError::InconsistentGate {
                    gate: name,
                    reason: "single-qubit matrix marked as controlled",
                })
            }
            (GateMatrix::Single(_), None) => {}
            (GateMatrix::Two(_), None) => {
                return Err(QuantumError::MissingControl { gate: name })
            }
            (GateMatrix::Two(m), Some(c)) => {
                check_distinct(target, c)?;
                let block = [[m[2][2], m[2][3]], [m[3][2], m[3][3]]];
                if controlled && *m != controlled_matrix(&block) {
                    return Err(QuantumError::InconsistentGate {
                        gate: name,
                        reason: "controlled matrix is not diag(I, U)",
                    });
                }
            }
        }

        Ok(Self {
            name,
            target,
            control,
            matrix,
            controlled,
        })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.control {
            Some(control) => write!(f, "{}({}, {})", self.name, self.target, control),
            None => write!(f, "{}({})", self.name, self.target),
        }
    }
}
