//! Standard gate matrices
//!
//! Fixed gates are compile-time constants; parameterized gates are plain
//! functions of their angle. Two-qubit matrices use the local basis
//! `2 * bit(control) + bit(target)`.

use num_complex::Complex64;
use qcomp_core::{Matrix2, Matrix4};

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

// Single-qubit gate matrices (2x2)

/// Identity gate matrix
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
];

/// Pauli-X gate matrix (NOT gate)
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate matrix
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// S gate matrix (√Z)
pub const S_GATE: Matrix2 = [[ONE, ZERO], [ZERO, I]];

/// T gate matrix (√S)
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: Matrix2 = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)]];

/// V gate matrix (√X)
/// V = 1/2 * [[1+i, 1-i],
///            [1-i, 1+i]]
pub const V_GATE: Matrix2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
];

// Two-qubit gate matrices (4x4)

/// SWAP gate matrix
pub const SWAP: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

// Parameterized gates

/// Rotation about the X axis
/// Rx(θ) = [[cos(θ/2), -i sin(θ/2)],
///          [-i sin(θ/2), cos(θ/2)]]
pub fn rotation_x(theta: f64) -> Matrix2 {
    let (sin_val, cos_val) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos_val, 0.0), Complex64::new(0.0, -sin_val)],
        [Complex64::new(0.0, -sin_val), Complex64::new(cos_val, 0.0)],
    ]
}

/// Rotation about the Y axis
/// Ry(θ) = [[cos(θ/2), -sin(θ/2)],
///          [sin(θ/2),  cos(θ/2)]]
pub fn rotation_y(theta: f64) -> Matrix2 {
    let (sin_val, cos_val) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos_val, 0.0), Complex64::new(-sin_val, 0.0)],
        [Complex64::new(sin_val, 0.0), Complex64::new(cos_val, 0.0)],
    ]
}

/// Rotation about the Z axis
/// Rz(θ) = [[e^(-iθ/2), 0],
///          [0, e^(iθ/2)]]
pub fn rotation_z(theta: f64) -> Matrix2 {
    let half = theta / 2.0;
    [
        [Complex64::from_polar(1.0, -half), ZERO],
        [ZERO, Complex64::from_polar(1.0, half)],
    ]
}

/// Phase gate
/// R(θ) = [[1, 0],
///         [0, e^(iθ)]]
pub fn phase(theta: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, theta)]]
}
