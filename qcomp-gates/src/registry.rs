//! Gate-name registry and the gate factory
//!
//! The registry is a process-wide, read-only table built once on first use.
//! It maps a gate name to its matrix (or matrix function, for parameterized
//! gates) and its arity. Names are case-sensitive.
//!
//! | Name                  | Qubits | Parameter | Matrix                     |
//! |-----------------------|--------|-----------|----------------------------|
//! | `I` `X` `Y` `Z` `H`   | 1      | no        | identity, Paulis, Hadamard |
//! | `S` `T` `V`           | 1      | no        | √Z, √S, √X                 |
//! | `Rx` `Ry` `Rz` `R`    | 1      | yes       | rotations, phase           |
//! | `cX`/`CNOT` `cY` `cZ` `cV` | 2 | no        | controlled variants        |
//! | `cR` `cRz`            | 2      | yes       | controlled phase, Rz       |
//! | `SWAP`                | 2      | no        | swap                       |
//!
//! Any single-qubit name given a control qubit yields its controlled variant,
//! so `make_gate("X", 1, Some(0))` is a CNOT with control 0 and target 1.
//! A control equal to the target is rejected with `DuplicateQubit`; pass
//! `None` for the plain single-qubit gate.
//!
//! # Example
//!
//! ```
//! use qcomp_gates::{make_gate, make_param_gate};
//! use std::f64::consts::PI;
//!
//! let h = make_gate("H", 0, None).unwrap();
//! let cnot = make_gate("cX", 1, Some(0)).unwrap();
//! let rz = make_param_gate("Rz", 2, None, PI / 2.0).unwrap();
//!
//! assert!(cnot.is_controlled());
//! assert!(make_gate("FOO", 0, None).is_err());
//! assert!(make_gate("H", 1, Some(1)).is_err());
//! # let _ = (h, rz);
//! ```

use crate::matrices;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use qcomp_core::{Gate, Matrix2, Matrix4, QuantumError, QubitId, Result};

/// How a registry entry produces its matrix
#[derive(Clone, Copy, Debug)]
pub enum GateKind {
    /// Fixed single-qubit matrix; controllable
    Fixed(Matrix2),
    /// Single-qubit matrix computed from a parameter; controllable
    Parameterized(fn(f64) -> Matrix2),
    /// Always-controlled gate with a fixed target block
    Controlled(Matrix2),
    /// Always-controlled gate with a parameterized target block
    ControlledParameterized(fn(f64) -> Matrix2),
    /// Two-qubit gate without control structure
    TwoQubit(Matrix4),
}

impl GateKind {
    /// Whether the gate needs a parameter
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized(_) | Self::ControlledParameterized(_))
    }

    /// Whether the gate always acts on two qubits
    pub fn requires_control(&self) -> bool {
        matches!(
            self,
            Self::Controlled(_) | Self::ControlledParameterized(_) | Self::TwoQubit(_)
        )
    }
}

/// One registry entry
#[derive(Clone, Copy, Debug)]
pub struct GateDefinition {
    /// Registered name
    pub name: &'static str,
    /// Matrix source and arity
    pub kind: GateKind,
}

impl GateDefinition {
    /// Build a gate from this definition
    ///
    /// # Errors
    /// `MissingControl` for two-qubit gates without a second qubit,
    /// `MissingParameter` for parameterized gates without a parameter and
    /// `DuplicateQubit` if control equals target. A parameter given to a
    /// fixed gate is ignored.
    pub fn instantiate(
        &self,
        target: QubitId,
        control: Option<QubitId>,
        parameter: Option<f64>,
    ) -> Result<Gate> {
        let name = self.name;
        let block = |f: fn(f64) -> Matrix2| {
            parameter
                .map(f)
                .ok_or_else(|| QuantumError::MissingParameter {
                    gate: name.to_string(),
                })
        };
        let second = || {
            control.ok_or_else(|| QuantumError::MissingControl {
                gate: name.to_string(),
            })
        };

        match self.kind {
            GateKind::Fixed(u) => single_or_controlled(name, target, control, u),
            GateKind::Parameterized(f) => single_or_controlled(name, target, control, block(f)?),
            GateKind::Controlled(u) => Gate::controlled(name, target, second()?, u),
            GateKind::ControlledParameterized(f) => {
                Gate::controlled(name, target, second()?, block(f)?)
            }
            GateKind::TwoQubit(m) => Gate::two_qubit(name, target, second()?, m),
        }
    }
}

fn single_or_controlled(
    name: &str,
    target: QubitId,
    control: Option<QubitId>,
    u: Matrix2,
) -> Result<Gate> {
    match control {
        Some(control) => Gate::controlled(name, target, control, u),
        None => Ok(Gate::single(name, target, u)),
    }
}

/// Read-only table of supported gates
#[derive(Debug)]
pub struct GateRegistry {
    gates: AHashMap<&'static str, GateDefinition>,
}

impl GateRegistry {
    fn standard() -> Self {
        let entries = [
            ("I", GateKind::Fixed(matrices::IDENTITY)),
            ("X", GateKind::Fixed(matrices::PAULI_X)),
            ("Y", GateKind::Fixed(matrices::PAULI_Y)),
            ("Z", GateKind::Fixed(matrices::PAULI_Z)),
            ("H", GateKind::Fixed(matrices::HADAMARD)),
            ("S", GateKind::Fixed(matrices::S_GATE)),
            ("T", GateKind::Fixed(matrices::T_GATE)),
            ("V", GateKind::Fixed(matrices::V_GATE)),
            ("Rx", GateKind::Parameterized(matrices::rotation_x)),
            ("Ry", GateKind::Parameterized(matrices::rotation_y)),
            ("Rz", GateKind::Parameterized(matrices::rotation_z)),
            ("R", GateKind::Parameterized(matrices::phase)),
            ("cX", GateKind::Controlled(matrices::PAULI_X)),
            ("CNOT", GateKind::Controlled(matrices::PAULI_X)),
            ("cY", GateKind::Controlled(matrices::PAULI_Y)),
            ("cZ", GateKind::Controlled(matrices::PAULI_Z)),
            ("cV", GateKind::Controlled(matrices::V_GATE)),
            ("cR", GateKind::ControlledParameterized(matrices::phase)),
            ("cRz", GateKind::ControlledParameterized(matrices::rotation_z)),
            ("SWAP", GateKind::TwoQubit(matrices::SWAP)),
        ];

        let gates = entries
            .into_iter()
            .map(|(name, kind)| (name, GateDefinition { name, kind }))
            .collect();

        Self { gates }
    }

    /// Look up a gate definition
    pub fn get(&self, name: &str) -> Option<&GateDefinition> {
        self.gates.get(name)
    }

    /// Check if a gate name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.gates.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered gates
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Resolve a name and build the gate
    ///
    /// # Errors
    /// `UnknownGate` if the name is not registered, otherwise the errors of
    /// [`GateDefinition::instantiate`]
    pub fn build(
        &self,
        name: &str,
        target: QubitId,
        control: Option<QubitId>,
        parameter: Option<f64>,
    ) -> Result<Gate> {
        self.get(name)
            .ok_or_else(|| QuantumError::unknown_gate(name))?
            .instantiate(target, control, parameter)
    }
}

static REGISTRY: Lazy<GateRegistry> = Lazy::new(GateRegistry::standard);

/// The process-wide gate registry
pub fn registry() -> &'static GateRegistry {
    &REGISTRY
}

/// Build a fixed (non-parameterized) gate by name
///
/// Qubit indices are checked later, against the register the gate is applied to.
pub fn make_gate(name: &str, target: usize, control: Option<usize>) -> Result<Gate> {
    registry().build(name, target.into(), control.map(QubitId::new), None)
}

/// Build a parameterized gate by name
pub fn make_param_gate(
    name: &str,
    target: usize,
    control: Option<usize>,
    parameter: f64,
) -> Result<Gate> {
    registry().build(name, target.into(), control.map(QubitId::new), Some(parameter))
}

/// Build a gate when the register width is already known
///
/// # Errors
/// In addition to the factory errors, `InvalidIndex` if target or control
/// is not below `num_qubits`
pub fn make_gate_checked(
    name: &str,
    target: usize,
    control: Option<usize>,
    parameter: Option<f64>,
    num_qubits: usize,
) -> Result<Gate> {
    let gate = registry().build(name, target.into(), control.map(QubitId::new), parameter)?;
    gate.check_width(num_qubits)?;
    Ok(gate)
}
