//! The state-vector engine

use crate::config::ComputerConfig;
use crate::error::{Result, StateError};
use crate::kernels::{blocked, indexed};
use crate::operator::EmbeddedOperator;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use qcomp_core::{BasisState, Circuit, Gate};
use std::fmt;
use tracing::{debug, trace};

/// Gate application strategy, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Dense,
    Indexed,
    Blocked,
}

/// An n-qubit register in a pure state
///
/// The amplitudes are stored as one flat vector of 2^n complex numbers,
/// indexed by basis-state value (bit `k` is qubit `k`). Circuits are applied
/// in place with one of three strategies that produce the same result:
///
/// - [`apply_circuit`](Self::apply_circuit): embeds each gate into the full
///   2^n × 2^n operator and multiplies, O(4^n) per gate
/// - [`apply_circuit_fast`](Self::apply_circuit_fast): updates only the
///   affected amplitude pairs, addressed by bit insertion
/// - [`apply_circuit_fast2`](Self::apply_circuit_fast2): stride-blocked
///   traversal, parallel over blocks for large registers
///
/// A circuit is checked against the register width before any amplitude
/// changes. No normalization is applied: a non-unitary gate leaves a state
/// whose norm differs from one.
///
/// # Example
///
/// ```
/// use qcomp_core::Circuit;
/// use qcomp_gates::make_gate;
/// use qcomp_state::Computer;
///
/// let mut bell = Circuit::new();
/// bell.append(make_gate("H", 0, None).unwrap());
/// bell.append(make_gate("X", 1, Some(0)).unwrap());
///
/// let mut computer = Computer::new(2).unwrap();
/// computer.apply_circuit_fast(&bell).unwrap();
///
/// let amplitudes = computer.amplitudes();
/// assert!((amplitudes[0].re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// assert!((amplitudes[3].re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Computer {
    state: StateVector,
    config: ComputerConfig,
}

impl Computer {
    /// Create a `num_qubits`-qubit register in |0...0⟩ with default settings
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, ComputerConfig::default())
    }

    /// Create a register with a custom configuration
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation, and the
    /// allocation errors of [`StateVector::new`]
    pub fn with_config(num_qubits: usize, config: ComputerConfig) -> Result<Self> {
        config.validate().map_err(StateError::InvalidConfig)?;
        let state = StateVector::new(num_qubits)?;
        debug!(num_qubits, ?config, "created computer");
        Ok(Self { state, config })
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Number of amplitudes (2^n)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.state.dimension()
    }

    /// Configuration in use
    pub fn config(&self) -> &ComputerConfig {
        &self.config
    }

    /// Underlying state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Apply a circuit with the dense reference strategy
    ///
    /// # Errors
    /// `DimensionMismatch` if any gate uses a qubit outside the register;
    /// the state is left unchanged
    pub fn apply_circuit(&mut self, circuit: &Circuit) -> Result<()> {
        self.run(circuit, Strategy::Dense)
    }

    /// Apply a circuit with the indexed strategy
    ///
    /// # Errors
    /// As [`apply_circuit`](Self::apply_circuit)
    pub fn apply_circuit_fast(&mut self, circuit: &Circuit) -> Result<()> {
        self.run(circuit, Strategy::Indexed)
    }

    /// Apply a circuit with the blocked strategy
    ///
    /// # Errors
    /// As [`apply_circuit`](Self::apply_circuit)
    pub fn apply_circuit_fast2(&mut self, circuit: &Circuit) -> Result<()> {
        self.run(circuit, Strategy::Blocked)
    }

    /// Apply one gate with the dense reference strategy
    pub fn apply_gate(&mut self, gate: &Gate) -> Result<()> {
        self.check_gate(gate)?;
        self.apply_dense(gate)
    }

    /// Apply one gate with the indexed strategy
    pub fn apply_gate_fast(&mut self, gate: &Gate) -> Result<()> {
        self.check_gate(gate)?;
        let n = self.num_qubits();
        indexed::apply_gate(self.state.amplitudes_mut(), gate, n);
        Ok(())
    }

    /// Apply one gate with the blocked strategy
    pub fn apply_gate_fast2(&mut self, gate: &Gate) -> Result<()> {
        self.check_gate(gate)?;
        let parallel = self.config.runs_parallel(self.num_qubits());
        blocked::apply_gate(self.state.amplitudes_mut(), gate, parallel);
        Ok(())
    }

    fn run(&mut self, circuit: &Circuit, strategy: Strategy) -> Result<()> {
        for gate in circuit {
            self.check_gate(gate)?;
        }

        let n = self.num_qubits();
        let parallel = strategy == Strategy::Blocked && self.config.runs_parallel(n);
        debug!(
            ?strategy,
            gates = circuit.len(),
            num_qubits = n,
            parallel,
            "applying circuit"
        );

        for gate in circuit {
            trace!(%gate, "apply");
            match strategy {
                Strategy::Dense => self.apply_dense(gate)?,
                Strategy::Indexed => indexed::apply_gate(self.state.amplitudes_mut(), gate, n),
                Strategy::Blocked => {
                    blocked::apply_gate(self.state.amplitudes_mut(), gate, parallel)
                }
            }
        }

        Ok(())
    }

    fn apply_dense(&mut self, gate: &Gate) -> Result<()> {
        let next = EmbeddedOperator::new(gate, self.num_qubits())?.apply(self.state.amplitudes());
        self.state.copy_from(&next)
    }

    fn check_gate(&self, gate: &Gate) -> Result<()> {
        let n = self.num_qubits();
        if gate.max_qubit() >= n {
            return Err(StateError::DimensionMismatch {
                expected: n,
                actual: gate.max_qubit().saturating_add(1),
            });
        }
        Ok(())
    }

    /// Amplitudes ordered by basis index
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        self.state.amplitudes()
    }

    /// Amplitude of one basis state
    ///
    /// # Errors
    /// `DimensionMismatch` if `basis` belongs to a register of another width
    pub fn amplitude(&self, basis: BasisState) -> Result<Complex64> {
        self.check_basis(basis)?;
        Ok(self.state.amplitudes()[basis.value()])
    }

    /// Owned copy of the amplitudes
    pub fn to_vec(&self) -> Vec<Complex64> {
        self.state.amplitudes().to_vec()
    }

    /// Replace all amplitudes
    ///
    /// The input is not normalized.
    ///
    /// # Errors
    /// `DimensionMismatch` unless `amplitudes.len() == 2^n`
    pub fn set_amplitudes(&mut self, amplitudes: &[Complex64]) -> Result<()> {
        self.state.copy_from(amplitudes)
    }

    /// Put the register into a computational basis state
    ///
    /// # Errors
    /// `DimensionMismatch` if `basis` belongs to a register of another width
    pub fn set_basis_state(&mut self, basis: BasisState) -> Result<()> {
        self.check_basis(basis)?;
        self.state.set_basis(basis.value());
        Ok(())
    }

    /// Return to |0...0⟩
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// L2 norm of the state
    pub fn norm(&self) -> f64 {
        self.state.norm()
    }

    /// Measurement probabilities |a_i|², ordered by basis index
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.amplitudes().iter().map(|a| a.norm_sqr()).collect()
    }

    fn check_basis(&self, basis: BasisState) -> Result<()> {
        if basis.num_qubits() != self.num_qubits() {
            return Err(StateError::DimensionMismatch {
                expected: self.num_qubits(),
                actual: basis.num_qubits(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Computer {
    /// One line per non-zero amplitude: `(re, im) |bits>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.num_qubits();
        for (value, amplitude) in self.amplitudes().iter().enumerate() {
            if amplitude.norm_sqr() == 0.0 {
                continue;
            }
            let basis = BasisState::new(value, n).map_err(|_| fmt::Error)?;
            writeln!(f, "({:.6}, {:.6}) {}", amplitude.re, amplitude.im, basis)?;
        }
        Ok(())
    }
}
