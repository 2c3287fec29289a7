//! Computer configuration

use crate::state_vector::MAX_QUBITS;

/// Configuration for a [`Computer`](crate::Computer)
///
/// Only the blocked strategy (`apply_circuit_fast2`) reads these settings;
/// the reference and indexed strategies are always sequential.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputerConfig {
    /// Allow the blocked strategy to process independent blocks on the
    /// rayon thread pool
    ///
    /// Default: true
    pub use_parallel: bool,

    /// Minimum number of qubits before the blocked strategy goes parallel
    ///
    /// Smaller registers run single-threaded to avoid scheduling overhead.
    ///
    /// Default: 14
    pub parallel_threshold: usize,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self {
            use_parallel: true,
            parallel_threshold: 14,
        }
    }
}

impl ComputerConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that never uses the thread pool
    pub fn sequential() -> Self {
        Self {
            use_parallel: false,
            ..Default::default()
        }
    }

    /// Configuration that parallelizes the blocked strategy at every width
    pub fn parallel() -> Self {
        Self {
            use_parallel: true,
            parallel_threshold: 0,
        }
    }

    /// Enable or disable parallel block processing
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.use_parallel = enabled;
        self
    }

    /// Set the parallel threshold in qubits
    pub fn with_parallel_threshold(mut self, qubits: usize) -> Self {
        self.parallel_threshold = qubits;
        self
    }

    /// Whether a register of `num_qubits` qubits takes the parallel path
    #[inline]
    pub fn runs_parallel(&self, num_qubits: usize) -> bool {
        self.use_parallel && num_qubits >= self.parallel_threshold
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.use_parallel && self.parallel_threshold > MAX_QUBITS {
            return Err(format!(
                "parallel_threshold must be at most {} qubits, got {}",
                MAX_QUBITS, self.parallel_threshold
            ));
        }

        Ok(())
    }
}
