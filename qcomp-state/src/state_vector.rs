//! Amplitude storage with aligned memory

use crate::error::{Result, StateError};
use num_complex::Complex64;
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fmt;
use std::ptr::NonNull;

/// Largest register the engine will allocate (16 GiB of amplitudes)
pub const MAX_QUBITS: usize = 30;

/// Alignment of the amplitude buffer (one cache line)
const ALIGNMENT: usize = 64;

/// Flat buffer of 2^n complex amplitudes, indexed by basis-state value
///
/// The buffer is allocated once with cache-line alignment and never resized.
///
/// # Example
///
/// ```
/// use qcomp_state::StateVector;
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.amplitudes()[0].re, 1.0);
/// ```
pub struct StateVector {
    num_qubits: usize,
    dimension: usize,
    data: NonNull<Complex64>,
    layout: Layout,
}

impl StateVector {
    /// Create a state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns `InvalidDimension` above [`MAX_QUBITS`] and `AllocationError`
    /// if the allocator fails
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidDimension {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        let size = dimension * std::mem::size_of::<Complex64>();
        let layout = Layout::from_size_align(size, ALIGNMENT)
            .map_err(|_| StateError::AllocationError { size })?;

        // SAFETY: `layout` has non-zero size (dimension >= 1); an all-zero
        // bit pattern is a valid Complex64 (0.0 + 0.0i).
        let data = unsafe {
            let ptr = alloc_zeroed(layout) as *mut Complex64;
            let data = NonNull::new(ptr).ok_or(StateError::AllocationError { size })?;
            *data.as_ptr() = Complex64::new(1.0, 0.0);
            data
        };

        Ok(Self {
            num_qubits,
            dimension,
            data,
            layout,
        })
    }

    /// Create a state vector holding a copy of `amplitudes`
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless `amplitudes.len() == 2^num_qubits`
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;
        state.copy_from(amplitudes)?;
        Ok(state)
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Read-only view of the amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        // SAFETY: `data` points to `dimension` initialized amplitudes owned by self
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.dimension) }
    }

    /// Mutable view of the amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        // SAFETY: as above; `&mut self` guarantees exclusive access
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.dimension) }
    }

    /// Overwrite all amplitudes
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the lengths differ; the state is unchanged
    pub fn copy_from(&mut self, amplitudes: &[Complex64]) -> Result<()> {
        if amplitudes.len() != self.dimension {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension,
                actual: amplitudes.len(),
            });
        }
        self.amplitudes_mut().copy_from_slice(amplitudes);
        Ok(())
    }

    /// Whether the buffer start is cache-line aligned
    #[inline]
    pub fn is_aligned(&self) -> bool {
        (self.data.as_ptr() as usize) % ALIGNMENT == 0
    }

    /// L2 norm of the amplitudes
    pub fn norm(&self) -> f64 {
        self.amplitudes()
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Set the state to the basis state with the given index
    ///
    /// `index` must be below `dimension()`.
    pub fn set_basis(&mut self, index: usize) {
        let amplitudes = self.amplitudes_mut();
        amplitudes.fill(Complex64::new(0.0, 0.0));
        amplitudes[index] = Complex64::new(1.0, 0.0);
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        self.set_basis(0);
    }
}

impl Clone for StateVector {
    fn clone(&self) -> Self {
        let layout = self.layout;
        // SAFETY: same layout as an existing allocation; the copy fills every
        // amplitude before the slice is observed.
        let data = unsafe {
            let ptr = alloc_zeroed(layout) as *mut Complex64;
            let data = match NonNull::new(ptr) {
                Some(data) => data,
                None => std::alloc::handle_alloc_error(layout),
            };
            std::ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_ptr(), self.dimension);
            data
        };

        Self {
            num_qubits: self.num_qubits,
            dimension: self.dimension,
            data,
            layout,
        }
    }
}

impl Drop for StateVector {
    fn drop(&mut self) {
        // SAFETY: `data` was allocated with `layout` and is freed exactly once
        unsafe {
            dealloc(self.data.as_ptr() as *mut u8, self.layout);
        }
    }
}

impl fmt::Debug for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVector")
            .field("num_qubits", &self.num_qubits)
            .field("amplitudes", &self.amplitudes())
            .finish()
    }
}

// SAFETY: StateVector owns its buffer exclusively; mutation requires `&mut self`
unsafe impl Send for StateVector {}
unsafe impl Sync for StateVector {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_state_vector() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.dimension(), 8);
        assert!(state.is_aligned());

        let amplitudes = state.amplitudes();
        assert_eq!(amplitudes[0], Complex64::new(1.0, 0.0));
        assert!(amplitudes[1..].iter().all(|a| *a == Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_zero_qubits() {
        let state = StateVector::new(0).unwrap();
        assert_eq!(state.dimension(), 1);
        assert_relative_eq!(state.norm(), 1.0);
    }

    #[test]
    fn test_too_many_qubits() {
        assert_eq!(
            StateVector::new(MAX_QUBITS + 1).err(),
            Some(StateError::InvalidDimension {
                num_qubits: MAX_QUBITS + 1,
                max: MAX_QUBITS
            })
        );
    }

    #[test]
    fn test_from_amplitudes() {
        let half = Complex64::new(0.5, 0.0);
        let state = StateVector::from_amplitudes(2, &[half; 4]).unwrap();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);

        let err = StateVector::from_amplitudes(2, &[half; 3]).unwrap_err();
        assert_eq!(
            err,
            StateError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_set_basis_and_reset() {
        let mut state = StateVector::new(2).unwrap();
        state.set_basis(3);
        assert_eq!(state.amplitudes()[3], Complex64::new(1.0, 0.0));
        assert_eq!(state.amplitudes()[0], Complex64::new(0.0, 0.0));

        state.reset();
        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = StateVector::new(2).unwrap();
        let b = a.clone();
        a.set_basis(1);
        assert_eq!(b.amplitudes()[0], Complex64::new(1.0, 0.0));
        assert_eq!(a.amplitudes()[1], Complex64::new(1.0, 0.0));
        assert!(b.is_aligned());
    }
}
