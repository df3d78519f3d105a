//! Dense amplitude-vector representation of a qubit register

use crate::error::{RegisterError, Result};
use num_complex::Complex64;

/// Largest supported register; 2^30 amplitudes already exceeds practical memory.
const MAX_QUBITS: usize = 30;

/// Classical simulation of an `n`-qubit quantum register.
///
/// The register owns a vector of `2^n` complex amplitudes indexed by the
/// integer encoding of the basis states: bit `b` of index `i` is the value
/// of qubit `b`. Gates mutate the vector in place; [`collapse`] samples a
/// basis state and resets the vector to it.
///
/// [`collapse`]: QuantumRegister::collapse
///
/// # Example
///
/// ```
/// use quantum_register::QuantumRegister;
///
/// let mut register = QuantumRegister::new(2).unwrap();
/// assert_eq!(register.num_qubits(), 2);
/// assert_eq!(register.dimension(), 4);
///
/// register.apply_hadamard(1).unwrap();
/// let outcome = register.collapse_with(&mut || 0.0);
/// assert_eq!(outcome.bits().len(), 2);
/// ```
#[derive(Debug)]
pub struct QuantumRegister {
    /// Number of qubits, fixed at construction
    num_qubits: usize,

    /// `2^num_qubits` complex amplitudes
    amplitudes: Vec<Complex64>,
}

impl QuantumRegister {
    /// Create a new register initialized to |0...0⟩.
    ///
    /// # Errors
    /// Returns [`RegisterError::InvalidQubitCount`] if `num_qubits` is zero
    /// or larger than 30.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(RegisterError::InvalidQubitCount { num_qubits });
        }

        let dimension = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a register from raw amplitude data.
    ///
    /// # Errors
    /// Returns an error if `num_qubits` is unsupported or `amplitudes` does
    /// not have length `2^num_qubits`.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(RegisterError::InvalidQubitCount { num_qubits });
        }

        let dimension = 1usize << num_qubits;
        if amplitudes.len() != dimension {
            return Err(RegisterError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get a mutable reference to the amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Compute the L2 norm of the amplitude vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check if the state is normalized (norm ≈ 1)
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Get the probability of measuring a specific basis state
    ///
    /// # Errors
    /// Returns an error if `basis_state` is out of bounds.
    pub fn probability(&self, basis_state: usize) -> Result<f64> {
        if basis_state >= self.dimension() {
            return Err(RegisterError::InvalidBasisState {
                index: basis_state,
                dimension: self.dimension(),
            });
        }

        Ok(self.amplitudes[basis_state].norm_sqr())
    }

    /// Get probabilities for all basis states
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Reset the register to |0...0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Validate a qubit index against this register's size.
    ///
    /// The reference implementation accepted `index == num_qubits`; here the
    /// full out-of-range check applies.
    pub(crate) fn check_qubit(&self, index: usize) -> Result<()> {
        if index >= self.num_qubits {
            return Err(RegisterError::InvalidQubit {
                index,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }
}
