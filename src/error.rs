//! Error types for register operations

use thiserror::Error;

/// Errors that can occur during register operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Qubit index outside `[0, num_qubits)`
    #[error("Invalid qubit index {index} for {num_qubits}-qubit register")]
    InvalidQubit { index: usize, num_qubits: usize },

    /// Controlled-NOT given the same qubit as control and target
    #[error("Control and target are both qubit {index}")]
    DuplicateQubit { index: usize },

    /// Basis-state index outside `[0, 2^num_qubits)`
    #[error("Invalid basis state {index} for dimension-{dimension} register")]
    InvalidBasisState { index: usize, dimension: usize },

    /// Unsupported qubit count at construction
    #[error("Unsupported qubit count {num_qubits}, expected 1..=30")]
    InvalidQubitCount { num_qubits: usize },

    /// Amplitude slice length does not match 2^num_qubits
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for register operations
pub type Result<T> = std::result::Result<T, RegisterError>;
