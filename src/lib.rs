//! Classical simulator of a small quantum register
//!
//! This crate maintains a complex-valued state vector over `n` qubits and
//! exposes three unitary gates plus a probabilistic collapse operation.
//! Basis states are indexed by their integer encoding: bit `b` of index `i`
//! is the value of qubit `b`.
//!
//! The gate semantics reproduce a reference simulator exactly, including its
//! non-standard anti-symmetric Hadamard transform (see
//! [`QuantumRegister::apply_hadamard`]). State vectors grow as `2^n`, so the
//! crate targets small registers only.
//!
//! # Example
//!
//! ```
//! use quantum_register::QuantumRegister;
//!
//! let mut register = QuantumRegister::new(3).unwrap();
//!
//! register.apply_hadamard(1).unwrap();
//! register.apply_hadamard(2).unwrap();
//! register.apply_pi_over_eight(1).unwrap();
//! register.apply_controlled_not(1, 0).unwrap();
//!
//! let outcome = register.collapse();
//! assert_eq!(outcome.bits().len(), 3);
//! ```

pub mod error;
pub mod gates;
pub mod measurement;
pub mod register;

pub use error::{RegisterError, Result};
pub use measurement::CollapseOutcome;
pub use register::QuantumRegister;
