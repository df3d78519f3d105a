//! Measurement of the full register with state collapse
//!
//! Sampling follows amplitude-squared weights: compute `|amp|²` for every
//! basis state, draw a uniform value in `[0, total)` and walk the indices
//! subtracting weights until the remainder goes negative. The register is
//! then reset to the sampled basis state. The random source is an injected
//! closure so tests can force specific outcomes; [`collapse`] wraps it with
//! the thread-local generator.
//!
//! [`collapse`]: QuantumRegister::collapse

use crate::register::QuantumRegister;
use num_complex::Complex64;
use rand::Rng;

/// Outcome of collapsing a register to a single basis state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseOutcome {
    /// Sampled basis state index
    index: usize,

    /// Number of qubits in the measured register
    num_qubits: usize,
}

impl CollapseOutcome {
    /// Get the sampled basis state index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the value of a single qubit in the outcome
    pub fn bit(&self, qubit: usize) -> u8 {
        ((self.index >> qubit) & 1) as u8
    }

    /// Get the outcome as bits, qubit 0 first
    pub fn bits(&self) -> Vec<u8> {
        (0..self.num_qubits).map(|qubit| self.bit(qubit)).collect()
    }

    /// Get the outcome as a bitstring, most significant qubit first
    pub fn as_bitstring(&self) -> String {
        format!("{:0width$b}", self.index, width = self.num_qubits)
    }
}

impl QuantumRegister {
    /// Collapse the register using an injected random source.
    ///
    /// `rng` must yield uniform values in `[0, 1)`. The register is left in
    /// the sampled basis state: amplitude 1 at the outcome index, 0
    /// elsewhere.
    ///
    /// If the total weight has underflowed to zero the outcome falls back to
    /// basis state 0 rather than leaving the draw undefined.
    pub fn collapse_with(&mut self, rng: &mut dyn FnMut() -> f64) -> CollapseOutcome {
        let weights = self.probabilities();
        let total: f64 = weights.iter().sum();

        let index = if total <= 0.0 {
            0
        } else {
            let mut remainder = rng() * total;
            // Floating-point slack can leave the remainder non-negative
            // after the walk; the last index absorbs it.
            let mut sampled = self.dimension() - 1;
            for (i, weight) in weights.iter().enumerate() {
                remainder -= weight;
                if remainder < 0.0 {
                    sampled = i;
                    break;
                }
            }
            sampled
        };

        let amplitudes = self.amplitudes_mut();
        amplitudes.fill(Complex64::new(0.0, 0.0));
        amplitudes[index] = Complex64::new(1.0, 0.0);

        CollapseOutcome {
            index,
            num_qubits: self.num_qubits(),
        }
    }

    /// Collapse the register using the thread-local random generator.
    pub fn collapse(&mut self) -> CollapseOutcome {
        let mut rng = rand::thread_rng();
        self.collapse_with(&mut || rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_collapse_of_basis_state() {
        let mut register = QuantumRegister::new(2).unwrap();
        let outcome = register.collapse_with(&mut || 0.99);

        // |00⟩ carries all the weight regardless of the draw
        assert_eq!(outcome.index(), 0);
        assert_eq!(outcome.bits(), vec![0, 0]);
    }

    #[test]
    fn test_collapse_picks_weighted_index() {
        let amplitudes = vec![
            Complex64::new(0.6, 0.0),
            Complex64::new(0.8, 0.0),
        ];
        let mut register = QuantumRegister::from_amplitudes(1, &amplitudes).unwrap();

        // Weights are [0.36, 0.64]; a draw of 0.5 lands in the second bin
        let outcome = register.collapse_with(&mut || 0.5);
        assert_eq!(outcome.index(), 1);
        assert_eq!(outcome.bits(), vec![1]);
    }

    #[test]
    fn test_collapse_resets_to_outcome() {
        let amplitudes = vec![
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, FRAC_1_SQRT_2),
            Complex64::new(0.0, 0.0),
        ];
        let mut register = QuantumRegister::from_amplitudes(2, &amplitudes).unwrap();

        let outcome = register.collapse_with(&mut || 0.75);

        assert_eq!(outcome.index(), 2);
        let mut surviving = 0;
        for (i, amplitude) in register.amplitudes().iter().enumerate() {
            if i == outcome.index() {
                assert_relative_eq!(amplitude.norm(), 1.0, epsilon = 1e-9);
                surviving += 1;
            } else {
                assert_relative_eq!(amplitude.norm(), 0.0, epsilon = 1e-9);
            }
        }
        assert_eq!(surviving, 1);
        assert!(register.is_normalized(1e-9));
    }

    #[test]
    fn test_collapse_zero_weight_fallback() {
        let zeros = vec![Complex64::new(0.0, 0.0); 4];
        let mut register = QuantumRegister::from_amplitudes(2, &zeros).unwrap();

        let outcome = register.collapse_with(&mut || 0.5);

        assert_eq!(outcome.index(), 0);
        assert_eq!(register.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_collapse_draw_at_upper_edge() {
        // A draw so close to 1 that the walk may never go negative must
        // still land on the last index, not run off the end.
        let amplitudes = vec![
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(FRAC_1_SQRT_2, 0.0),
        ];
        let mut register = QuantumRegister::from_amplitudes(1, &amplitudes).unwrap();

        let outcome = register.collapse_with(&mut || 1.0 - f64::EPSILON);
        assert_eq!(outcome.index(), 1);
    }

    #[test]
    fn test_collapse_with_seeded_rng() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut register = QuantumRegister::new(3).unwrap();
        register.apply_hadamard(0).unwrap();

        let outcome = register.collapse_with(&mut || rng.gen());

        // Weight lives on indices 0 and 1 only
        assert!(outcome.index() < 2);
        assert_eq!(outcome.bits().len(), 3);
    }

    #[test]
    fn test_collapse_frequencies() {
        let mut rng = StdRng::seed_from_u64(7);
        let amplitudes = vec![
            Complex64::new(0.6, 0.0),
            Complex64::new(0.8, 0.0),
        ];

        let shots = 10_000;
        let mut ones = 0;
        for _ in 0..shots {
            let mut register = QuantumRegister::from_amplitudes(1, &amplitudes).unwrap();
            if register.collapse_with(&mut || rng.gen()).index() == 1 {
                ones += 1;
            }
        }

        let frequency = ones as f64 / shots as f64;
        assert!(
            (frequency - 0.64).abs() < 0.02,
            "Frequency {} too far from 0.64",
            frequency
        );
    }

    #[test]
    fn test_outcome_encoding() {
        let mut register = QuantumRegister::new(3).unwrap();
        register.apply_hadamard(0).unwrap();
        register.apply_controlled_not(0, 2).unwrap();

        // Weight on indices 0 and 5; force the second bin
        let outcome = register.collapse_with(&mut || 0.9);

        assert_eq!(outcome.index(), 5);
        assert_eq!(outcome.bits(), vec![1, 0, 1]);
        assert_eq!(outcome.bit(0), 1);
        assert_eq!(outcome.bit(1), 0);
        assert_eq!(outcome.bit(2), 1);
        assert_eq!(outcome.as_bitstring(), "101");
    }
}
