//! Gate operations on [`QuantumRegister`]
//!
//! Three unitaries are provided: the π/8 phase rotation (T-gate), the
//! controlled-NOT permutation and the Hadamard mixing transform. The two
//! gates that mix amplitudes across index pairs (controlled-NOT, Hadamard)
//! read from a snapshot of the pre-operation vector and write into the live
//! vector, since their updates are not elementwise-independent.

use crate::error::{RegisterError, Result};
use crate::register::QuantumRegister;
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_8};

impl QuantumRegister {
    /// Apply a π/8 phase rotation (T-gate) to the given qubit.
    ///
    /// Every amplitude is multiplied by `e^(-iπ/8)` where bit `qubit` of its
    /// index is 0 and by `e^(+iπ/8)` where it is 1. A pure phase rotation,
    /// so magnitudes (and the norm) are preserved exactly.
    ///
    /// # Errors
    /// Returns [`RegisterError::InvalidQubit`] if `qubit` is out of range.
    pub fn apply_pi_over_eight(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;

        let phase_zero = Complex64::from_polar(1.0, -FRAC_PI_8);
        let phase_one = Complex64::from_polar(1.0, FRAC_PI_8);

        for (i, amplitude) in self.amplitudes_mut().iter_mut().enumerate() {
            if (i >> qubit) & 1 == 0 {
                *amplitude *= phase_zero;
            } else {
                *amplitude *= phase_one;
            }
        }

        Ok(())
    }

    /// Apply a controlled-NOT gate: flip `target` wherever `control` is 1.
    ///
    /// Each source amplitude at index `i` is relocated to
    /// `i ^ (bit(i, control) << target)`, a permutation of the basis states.
    ///
    /// # Errors
    /// Returns [`RegisterError::InvalidQubit`] if either index is out of
    /// range, or [`RegisterError::DuplicateQubit`] if `control == target`.
    pub fn apply_controlled_not(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(RegisterError::DuplicateQubit { index: control });
        }

        // Source and destination index ranges overlap as the loop proceeds.
        let snapshot = self.amplitudes().to_vec();
        let amplitudes = self.amplitudes_mut();

        for (i, &amplitude) in snapshot.iter().enumerate() {
            let destination = i ^ (((i >> control) & 1) << target);
            amplitudes[destination] = amplitude;
        }

        Ok(())
    }

    /// Apply the Hadamard transform of the reference simulator to a qubit.
    ///
    /// With `step = 2^qubit`, both halves of an index pair receive
    /// `(old[low] - old[high]) / √2`: indices with bit `qubit` clear compute
    /// `(old[i] - old[i + step]) / √2`, indices with the bit set compute
    /// `(old[i - step] - old[i]) / √2`. This is the exact linear combination
    /// of the reference implementation, which differs from the textbook
    /// symmetric Hadamard `(a + b)/√2, (a - b)/√2`.
    ///
    /// # Errors
    /// Returns [`RegisterError::InvalidQubit`] if `qubit` is out of range.
    pub fn apply_hadamard(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;

        let step = 1usize << qubit;
        let snapshot = self.amplitudes().to_vec();
        let amplitudes = self.amplitudes_mut();

        for (i, amplitude) in amplitudes.iter_mut().enumerate() {
            let difference = if (i >> qubit) & 1 == 0 {
                snapshot[i] - snapshot[i + step]
            } else {
                snapshot[i - step] - snapshot[i]
            };
            *amplitude = difference * FRAC_1_SQRT_2;
        }

        Ok(())
    }
}
