//! Demo driver: build a 3-qubit circuit and print the collapsed outcome
//!
//! Mirrors the reference walkthrough: Hadamard on qubits 1 and 2, a π/8
//! phase on qubit 1, controlled-NOT with qubit 1 controlling qubit 0, then
//! a measurement of the whole register.

use quantum_register::QuantumRegister;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut register = QuantumRegister::new(3).expect("3 qubits is always valid");

    register.apply_hadamard(1).unwrap();
    register.apply_hadamard(2).unwrap();
    register.apply_pi_over_eight(1).unwrap();
    register.apply_controlled_not(1, 0).unwrap();

    println!("State before collapse:");
    for (index, amplitude) in register.amplitudes().iter().enumerate() {
        if amplitude.norm() > 1e-12 {
            println!(
                "  |{index:03b}⟩  amplitude {:.4}{:+.4}i  probability {:.4}",
                amplitude.re,
                amplitude.im,
                amplitude.norm_sqr()
            );
        }
    }

    let outcome = register.collapse();
    println!("Collapsed outcome (thread rng): {:?}", outcome.bits());

    // Same circuit again with a seeded generator for a reproducible run
    let mut register = QuantumRegister::new(3).unwrap();
    register.apply_hadamard(1).unwrap();
    register.apply_hadamard(2).unwrap();
    register.apply_pi_over_eight(1).unwrap();
    register.apply_controlled_not(1, 0).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let outcome = register.collapse_with(&mut || rng.gen());
    println!(
        "Collapsed outcome (seed 42):    {:?}  (bitstring {})",
        outcome.bits(),
        outcome.as_bitstring()
    );
}
