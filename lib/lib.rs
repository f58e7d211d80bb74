//! Small, self-contained simulations of elementary quantum-computing concepts
//! for interactive demos.
//!
//! Four independent components are provided:
//! - [`qubit::SingleQubit`]: a single qubit with real amplitudes, acted on by
//! Hadamard, Pauli-X, and Pauli-Z gates and collapsed by measurement
//! - [`pair::EntangledPair`]: a Bell pair ∣Φ⁺⟩ whose members always agree
//! when measured
//! - [`grover::GroverSearch`]: a comparison between a linear scan and the
//! ⌈√*N*⌉ iteration count of Grover's algorithm
//! - [`random`]: random bits, bounded integers, and passwords drawn from
//! simulated measurements
//!
//! None of these call into each other. Every random operation takes the random
//! source as an argument, so outcomes are reproducible with a seeded generator.
//! [`session::Session`] bundles one of each component with its own seeded
//! generator for use by a single front-end session.
//!
//! # Example
//! ```
//! use rand::{ rngs::StdRng, SeedableRng };
//! use qubit_demos::qubit::SingleQubit;
//!
//! let mut rng = StdRng::seed_from_u64(10546);
//! let mut q = SingleQubit::new();
//! q.hadamard();
//! assert_eq!(q.state_string(), "50.0% |0⟩, 50.0% |1⟩");
//! let outcome = q.measure(&mut rng);
//! assert!(q.is_collapsed());
//! println!("measured {}", outcome);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod gate;
pub mod qubit;
pub mod pair;
pub mod grover;
pub mod random;
pub mod session;

pub use error::{ DemoError, Result };
