//! A single qubit with real amplitudes.
//!
//! The state ∣ψ⟩ = *a*∣0⟩ + *b*∣1⟩ is stored as the column vector (*a*, *b*)
//! with *a*² + *b*² = 1. Gates act by matrix multiplication; measurement in
//! the Z-basis draws a single uniform number and collapses the state onto the
//! observed basis vector.
//!
//! # Example
//! ```
//! use rand::{ rngs::StdRng, SeedableRng };
//! use qubit_demos::{ gate::Gate, qubit::SingleQubit };
//!
//! let mut rng = StdRng::seed_from_u64(10546);
//! let mut q = SingleQubit::new();
//! q.apply_circuit(&[Gate::X, Gate::H, Gate::Z]);
//! println!("{}", q); // 50.0% |0⟩, 50.0% |1⟩
//!
//! let first = q.measure(&mut rng);
//! let second = q.measure(&mut rng);
//! assert_eq!(first, second);
//! ```

use std::fmt;
use nalgebra as na;
use rand::Rng;
use tracing::debug;
use crate::gate::Gate;

/// The result of a Z-basis measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// ∣0⟩
    Zero,
    /// ∣1⟩
    One,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Zero => write!(f, "0"),
            Self::One => write!(f, "1"),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }
}

impl Outcome {
    /// Return the basis vector the state collapses onto for this outcome.
    pub fn basis_vector(self) -> na::Vector2<f64> {
        match self {
            Self::Zero => na::Vector2::new(1.0, 0.0),
            Self::One => na::Vector2::new(0.0, 1.0),
        }
    }

    /// Pick `Zero` with probability `prob0`.
    ///
    /// Probabilities at or beyond the edges of `[0, 1]` are treated as
    /// certain and consume no randomness.
    pub(crate) fn draw<R>(prob0: f64, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        if prob0 >= 1.0 {
            Self::Zero
        } else if prob0 <= 0.0 {
            Self::One
        } else if rng.gen::<f64>() < prob0 {
            Self::Zero
        } else {
            Self::One
        }
    }
}

/// A single qubit, initialized to ∣0⟩.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleQubit {
    state: na::Vector2<f64>,
}

impl Default for SingleQubit {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for SingleQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% |0⟩, {:.1}% |1⟩",
            self.probability0() * 100.0,
            self.probability1() * 100.0,
        )
    }
}

impl SingleQubit {
    /// Create a new qubit in ∣0⟩.
    pub fn new() -> Self {
        Self { state: Outcome::Zero.basis_vector() }
    }

    /// Return the qubit to ∣0⟩.
    pub fn reset(&mut self) -> &mut Self {
        self.state = Outcome::Zero.basis_vector();
        self
    }

    /// Perform the action of a gate.
    pub fn apply_gate(&mut self, gate: Gate) -> &mut Self {
        self.state = gate.matrix() * self.state;
        debug!(%gate, a = self.state[0], b = self.state[1], "applied gate");
        self
    }

    /// Perform a series of gates.
    pub fn apply_circuit<'a, I>(&mut self, gates: I) -> &mut Self
    where I: IntoIterator<Item = &'a Gate>
    {
        gates.into_iter().copied().for_each(|g| { self.apply_gate(g); });
        self
    }

    /// Apply a Hadamard gate: (*a*, *b*) → ((*a* + *b*)/√2, (*a* − *b*)/√2).
    pub fn hadamard(&mut self) -> &mut Self { self.apply_gate(Gate::H) }

    /// Apply a Pauli-X gate: (*a*, *b*) → (*b*, *a*).
    pub fn pauli_x(&mut self) -> &mut Self { self.apply_gate(Gate::X) }

    /// Apply a Pauli-Z gate: (*a*, *b*) → (*a*, −*b*).
    pub fn pauli_z(&mut self) -> &mut Self { self.apply_gate(Gate::Z) }

    /// Perform a projective measurement in the Z-basis, returning the outcome
    /// and collapsing the state onto the corresponding basis vector.
    ///
    /// A state that has already collapsed always reproduces its outcome.
    pub fn measure<R>(&mut self, rng: &mut R) -> Outcome
    where R: Rng + ?Sized
    {
        let prob0 = self.probability0();
        let outcome = Outcome::draw(prob0, rng);
        self.state = outcome.basis_vector();
        debug!(prob0, %outcome, "measured qubit");
        outcome
    }

    /// Return the probability of measuring ∣0⟩.
    pub fn probability0(&self) -> f64 { self.state[0].powi(2) }

    /// Return the probability of measuring ∣1⟩.
    pub fn probability1(&self) -> f64 { self.state[1].powi(2) }

    /// Return the amplitudes (*a*, *b*).
    pub fn amplitudes(&self) -> (f64, f64) { (self.state[0], self.state[1]) }

    /// Return `true` if the state is exactly ±∣0⟩ or ±∣1⟩.
    pub fn is_collapsed(&self) -> bool {
        let (p0, p1) = (self.probability0(), self.probability1());
        (p0 == 1.0 && p1 == 0.0) || (p0 == 0.0 && p1 == 1.0)
    }

    /// Describe the state by its measurement probabilities, e.g.
    /// `"50.0% |0⟩, 50.0% |1⟩"`.
    pub fn state_string(&self) -> String { self.to_string() }
}
