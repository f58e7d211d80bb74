//! A maximally entangled pair of qubits in the Bell state ∣Φ⁺⟩.
//!
//! The pair is held as a fixed table of real amplitudes over the four joint
//! outcomes ∣00⟩, ∣01⟩, ∣10⟩, ∣11⟩, initially (1/√2, 0, 0, 1/√2). This is not
//! a general two-qubit simulator: the two members are defined to always agree,
//! so measuring either one fixes both recorded outcomes and collapses the
//! table onto ∣00⟩ or ∣11⟩. The collapse persists until [`EntangledPair::reset`].

use std::fmt;
use itertools::Itertools;
use nalgebra as na;
use rand::Rng;
use tracing::debug;
use crate::qubit::Outcome;

/// Label of a joint outcome of the pair, with qubit A written first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BellLabel {
    /// ∣00⟩
    ZeroZero,
    /// ∣01⟩
    ZeroOne,
    /// ∣10⟩
    OneZero,
    /// ∣11⟩
    OneOne,
}

impl fmt::Display for BellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ZeroZero => write!(f, "00"),
            Self::ZeroOne => write!(f, "01"),
            Self::OneZero => write!(f, "10"),
            Self::OneOne => write!(f, "11"),
        }
    }
}

impl BellLabel {
    /// All four labels in table order.
    pub const ALL: [Self; 4]
        = [Self::ZeroZero, Self::ZeroOne, Self::OneZero, Self::OneOne];

    /// Position of the label in the amplitude table.
    pub fn index(self) -> usize {
        match self {
            Self::ZeroZero => 0,
            Self::ZeroOne => 1,
            Self::OneZero => 2,
            Self::OneOne => 3,
        }
    }

    /// Combine outcomes for qubits A and B.
    pub fn from_outcomes(a: Outcome, b: Outcome) -> Self {
        match (a, b) {
            (Outcome::Zero, Outcome::Zero) => Self::ZeroZero,
            (Outcome::Zero, Outcome::One ) => Self::ZeroOne,
            (Outcome::One,  Outcome::Zero) => Self::OneZero,
            (Outcome::One,  Outcome::One ) => Self::OneOne,
        }
    }

    /// Outcome for qubit A.
    pub fn a(self) -> Outcome {
        match self {
            Self::ZeroZero | Self::ZeroOne => Outcome::Zero,
            Self::OneZero | Self::OneOne => Outcome::One,
        }
    }

    /// Outcome for qubit B.
    pub fn b(self) -> Outcome {
        match self {
            Self::ZeroZero | Self::OneZero => Outcome::Zero,
            Self::ZeroOne | Self::OneOne => Outcome::One,
        }
    }
}

/// A Bell pair of qubits A and B.
#[derive(Clone, Debug, PartialEq)]
pub struct EntangledPair {
    amps: na::Vector4<f64>, // indexed by `BellLabel::index`
    outcomes: Option<(Outcome, Outcome)>, // (A, B), set once measured
}

impl Default for EntangledPair {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for EntangledPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table
            = BellLabel::ALL.iter()
            .map(|l| format!("{}: {:.1}%", l, self.probability(*l) * 100.0))
            .join(", ");
        write!(f, "{}", table)
    }
}

impl EntangledPair {
    /// Create a new, unmeasured pair in ∣Φ⁺⟩.
    pub fn new() -> Self {
        use std::f64::consts::FRAC_1_SQRT_2 as ORT2;
        Self {
            amps: na::Vector4::new(ORT2, 0.0, 0.0, ORT2),
            outcomes: None,
        }
    }

    /// Restore ∣Φ⁺⟩ and forget any recorded measurements.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }

    /// Return the amplitude of a joint outcome.
    pub fn amplitude(&self, label: BellLabel) -> f64 { self.amps[label.index()] }

    /// Return the probability of a joint outcome.
    pub fn probability(&self, label: BellLabel) -> f64 {
        self.amplitude(label).powi(2)
    }

    /// Return `true` if either member has been measured since the last reset.
    pub fn is_measured(&self) -> bool { self.outcomes.is_some() }

    /// Return the recorded outcome for qubit A, if measured.
    pub fn measurement_a(&self) -> Option<Outcome> {
        self.outcomes.map(|(a, _)| a)
    }

    /// Return the recorded outcome for qubit B, if measured.
    pub fn measurement_b(&self) -> Option<Outcome> {
        self.outcomes.map(|(_, b)| b)
    }

    /// Measure qubit A.
    ///
    /// The first measurement of either member reads A as 0 with probability
    /// equal to the combined weight of ∣00⟩ and ∣11⟩, forces B to the same
    /// value, and collapses the amplitude table onto the realized joint
    /// outcome. For an untouched ∣Φ⁺⟩ that weight is 1, so A reads 0 without
    /// a draw. Later calls return the recorded value without drawing.
    pub fn measure_a<R>(&mut self, rng: &mut R) -> Outcome
    where R: Rng + ?Sized
    {
        self.collapse(rng).0
    }

    /// Measure qubit B.
    ///
    /// Triggers the same joint collapse as [`Self::measure_a`] if the pair has
    /// not been measured yet.
    pub fn measure_b<R>(&mut self, rng: &mut R) -> Outcome
    where R: Rng + ?Sized
    {
        self.collapse(rng).1
    }

    /// Return `true` if the pair has been measured and both members agree.
    pub fn are_correlated(&self) -> bool {
        matches!(self.outcomes, Some((a, b)) if a == b)
    }

    fn collapse<R>(&mut self, rng: &mut R) -> (Outcome, Outcome)
    where R: Rng + ?Sized
    {
        if let Some(outcomes) = self.outcomes { return outcomes; }
        // weight of the correlated outcomes; ≥ 1 for an untouched ∣Φ⁺⟩, in
        // which case A reads 0 without a draw
        let prob0
            = self.probability(BellLabel::ZeroZero)
            + self.probability(BellLabel::OneOne);
        let a = Outcome::draw(prob0, rng);
        let realized = BellLabel::from_outcomes(a, a);
        self.amps = na::Vector4::zeros();
        self.amps[realized.index()] = 1.0;
        self.outcomes = Some((a, a));
        debug!(prob0, %realized, "collapsed entangled pair");
        (a, a)
    }

    #[cfg(test)]
    fn with_amplitudes(amps: [f64; 4]) -> Self {
        Self { amps: na::Vector4::from(amps), outcomes: None }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{ rngs::{ mock::StepRng, StdRng }, SeedableRng };

    #[test]
    fn starts_in_bell_state() {
        let pair = EntangledPair::new();
        assert!(!pair.is_measured());
        assert!(!pair.are_correlated());
        assert_eq!(pair.measurement_a(), None);
        assert_eq!(pair.measurement_b(), None);
        let total: f64
            = BellLabel::ALL.iter().map(|l| pair.probability(*l)).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(pair.amplitude(BellLabel::ZeroOne), 0.0);
        assert_eq!(pair.amplitude(BellLabel::OneZero), 0.0);
        assert_eq!(
            pair.to_string(),
            "00: 50.0%, 01: 0.0%, 10: 0.0%, 11: 50.0%",
        );
    }

    #[test]
    fn correlated_weight_is_certain() {
        let pair = EntangledPair::new();
        let prob0
            = pair.probability(BellLabel::ZeroZero)
            + pair.probability(BellLabel::OneOne);
        assert!(prob0 >= 1.0 - 1e-12);
    }

    #[test]
    fn measure_a_collapses_both() {
        let mut pair = EntangledPair::new();
        assert_eq!(pair.measure_a(&mut StepRng::new(u64::MAX, 0)), Outcome::Zero);
        assert!(pair.is_measured());
        assert!(pair.are_correlated());
        assert_eq!(pair.measurement_b(), Some(Outcome::Zero));
        assert_eq!(pair.amplitude(BellLabel::ZeroZero), 1.0);
        assert_eq!(pair.amplitude(BellLabel::OneOne), 0.0);
        assert_eq!(
            pair.to_string(),
            "00: 100.0%, 01: 0.0%, 10: 0.0%, 11: 0.0%",
        );
    }

    #[test]
    fn measure_b_collapses_both() {
        let mut pair = EntangledPair::new();
        assert_eq!(pair.measure_b(&mut StepRng::new(u64::MAX, 0)), Outcome::Zero);
        assert_eq!(pair.measurement_a(), Some(Outcome::Zero));
        assert_eq!(pair.amplitude(BellLabel::ZeroZero), 1.0);
        assert_eq!(pair.amplitude(BellLabel::OneOne), 0.0);
    }

    #[test]
    fn bell_measurement_draws_nothing() {
        for b_first in [false, true] {
            let mut rng = StdRng::seed_from_u64(10546);
            let mut untouched = rng.clone();
            let mut pair = EntangledPair::new();
            let outcome
                = if b_first {
                    pair.measure_b(&mut rng)
                } else {
                    pair.measure_a(&mut rng)
                };
            assert_eq!(outcome, Outcome::Zero);
            assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
        }
    }

    #[test]
    fn collapse_is_permanent_until_reset() {
        let mut pair = EntangledPair::with_amplitudes([0.0, 1.0, 0.0, 0.0]);
        let mut lo = StepRng::new(0, 0);
        let mut hi = StepRng::new(u64::MAX, 0);
        assert_eq!(pair.measure_b(&mut lo), Outcome::One);
        assert_eq!(pair.amplitude(BellLabel::OneOne), 1.0);
        assert_eq!(pair.measure_a(&mut lo), Outcome::One);
        assert_eq!(pair.measure_b(&mut hi), Outcome::One);
        pair.reset();
        assert!(!pair.is_measured());
        assert_eq!(pair, EntangledPair::new());
        assert_eq!(pair.measure_b(&mut hi), Outcome::Zero);
        assert_eq!(pair.measure_a(&mut lo), Outcome::Zero);
    }

    #[test]
    fn partial_weight_draws() {
        // correlated weight 0.36
        let table = [0.6, 0.8, 0.0, 0.0];
        let mut pair = EntangledPair::with_amplitudes(table);
        assert_eq!(pair.measure_a(&mut StepRng::new(0, 0)), Outcome::Zero);
        assert_eq!(pair.amplitude(BellLabel::ZeroZero), 1.0);
        let mut pair = EntangledPair::with_amplitudes(table);
        assert_eq!(pair.measure_a(&mut StepRng::new(u64::MAX, 0)), Outcome::One);
        assert_eq!(pair.measurement_b(), Some(Outcome::One));
        assert_eq!(pair.amplitude(BellLabel::OneOne), 1.0);
    }

    #[test]
    fn either_order_agrees() {
        let mut rng = StdRng::seed_from_u64(10546);
        let mut pair = EntangledPair::new();
        for k in 0..100 {
            pair.reset();
            let (a, b)
                = if k % 2 == 0 {
                    let a = pair.measure_a(&mut rng);
                    (a, pair.measure_b(&mut rng))
                } else {
                    let b = pair.measure_b(&mut rng);
                    (pair.measure_a(&mut rng), b)
                };
            assert_eq!((a, b), (Outcome::Zero, Outcome::Zero));
            assert!(pair.are_correlated());
        }
    }

    #[test]
    fn labels() {
        for l in BellLabel::ALL {
            assert_eq!(BellLabel::from_outcomes(l.a(), l.b()), l);
            assert_eq!(BellLabel::ALL[l.index()], l);
        }
        assert_eq!(BellLabel::ALL.iter().join(" "), "00 01 10 11");
    }
}
