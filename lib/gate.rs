//! Single-qubit gates acting on real amplitude pairs.
//!
//! Only the three gates needed for the demos are provided. Each one is its own
//! inverse and maps real amplitudes to real amplitudes.

use std::fmt;
use nalgebra as na;
use rand::Rng;

/// Description of a single-qubit gate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Hadamard
    H,
    /// π rotation about X (bit flip)
    X,
    /// π rotation about Z (phase flip)
    Z,
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::H => write!(f, "H"),
            Self::X => write!(f, "X"),
            Self::Z => write!(f, "Z"),
        }
    }
}

impl Gate {
    /// Return `true` if `self` is `H`.
    pub fn is_h(&self) -> bool { matches!(self, Self::H) }

    /// Return `true` if `self` is `X`.
    pub fn is_x(&self) -> bool { matches!(self, Self::X) }

    /// Return `true` if `self` is `Z`.
    pub fn is_z(&self) -> bool { matches!(self, Self::Z) }

    /// Return the gate as a matrix acting on column vectors of ∣0⟩, ∣1⟩
    /// amplitudes.
    pub fn matrix(self) -> na::Matrix2<f64> {
        use std::f64::consts::FRAC_1_SQRT_2 as ORT2;
        match self {
            Self::H => na::Matrix2::new(ORT2,  ORT2,
                                        ORT2, -ORT2),
            Self::X => na::Matrix2::new(0.0, 1.0,
                                        1.0, 0.0),
            Self::Z => na::Matrix2::new(1.0,  0.0,
                                        0.0, -1.0),
        }
    }

    /// Sample one of the three gates uniformly.
    pub fn sample<R>(rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        match rng.gen_range(0..3_usize) {
            0 => Self::H,
            1 => Self::X,
            2 => Self::Z,
            _ => unreachable!(),
        }
    }
}
