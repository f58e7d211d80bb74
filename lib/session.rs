//! Driver bundling one of each component with its own random source, for use
//! by a single front-end session.
//!
//! A [`Session`] is not meant to be shared: each UI widget or request should
//! own its own. Two sessions built from the same seeded [`SessionConfig`] and
//! driven by the same calls produce identical results.

use rand::{ rngs::StdRng, SeedableRng };
use tracing::debug;
use crate::{
    error::{ DemoError, Result },
    gate::Gate,
    grover::{ self, GroverSearch, SearchComparison },
    pair::EntangledPair,
    qubit::{ Outcome, SingleQubit },
    random,
};

/// Parameters for a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the session's random source; drawn from system entropy if
    /// `None`.
    pub seed: Option<u64>,
    /// Number of items in the search demo.
    pub grover_size: usize,
    /// Number of bits drawn by [`Session::random_bits`].
    pub bit_count: usize,
    /// Lower bound for [`Session::random_number`].
    pub number_min: i64,
    /// Upper bound for [`Session::random_number`].
    pub number_max: i64,
    /// Length of passwords drawn by [`Session::password`].
    pub password_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            grover_size: grover::DEFAULT_SIZE,
            bit_count: random::DEFAULT_BIT_COUNT,
            number_min: random::DEFAULT_MIN,
            number_max: random::DEFAULT_MAX,
            password_length: random::DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl SessionConfig {
    /// Check that every parameter would produce non-degenerate output.
    pub fn validate(&self) -> Result<()> {
        if self.grover_size == 0 {
            return Err(DemoError::invalid_argument(
                "grover_size", "must be at least 1"));
        }
        if self.number_max < self.number_min {
            return Err(DemoError::invalid_argument(
                "number_max",
                format!(
                    "{} is less than number_min {}",
                    self.number_max, self.number_min,
                ),
            ));
        }
        if self.password_length == 0 {
            return Err(DemoError::invalid_argument(
                "password_length", "must be at least 1"));
        }
        Ok(())
    }
}

/// One front-end session's worth of demo state.
#[derive(Clone, Debug)]
pub struct Session {
    /// Parameters the session was built with.
    pub config: SessionConfig,
    /// Qubit for the single-qubit demo.
    pub qubit: SingleQubit,
    /// Bell pair for the entanglement demo.
    pub pair: EntangledPair,
    /// Search problem for the Grover demo.
    pub search: GroverSearch,
    /// Random source shared by every operation of this session.
    pub rng: StdRng,
}

impl Session {
    /// Create a new session with a fresh qubit in ∣0⟩, an unmeasured Bell
    /// pair, and a search with a random target.
    ///
    /// Fails if `config` does not pass [`SessionConfig::validate`].
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let mut rng
            = config.seed.map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        let search = GroverSearch::new(config.grover_size, &mut rng)?;
        debug!(?config, "new session");
        Ok(Self {
            config,
            qubit: SingleQubit::new(),
            pair: EntangledPair::new(),
            search,
            rng,
        })
    }

    /// Apply a gate to the qubit.
    pub fn apply_gate(&mut self, gate: Gate) -> &SingleQubit {
        self.qubit.apply_gate(gate)
    }

    /// Apply a uniformly sampled gate to the qubit, returning the gate.
    pub fn apply_random_gate(&mut self) -> Gate {
        let gate = Gate::sample(&mut self.rng);
        self.qubit.apply_gate(gate);
        gate
    }

    /// Measure the qubit.
    pub fn measure_qubit(&mut self) -> Outcome {
        self.qubit.measure(&mut self.rng)
    }

    /// Return the qubit to ∣0⟩.
    pub fn reset_qubit(&mut self) -> &SingleQubit { self.qubit.reset() }

    /// Measure member A of the Bell pair.
    pub fn measure_a(&mut self) -> Outcome {
        self.pair.measure_a(&mut self.rng)
    }

    /// Measure member B of the Bell pair.
    pub fn measure_b(&mut self) -> Outcome {
        self.pair.measure_b(&mut self.rng)
    }

    /// Restore the Bell pair.
    pub fn reset_pair(&mut self) -> &EntangledPair { self.pair.reset() }

    /// Run both searches against the current target.
    pub fn run_search(&mut self) -> SearchComparison { self.search.compare() }

    /// Hide a new target, returning it.
    pub fn new_target(&mut self) -> usize {
        self.search.set_new_target(&mut self.rng).target()
    }

    /// Draw `config.bit_count` random bits.
    pub fn random_bits(&mut self) -> Vec<u8> {
        random::generate_bits(self.config.bit_count, &mut self.rng)
    }

    /// Draw a random number in `config.number_min..=config.number_max`.
    pub fn random_number(&mut self) -> Result<i64> {
        random::generate_number(
            self.config.number_min, self.config.number_max, &mut self.rng)
    }

    /// Draw a password of `config.password_length` characters.
    pub fn password(&mut self) -> Result<String> {
        random::generate_password(self.config.password_length, &mut self.rng)
    }
}
