//! Comparison of classical linear search against Grover's algorithm.
//!
//! A list of `size` items hides one target index. The classical search checks
//! indices in order and counts how many checks it took. The quantum search
//! does **not** simulate amplitude amplification: it records the theoretical
//! number of Grover iterations, ⌈√`size`⌉, after which the target is found
//! with probability ≈ 1, and returns the target directly.

use std::fmt;
use rand::Rng;
use tracing::{ debug, trace };
use crate::error::{ DemoError, Result };

/// Number of items searched when no size is given.
pub const DEFAULT_SIZE: usize = 8;

/// Return ⌈√`size`⌉, the number of Grover iterations needed to search `size`
/// items.
pub fn grover_iterations(size: usize) -> usize {
    let mut s = (size as f64).sqrt() as usize;
    while s.checked_mul(s).map_or(true, |sq| sq > size) { s -= 1; }
    while (s + 1).checked_mul(s + 1).map_or(false, |sq| sq <= size) { s += 1; }
    if s * s == size { s } else { s + 1 }
}

/// A search problem over `size` items with a single hidden target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroverSearch {
    size: usize,
    target: usize,
    classical_attempts: usize,
    quantum_attempts: usize,
}

impl GroverSearch {
    /// Create a new search over `size` items with a uniformly random target.
    ///
    /// Fails if `size` is zero.
    pub fn new<R>(size: usize, rng: &mut R) -> Result<Self>
    where R: Rng + ?Sized
    {
        Self::check_size(size)?;
        let target = rng.gen_range(0..size);
        debug!(size, target, "new search");
        Ok(Self { size, target, classical_attempts: 0, quantum_attempts: 0 })
    }

    /// Create a new search over `size` items with a fixed target.
    ///
    /// Fails if `size` is zero or `target` is not less than `size`.
    pub fn with_target(size: usize, target: usize) -> Result<Self> {
        Self::check_size(size)?;
        if target >= size {
            return Err(DemoError::invalid_argument(
                "target",
                format!("{} is out of range for {} items", target, size),
            ));
        }
        Ok(Self { size, target, classical_attempts: 0, quantum_attempts: 0 })
    }

    fn check_size(size: usize) -> Result<()> {
        if size == 0 {
            Err(DemoError::invalid_argument("size", "must be at least 1"))
        } else {
            Ok(())
        }
    }

    /// Return the number of items.
    pub fn size(&self) -> usize { self.size }

    /// Return the hidden target index.
    pub fn target(&self) -> usize { self.target }

    /// Return the number of checks made by the most recent classical search.
    pub fn classical_attempts(&self) -> usize { self.classical_attempts }

    /// Return the number of iterations recorded by the most recent quantum
    /// search.
    pub fn quantum_attempts(&self) -> usize { self.quantum_attempts }

    /// Check each index in order until the target is found, counting checks.
    ///
    /// Returns `None` only if the target were out of range, which construction
    /// rules out.
    pub fn classical_search(&mut self) -> Option<usize> {
        self.classical_attempts = 0;
        for k in 0..self.size {
            self.classical_attempts += 1;
            trace!(k, "classical check");
            if k == self.target {
                debug!(attempts = self.classical_attempts, "classical search");
                return Some(k);
            }
        }
        None
    }

    /// Record ⌈√`size`⌉ Grover iterations and return the target.
    pub fn quantum_search(&mut self) -> usize {
        self.quantum_attempts = grover_iterations(self.size);
        debug!(attempts = self.quantum_attempts, "quantum search");
        self.target
    }

    /// Draw a new uniformly random target and clear both attempt counts.
    pub fn set_new_target<R>(&mut self, rng: &mut R) -> &mut Self
    where R: Rng + ?Sized
    {
        self.target = rng.gen_range(0..self.size);
        self.classical_attempts = 0;
        self.quantum_attempts = 0;
        debug!(target = self.target, "new target");
        self
    }

    /// Run both searches and summarize them.
    pub fn compare(&mut self) -> SearchComparison {
        let classical = self.classical_search();
        let quantum = self.quantum_search();
        debug_assert_eq!(classical, Some(quantum));
        SearchComparison {
            size: self.size,
            target: quantum,
            classical_attempts: self.classical_attempts,
            quantum_attempts: self.quantum_attempts,
        }
    }
}

/// Side-by-side result of [`GroverSearch::compare`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchComparison {
    /// Number of items searched.
    pub size: usize,
    /// Index found by both searches.
    pub target: usize,
    /// Checks made by the linear scan.
    pub classical_attempts: usize,
    /// Grover iterations, ⌈√`size`⌉.
    pub quantum_attempts: usize,
}

impl SearchComparison {
    /// Ratio of classical checks to quantum iterations.
    pub fn speedup(&self) -> f64 {
        self.classical_attempts as f64 / self.quantum_attempts as f64
    }
}

impl fmt::Display for SearchComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found item {} of {}: classical {} checks, quantum {} iterations",
            self.target, self.size, self.classical_attempts, self.quantum_attempts,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{ rngs::StdRng, SeedableRng };

    #[test]
    fn iterations() {
        let expected: [(usize, usize); 10]
            = [
                (0, 0), (1, 1), (2, 2), (3, 2), (4, 2),
                (8, 3), (9, 3), (10, 4), (100, 10), (101, 11),
            ];
        for (n, it) in expected {
            assert_eq!(grover_iterations(n), it, "n = {}", n);
        }
        assert_eq!(grover_iterations(usize::MAX), 1 << (usize::BITS / 2));
    }

    #[test]
    fn fixed_target_example() {
        let mut search = GroverSearch::with_target(8, 5).unwrap();
        assert_eq!(search.classical_search(), Some(5));
        assert_eq!(search.classical_attempts(), 6);
        assert_eq!(search.quantum_search(), 5);
        assert_eq!(search.quantum_attempts(), 3);
    }

    #[test]
    fn classical_attempts_in_range() {
        let mut rng = StdRng::seed_from_u64(10546);
        let mut search = GroverSearch::new(DEFAULT_SIZE, &mut rng).unwrap();
        for _ in 0..100 {
            let target = search.target();
            assert!(target < 8);
            assert_eq!(search.classical_search(), Some(target));
            assert!((1..=8).contains(&search.classical_attempts()));
            assert_eq!(search.classical_attempts(), target + 1);
            assert_eq!(search.quantum_search(), target);
            assert_eq!(search.quantum_attempts(), 3);
            search.set_new_target(&mut rng);
        }
    }

    #[test]
    fn new_target_clears_counts() {
        let mut rng = StdRng::seed_from_u64(10546);
        let mut search = GroverSearch::with_target(16, 15).unwrap();
        search.compare();
        assert_eq!(search.classical_attempts(), 16);
        assert_eq!(search.quantum_attempts(), 4);
        search.set_new_target(&mut rng);
        assert_eq!(search.classical_attempts(), 0);
        assert_eq!(search.quantum_attempts(), 0);
        assert!(search.target() < 16);
    }

    #[test]
    fn targets_are_spread() {
        let mut rng = StdRng::seed_from_u64(10546);
        let mut search = GroverSearch::new(4, &mut rng).unwrap();
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[search.set_new_target(&mut rng).target()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn single_item() {
        let mut rng = StdRng::seed_from_u64(10546);
        let mut search = GroverSearch::new(1, &mut rng).unwrap();
        let cmp = search.compare();
        assert_eq!(cmp.target, 0);
        assert_eq!((cmp.classical_attempts, cmp.quantum_attempts), (1, 1));
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut rng = StdRng::seed_from_u64(10546);
        assert!(matches!(
            GroverSearch::new(0, &mut rng),
            Err(DemoError::InvalidArgument { name: "size", .. }),
        ));
        assert!(matches!(
            GroverSearch::with_target(8, 8),
            Err(DemoError::InvalidArgument { name: "target", .. }),
        ));
    }

    #[test]
    fn comparison_summary() {
        let mut search = GroverSearch::with_target(8, 5).unwrap();
        let cmp = search.compare();
        assert_eq!(cmp.speedup(), 2.0);
        assert_eq!(
            cmp.to_string(),
            "found item 5 of 8: classical 6 checks, quantum 3 iterations",
        );
    }
}
