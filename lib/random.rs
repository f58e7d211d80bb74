//! Random bits, bounded integers, and passwords from simulated measurements.
//!
//! Each bit stands in for a Z-basis measurement of a qubit in ∣+⟩, i.e. a fair
//! coin drawn from the supplied random source. Nothing here is
//! cryptographically sound: [`generate_number`] reduces packed bits modulo the
//! range size, which slightly favors small values when the range is not a power
//! of two.

use itertools::Itertools;
use rand::Rng;
use tracing::debug;
use crate::error::{ DemoError, Result };

/// Characters available to [`generate_password`].
pub const ALPHABET: &str
    = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Default number of bits drawn by [`generate_bits`].
pub const DEFAULT_BIT_COUNT: usize = 8;

/// Default lower bound for [`generate_number`].
pub const DEFAULT_MIN: i64 = 0;

/// Default upper bound for [`generate_number`].
pub const DEFAULT_MAX: i64 = 100;

/// Default length for [`generate_password`].
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Draw `count` independent fair bits, each `0` or `1`.
pub fn generate_bits<R>(count: usize, rng: &mut R) -> Vec<u8>
where R: Rng + ?Sized
{
    (0..count)
        .map(|_| if rng.gen::<f64>() < 0.5 { 0 } else { 1 })
        .collect()
}

/// Pack bits into an integer, most significant bit first.
///
/// Bits must be `0` or `1`; larger values are truncated to their lowest bit
/// (and rejected in debug builds). Only the last 128 bits contribute.
pub fn pack_bits(bits: &[u8]) -> u128 {
    bits.iter()
        .fold(0, |acc, b| {
            debug_assert!(*b <= 1, "bit value {} is not 0 or 1", b);
            (acc << 1) | u128::from(b & 1)
        })
}

/// Render bits as a string of `0`s and `1`s.
pub fn bits_to_string(bits: &[u8]) -> String { bits.iter().join("") }

/// Number of bits needed to index `range` values, ⌈log₂ `range`⌉.
fn bits_needed(range: u128) -> usize {
    if range <= 1 { 0 } else { (u128::BITS - (range - 1).leading_zeros()) as usize }
}

/// Draw an integer in `min..=max`.
///
/// Twice as many bits as needed to cover the range are drawn; the first half
/// is packed into an integer and reduced modulo the range size.
///
/// Fails if `max < min`.
pub fn generate_number<R>(min: i64, max: i64, rng: &mut R) -> Result<i64>
where R: Rng + ?Sized
{
    if max < min {
        return Err(DemoError::invalid_argument(
            "max",
            format!("{} is less than min {}", max, min),
        ));
    }
    let range = (i128::from(max) - i128::from(min) + 1) as u128;
    let n = bits_needed(range);
    let bits = generate_bits(2 * n, rng);
    let value = pack_bits(&bits[..n]) % range;
    // value < range, so the sum lies in min..=max
    Ok((i128::from(min) + value as i128) as i64)
}

/// Draw a password of `length` characters from [`ALPHABET`].
///
/// Fails if `length` is zero.
pub fn generate_password<R>(length: usize, rng: &mut R) -> Result<String>
where R: Rng + ?Sized
{
    if length == 0 {
        return Err(DemoError::invalid_argument("length", "must be at least 1"));
    }
    let chars = ALPHABET.as_bytes();
    let top = chars.len() as i64 - 1;
    let password
        = (0..length)
        .map(|_| {
            generate_number(0, top, rng)
                .map(|k| char::from(chars[k as usize]))
        })
        .collect::<Result<String>>()?;
    debug!(length, "generated password");
    Ok(password)
}
