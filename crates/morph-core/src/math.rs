//! Number-theory and statistics helpers.
//!
//! Integer helpers take integer types, so the "must be a number" validation
//! of a dynamic host lives in the signatures; what remains as a runtime error
//! is checked arithmetic ([`crate::MorphError::Overflow`]) and the non-empty
//! requirement of the statistics functions.

use std::collections::HashMap;

use crate::error::{MorphError, Result};

fn empty_array_error() -> MorphError {
    MorphError::invalid_input("array").with_reason("must be a non-empty array")
}

/// Calculates the greatest common divisor of two numbers.
///
/// Zero as either argument yields zero.
///
/// # Examples
///
/// ```rust
/// use morph_core::math::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 13), 1);
/// assert_eq!(gcd(0, 5), 0);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.abs()
}

/// Calculates the least common multiple of two numbers.
///
/// Zero as either argument yields zero.
///
/// # Errors
///
/// Returns [`MorphError::Overflow`] when the result does not fit in `i64`.
pub fn lcm(a: i64, b: i64) -> Result<i64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .map(i64::abs)
        .ok_or(MorphError::Overflow { operation: "lcm" })
}

/// Checks whether a number is prime by 6k±1 trial division.
///
/// # Examples
///
/// ```rust
/// use morph_core::math::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(121));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Calculates the factorial of a number.
///
/// # Errors
///
/// Returns [`MorphError::Overflow`] when the result does not fit in `u128`
/// (first at `35!`).
pub fn factorial(n: u64) -> Result<u128> {
    let mut result: u128 = 1;
    for i in 2..=u128::from(n) {
        result = result
            .checked_mul(i)
            .ok_or(MorphError::Overflow { operation: "factorial" })?;
    }
    Ok(result)
}

/// Calculates the nth Fibonacci number (`fibonacci(0) == 0`).
///
/// # Errors
///
/// Returns [`MorphError::Overflow`] when the result does not fit in `u128`.
pub fn fibonacci(n: u32) -> Result<u128> {
    let (mut previous, mut current): (u128, u128) = (0, 1);
    for _ in 0..n {
        let next = previous
            .checked_add(current)
            .ok_or(MorphError::Overflow { operation: "fibonacci" })?;
        previous = current;
        current = next;
    }
    Ok(previous)
}

/// Calculates the mean of a slice of numbers.
///
/// # Errors
///
/// Returns [`MorphError::InvalidInput`] for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(empty_array_error());
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Calculates the median of a slice of numbers.
///
/// # Errors
///
/// Returns [`MorphError::InvalidInput`] for an empty slice.
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(empty_array_error());
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Ok(sorted[middle])
    }
}

/// Calculates the mode(s) of a slice of numbers, ascending.
///
/// Every value tied for the highest frequency is returned.
///
/// # Errors
///
/// Returns [`MorphError::InvalidInput`] for an empty slice.
pub fn mode(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(empty_array_error());
    }
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    for &value in values {
        *frequency.entry(value.to_bits()).or_insert(0) += 1;
    }
    let highest = frequency.values().copied().max().unwrap_or(0);
    let mut modes: Vec<f64> = frequency
        .iter()
        .filter(|(_, &count)| count == highest)
        .map(|(&bits, _)| f64::from_bits(bits))
        .collect();
    modes.sort_by(f64::total_cmp);
    Ok(modes)
}

/// Calculates the population standard deviation, rounded to four decimal
/// places.
///
/// # Errors
///
/// Returns [`MorphError::InvalidInput`] for an empty slice.
pub fn standard_deviation(values: &[f64]) -> Result<f64> {
    let average = mean(values)?;
    let square_diffs: Vec<f64> = values
        .iter()
        .map(|value| (value - average).powi(2))
        .collect();
    Ok(round_to(mean(&square_diffs)?.sqrt(), 4))
}

/// Calculates the difference between the largest and smallest value.
///
/// # Errors
///
/// Returns [`MorphError::InvalidInput`] for an empty slice.
pub fn range(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(empty_array_error());
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(max - min)
}

/// Rounds a number to the given number of decimal places.
///
/// Negative `decimal_places` rounds to the left of the decimal point.
///
/// # Examples
///
/// ```rust
/// use morph_core::math::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(1234.5, -2), 1200.0);
/// ```
pub fn round_to(value: f64, decimal_places: i32) -> f64 {
    let factor = 10f64.powi(decimal_places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_cases() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(5, 7), 1);
        assert_eq!(gcd(0, 9), 0);
        assert_eq!(gcd(9, 0), 0);
        assert_eq!(gcd(-4, 6), 2);
    }

    #[test]
    fn lcm_cases() {
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(0, 6).unwrap(), 0);
        assert_eq!(lcm(-3, 5).unwrap(), 15);
        assert!(lcm(i64::MAX, i64::MAX - 1).is_err());
    }

    #[test]
    fn prime_checks() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(25));
        assert!(!is_prime(121)); // 11 * 11
        assert!(is_prime(7919));
    }

    #[test]
    fn factorial_cases() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(34).unwrap(), 295232799039604140847618609643520000000);
        assert!(factorial(35).is_err());
    }

    #[test]
    fn fibonacci_cases() {
        assert_eq!(fibonacci(0).unwrap(), 0);
        assert_eq!(fibonacci(1).unwrap(), 1);
        assert_eq!(fibonacci(10).unwrap(), 55);
        assert_eq!(fibonacci(50).unwrap(), 12586269025);
    }

    #[test]
    fn statistics() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]).unwrap(), vec![2.0]);
        assert_eq!(mode(&[3.0, 1.0, 3.0, 1.0]).unwrap(), vec![1.0, 3.0]);
        assert_eq!(range(&[5.0, 1.0, 9.0]).unwrap(), 8.0);
        // Population standard deviation of 2,4,4,4,5,5,7,9 is exactly 2.
        assert_eq!(
            standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(),
            2.0
        );
    }

    #[test]
    fn statistics_reject_empty_input() {
        assert!(mean(&[]).is_err());
        assert!(median(&[]).is_err());
        assert!(mode(&[]).is_err());
        assert!(standard_deviation(&[]).is_err());
        assert!(range(&[]).is_err());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-1.005, 1), -1.0);
        assert_eq!(round_to(1234.5, -2), 1200.0);
    }
}
