//! Check-digit verification for 10-digit national ID codes.
//!
//! The standard scheme: weight the first 9 digits with 10 down to 2,
//! take the sum modulo 11, and expect the remainder itself when it is
//! below 2, otherwise 11 minus the remainder.

/// Computes the expected check digit from the first 9 digits.
pub(crate) fn expected_check_digit(prefix: &[u32]) -> u32 {
    let sum: u32 = prefix.iter().zip((2u32..=10).rev()).map(|(d, w)| d * w).sum();
    let r = sum % 11;
    if r < 2 { r } else { 11 - r }
}

/// Verifies the trailing check digit of a 10-digit code.
///
/// Returns `None` when a digit cannot be extracted or the length is
/// off. The structural gate already guarantees 10 latin digits, so
/// that branch guards an internal invariant rather than any reachable
/// user path.
pub(crate) fn verify(code: &str) -> Option<bool> {
    let digits: Vec<u32> = code
        .chars()
        .map(|ch| ch.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;

    if digits.len() != 10 {
        return None;
    }

    Some(digits[9] == expected_check_digit(&digits[..9]))
}
