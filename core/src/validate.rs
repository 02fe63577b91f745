//! The validation pipeline: structural gate, checksum stage, and the
//! public entry points.
//!
//! Validation logic lives exactly once, in [`validate`]. The raising
//! variant [`validate_or_fail`] and the boolean shorthand [`is_valid`]
//! are thin adapters over it.

use tracing::debug;

use crate::checksum;
use crate::normalize::normalize;

/// Why a code was rejected, assigned by the first stage that rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// No digits survived normalization.
    Empty,
    /// The normalized form is not exactly 10 digits.
    LengthOrNotDigits,
    /// All ten digits are identical, a known-invalid pattern.
    AllSameDigits,
    /// The trailing check digit does not match the weighted sum.
    Checksum,
    /// Digit extraction failed after the structural gate. Guards an
    /// internal invariant; unreachable through [`validate`].
    ChecksumError,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::Empty => "empty",
            FailureReason::LengthOrNotDigits => "length_or_not_digits",
            FailureReason::AllSameDigits => "all_same_digits",
            FailureReason::Checksum => "checksum",
            FailureReason::ChecksumError => "checksum_error",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Passed every stage; carries the normalized 10-digit code.
    Valid { code: String },
    /// Rejected; `normalized` is present whenever normalization
    /// produced at least one digit, so callers can inspect what was
    /// parsed out of malformed input.
    Invalid {
        reason: FailureReason,
        normalized: Option<String>,
    },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            Verdict::Valid { .. } => None,
            Verdict::Invalid { reason, .. } => Some(*reason),
        }
    }

    pub fn normalized(&self) -> Option<&str> {
        match self {
            Verdict::Valid { code } => Some(code),
            Verdict::Invalid { normalized, .. } => normalized.as_deref(),
        }
    }
}

/// Error returned by [`validate_or_fail`] for rejected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid national id: reason={reason}, normalized={}", .normalized.as_deref().unwrap_or(""))]
pub struct InvalidNationalId {
    pub reason: FailureReason,
    pub normalized: Option<String>,
}

/// Runs the full pipeline: normalization, structural gate, checksum.
///
/// Never panics and never errors, for any input including absent,
/// empty, or arbitrarily malformed text. Returns the first failure or
/// success once all three stages pass.
pub fn validate(input: Option<&str>) -> Verdict {
    let normalized = normalize(input);

    if normalized.is_empty() {
        return Verdict::Invalid {
            reason: FailureReason::Empty,
            normalized: None,
        };
    }

    if normalized.len() != 10 || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        debug!(%normalized, "structural gate: not exactly 10 digits");
        return Verdict::Invalid {
            reason: FailureReason::LengthOrNotDigits,
            normalized: Some(normalized),
        };
    }

    if is_repeated_digit(&normalized) {
        debug!(%normalized, "structural gate: repeated-digit pattern");
        return Verdict::Invalid {
            reason: FailureReason::AllSameDigits,
            normalized: Some(normalized),
        };
    }

    match checksum::verify(&normalized) {
        Some(true) => Verdict::Valid { code: normalized },
        Some(false) => Verdict::Invalid {
            reason: FailureReason::Checksum,
            normalized: Some(normalized),
        },
        None => Verdict::Invalid {
            reason: FailureReason::ChecksumError,
            normalized: Some(normalized),
        },
    }
}

/// Like [`validate`], but surfaces rejection as an error carrying the
/// reason and the (possibly partial) normalized code.
pub fn validate_or_fail(input: Option<&str>) -> Result<String, InvalidNationalId> {
    match validate(input) {
        Verdict::Valid { code } => Ok(code),
        Verdict::Invalid { reason, normalized } => Err(InvalidNationalId { reason, normalized }),
    }
}

/// Success flag only, for use directly in conditionals.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// Matches the ten known-invalid strings "0000000000" ... "9999999999".
fn is_repeated_digit(code: &str) -> bool {
    let mut bytes = code.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    bytes.all(|b| b == first)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
