//! # Codemelli Core
//!
//! Validation and normalization of Iranian national ID codes (کد ملی):
//! 10-digit codes whose last digit is a weighted-sum check digit.
//!
//! The pipeline runs three stages, each able to short-circuit with its
//! own failure reason:
//!
//! * **[`normalize`]**: maps Persian/Arabic digit glyphs to latin
//!   digits and strips everything that is not a digit.
//! * **Structural gate**: exactly 10 digits, not a repeated-digit
//!   pattern.
//! * **[`checksum`]**: weighted-sum verification of the trailing
//!   check digit.
//!
//! All entry points are pure functions over in-memory text; there is
//! no shared state and every call is safe to make from any thread.

pub mod checksum;
pub mod normalize;
pub mod validate;

pub use normalize::normalize;
pub use validate::{FailureReason, InvalidNationalId, Verdict, is_valid, validate, validate_or_fail};
