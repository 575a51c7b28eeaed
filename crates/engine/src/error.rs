//! The module contains the errors the engine can return.
//!
//! [`estimate`] itself never fails; these errors come from parsing user
//! input into the profile types and from the readiness gate the front end
//! runs before calculating:
//!
//! - [`UnsupportedCurrency`] for a currency code outside the supported list.
//! - [`InvalidCategory`] for an unknown tier, stability or payment code.
//! - [`IncompleteProfile`] when a required field is still empty.
//! - [`InvalidAmount`] for negative or non-finite amounts.
//!
//!  [`estimate`]: crate::estimate
//!  [`UnsupportedCurrency`]: EngineError::UnsupportedCurrency
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`IncompleteProfile`]: EngineError::IncompleteProfile
//!  [`InvalidAmount`]: EngineError::InvalidAmount
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Invalid {kind}: \"{value}\"")]
    InvalidCategory { kind: &'static str, value: String },
    #[error("Incomplete profile: {0}")]
    IncompleteProfile(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
