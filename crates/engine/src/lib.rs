//! Mahr estimation engine.
//!
//! The engine is a single pure computation: [`estimate`] turns a
//! [`GroomProfile`] and a [`BrideProfile`] into a [`CalculationResult`] with
//! three headline amounts, the prompt/deferred split and a [`Breakdown`] of
//! every intermediate value. It holds no state and performs no I/O.
//!
//! The remaining items support front ends: category enums with their labels,
//! [`Currency`] formatting and the [`validate_profiles`] readiness gate.

pub use currency::{Currency, format_amount};
pub use error::EngineError;
pub use estimate::{
    Breakdown, CONSERVATIVE_RATIO, CalculationResult, EXPECTATION_WEIGHT, FORMULA_WEIGHT,
    GENEROUS_RATIO, PaymentSplit, SplitSlice, city_multiplier, debt_penalty, estimate,
    financial_adjustment, preference_factor, savings_bonus, split_payment,
};
pub use profile::{
    BridePreference, BrideProfile, CityTier, GroomProfile, JobStability, PaymentStructure,
};
pub use validate::validate_profiles;

mod currency;
mod error;
mod estimate;
mod profile;
mod validate;

pub type ResultEngine<T> = Result<T, EngineError>;
