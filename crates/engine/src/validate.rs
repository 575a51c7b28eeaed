//! Readiness gate run by front ends before calling [`estimate`](crate::estimate).
//!
//! The engine accepts any input; these checks only decide whether a front end
//! lets the user move on to the calculation.

use crate::{BrideProfile, EngineError, GroomProfile, ResultEngine};

/// Check both profiles are complete enough to calculate.
///
/// Requires a positive monthly income and a positive expected minimum, the
/// same fields the input stages insist on, and rejects negative or
/// non-finite amounts.
pub fn validate_profiles(groom: &GroomProfile, bride: &BrideProfile) -> ResultEngine<()> {
    ensure_amount("monthly income", groom.monthly_income)?;
    ensure_amount("savings", groom.savings)?;
    ensure_amount("monthly expenses", groom.monthly_expenses)?;
    ensure_amount("debt", groom.debt_amount)?;
    ensure_amount("expected minimum", bride.expected_min)?;
    ensure_amount("expected maximum", bride.expected_max)?;

    if groom.monthly_income <= 0.0 {
        return Err(EngineError::IncompleteProfile(
            "monthly income is required".to_string(),
        ));
    }
    if bride.expected_min <= 0.0 {
        return Err(EngineError::IncompleteProfile(
            "expected minimum is required".to_string(),
        ));
    }
    if bride.prompt_percentage > 100 {
        return Err(EngineError::InvalidAmount(format!(
            "prompt percentage must be between 0 and 100, got {}",
            bride.prompt_percentage
        )));
    }
    Ok(())
}

fn ensure_amount(label: &str, value: f64) -> ResultEngine<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidAmount(format!("{label} must be a number")));
    }
    if value < 0.0 {
        return Err(EngineError::InvalidAmount(format!("{label} must be >= 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> (GroomProfile, BrideProfile) {
        (
            GroomProfile {
                monthly_income: 5000.0,
                ..Default::default()
            },
            BrideProfile {
                expected_min: 5000.0,
                expected_max: 7000.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn accepts_complete_profiles() {
        let (groom, bride) = ready();
        assert_eq!(validate_profiles(&groom, &bride), Ok(()));
    }

    #[test]
    fn requires_income_and_expectation() {
        let (mut groom, bride) = ready();
        groom.monthly_income = 0.0;
        assert!(matches!(
            validate_profiles(&groom, &bride),
            Err(EngineError::IncompleteProfile(_))
        ));

        let (groom, mut bride) = ready();
        bride.expected_min = 0.0;
        assert!(matches!(
            validate_profiles(&groom, &bride),
            Err(EngineError::IncompleteProfile(_))
        ));
    }

    #[test]
    fn rejects_negative_and_nan_amounts() {
        let (mut groom, bride) = ready();
        groom.debt_amount = -1.0;
        assert_eq!(
            validate_profiles(&groom, &bride),
            Err(EngineError::InvalidAmount("debt must be >= 0".to_string()))
        );

        let (mut groom, bride) = ready();
        groom.savings = f64::NAN;
        assert!(validate_profiles(&groom, &bride).is_err());
    }

    #[test]
    fn rejects_percentage_over_100() {
        let (groom, mut bride) = ready();
        bride.prompt_percentage = 101;
        assert!(matches!(
            validate_profiles(&groom, &bride),
            Err(EngineError::InvalidAmount(_))
        ));
    }
}
