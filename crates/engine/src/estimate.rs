//! The estimation formula.
//!
//! [`estimate`] maps a [`GroomProfile`] and a [`BrideProfile`] to a
//! [`CalculationResult`] in a fixed sequence of steps:
//!
//! 1. preference factor from the bride's preference;
//! 2. `base = monthly income × factor`;
//! 3. cost-of-living multiplier from the city tier;
//! 4. financial-health adjustment from savings and debt brackets;
//! 5. 70/30 blend with the midpoint of the expected range;
//! 6. floor at zero;
//! 7. conservative / fair / generous tiers;
//! 8. prompt/deferred split of the fair amount.
//!
//! Every intermediate value is kept in a [`Breakdown`] so the detailed view
//! can show how the fair amount was reached.
//!
//! Rounding uses [`f64::round`] (half away from zero). All rounded values are
//! non-negative, so this is round-half-up.
use serde::{Deserialize, Serialize};

use crate::{BridePreference, BrideProfile, CityTier, GroomProfile, PaymentStructure};

/// Weight of the formula-driven amount in the alignment blend.
pub const FORMULA_WEIGHT: f64 = 0.7;
/// Weight of the bride's average expectation in the alignment blend.
pub const EXPECTATION_WEIGHT: f64 = 0.3;
/// Multiplier of the conservative tier.
pub const CONSERVATIVE_RATIO: f64 = 0.8;
/// Multiplier of the generous tier.
pub const GENEROUS_RATIO: f64 = 1.3;

/// Savings and debt thresholds, expressed in months of income.
const HIGH_BRACKET_MONTHS: f64 = 6.0;
const LOW_BRACKET_MONTHS: f64 = 3.0;

const HIGH_SAVINGS_BONUS: f64 = 0.20;
const LOW_SAVINGS_BONUS: f64 = 0.10;
const HIGH_DEBT_PENALTY: f64 = -0.25;
const LOW_DEBT_PENALTY: f64 = -0.10;

/// Every intermediate quantity used to derive the fair amount.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub income: f64,
    pub preference_factor: f64,
    /// Income times preference factor, before any adjustment.
    pub base: f64,
    /// City multiplier that was applied.
    pub city_adjustment: f64,
    /// Signed fraction, e.g. `0.2` or `-0.15`.
    pub financial_adjustment: f64,
    pub adjusted_before_alignment: f64,
    pub average_expectation: f64,
    /// Aligned amount after the zero floor, before rounding.
    pub final_aligned: f64,
}

impl Breakdown {
    /// Share of the aligned amount contributed by the formula (70%).
    #[must_use]
    pub fn weighted_formula(&self) -> f64 {
        self.adjusted_before_alignment * FORMULA_WEIGHT
    }

    /// Share of the aligned amount contributed by the expectation (30%).
    #[must_use]
    pub fn weighted_expectation(&self) -> f64 {
        self.average_expectation * EXPECTATION_WEIGHT
    }
}

/// Outcome of one calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub conservative: i64,
    /// Canonical central estimate.
    pub fair: i64,
    pub generous: i64,
    pub breakdown: Breakdown,
    pub prompt_amount: i64,
    pub deferred_amount: i64,
}

impl CalculationResult {
    /// The fair amount split into its prompt and deferred portions.
    #[must_use]
    pub fn payment_split(&self) -> PaymentSplit {
        PaymentSplit {
            prompt: self.prompt_amount,
            deferred: self.deferred_amount,
        }
    }
}

/// Prompt and deferred portions of the fair amount. They always sum to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentSplit {
    pub prompt: i64,
    pub deferred: i64,
}

/// One slice of the payment chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitSlice {
    pub label: &'static str,
    pub amount: i64,
    /// Percentage of the total, in `0.0..=100.0`.
    pub share: f64,
}

impl PaymentSplit {
    #[must_use]
    pub fn total(&self) -> i64 {
        self.prompt + self.deferred
    }

    /// Non-empty chart slices; empty when there is nothing to pay.
    #[must_use]
    pub fn slices(&self) -> Vec<SplitSlice> {
        let total = self.total();
        if total <= 0 {
            return Vec::new();
        }
        [("Prompt", self.prompt), ("Deferred", self.deferred)]
            .into_iter()
            .filter(|(_, amount)| *amount > 0)
            .map(|(label, amount)| SplitSlice {
                label,
                amount,
                share: amount as f64 * 100.0 / total as f64,
            })
            .collect()
    }
}

/// Multiplier selected by the bride's preference.
#[must_use]
pub const fn preference_factor(preference: BridePreference) -> f64 {
    match preference {
        BridePreference::Sunnah => 0.5,
        BridePreference::Balanced => 1.5,
        BridePreference::Generous => 3.0,
    }
}

/// Cost-of-living multiplier of a city tier.
#[must_use]
pub const fn city_multiplier(tier: CityTier) -> f64 {
    match tier {
        CityTier::Tier1 => 1.4,
        CityTier::Tier2 => 1.0,
        CityTier::Tier3 => 0.8,
    }
}

/// Savings bonus: the 6-month bracket wins over the 3-month one.
#[must_use]
pub fn savings_bonus(savings: f64, monthly_income: f64) -> f64 {
    if savings >= HIGH_BRACKET_MONTHS * monthly_income {
        HIGH_SAVINGS_BONUS
    } else if savings >= LOW_BRACKET_MONTHS * monthly_income {
        LOW_SAVINGS_BONUS
    } else {
        0.0
    }
}

/// Debt penalty (negative): the 6-month bracket wins over the 3-month one.
#[must_use]
pub fn debt_penalty(debt: f64, monthly_income: f64) -> f64 {
    if debt >= HIGH_BRACKET_MONTHS * monthly_income {
        HIGH_DEBT_PENALTY
    } else if debt >= LOW_BRACKET_MONTHS * monthly_income {
        LOW_DEBT_PENALTY
    } else {
        0.0
    }
}

/// Signed financial-health adjustment.
///
/// The savings bonus and the debt penalty are independent and add up, so a
/// groom with large savings and large debt gets both (`0.20 - 0.25`).
#[must_use]
pub fn financial_adjustment(groom: &GroomProfile) -> f64 {
    savings_bonus(groom.savings, groom.monthly_income)
        + debt_penalty(groom.debt_amount, groom.monthly_income)
}

/// Splits `fair` according to the payment structure.
///
/// For [`PaymentStructure::Split`] the prompt part is rounded and the deferred
/// part is the remainder, so both always add up to `fair`. Percentages above
/// 100 are clamped.
#[must_use]
pub fn split_payment(fair: i64, payment: PaymentStructure, prompt_percentage: u8) -> PaymentSplit {
    match payment {
        PaymentStructure::Prompt => PaymentSplit {
            prompt: fair,
            deferred: 0,
        },
        PaymentStructure::Deferred => PaymentSplit {
            prompt: 0,
            deferred: fair,
        },
        PaymentStructure::Split => {
            let percentage = f64::from(prompt_percentage.min(100));
            let prompt = (fair as f64 * percentage / 100.0).round() as i64;
            PaymentSplit {
                prompt,
                deferred: fair - prompt,
            }
        }
    }
}

/// Computes the recommended Mahr range.
///
/// Pure and total: degenerate input (e.g. zero income) yields zero amounts,
/// never an error.
///
/// ```rust
/// use engine::{BrideProfile, GroomProfile, estimate};
///
/// let groom = GroomProfile { monthly_income: 5000.0, ..Default::default() };
/// let bride = BrideProfile { expected_min: 5000.0, expected_max: 7000.0, ..Default::default() };
///
/// let result = estimate(&groom, &bride);
/// assert_eq!(result.fair, 7050);
/// assert_eq!(result.conservative, 5640);
/// assert_eq!(result.generous, 9165);
/// ```
#[must_use]
pub fn estimate(groom: &GroomProfile, bride: &BrideProfile) -> CalculationResult {
    let factor = preference_factor(bride.preference);
    let base = groom.monthly_income * factor;

    let city = city_multiplier(groom.city_tier);
    let financial = financial_adjustment(groom);
    let adjusted = base * city * (1.0 + financial);

    let average_expectation = bride.average_expectation();
    let aligned = (adjusted * FORMULA_WEIGHT + average_expectation * EXPECTATION_WEIGHT).max(0.0);

    let fair = aligned.round() as i64;
    let split = split_payment(fair, bride.payment, bride.prompt_percentage);

    CalculationResult {
        conservative: (aligned * CONSERVATIVE_RATIO).round() as i64,
        fair,
        generous: (aligned * GENEROUS_RATIO).round() as i64,
        breakdown: Breakdown {
            income: groom.monthly_income,
            preference_factor: factor,
            base,
            city_adjustment: city,
            financial_adjustment: financial,
            adjusted_before_alignment: adjusted,
            average_expectation,
            final_aligned: aligned,
        },
        prompt_amount: split.prompt,
        deferred_amount: split.deferred,
    }
}
