//! Input profiles consumed by [`estimate`](crate::estimate).
//!
//! Both profiles are filled in by the caller across several input stages and
//! handed to the engine fully populated. The engine only reads them.
use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError};

/// Employment stability of the groom.
///
/// Informational only: it is shown to the advisor but does not change the
/// formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStability {
    #[default]
    Stable,
    Contract,
    Student,
}

/// Coarse cost-of-living bracket of the city the couple will live in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityTier {
    /// High cost of living (e.g. London, NYC, Dubai).
    Tier1,
    /// Medium cost of living (e.g. Manchester, Dallas).
    #[default]
    Tier2,
    /// Low cost of living.
    Tier3,
}

/// Qualitative preference stated by the bride.
///
/// Parsing never fails: any unrecognized value is read as
/// [`BridePreference::Balanced`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BridePreference {
    /// Simplicity and ease of marriage.
    Sunnah,
    /// Market average.
    #[default]
    Balanced,
    /// High standard.
    Generous,
}

/// How the Mahr is paid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStructure {
    /// Paid in full at the time of the Nikah.
    #[default]
    Prompt,
    /// Paid at a later agreed date.
    Deferred,
    /// Part prompt, part deferred (see [`BrideProfile::prompt_percentage`]).
    Split,
}

impl JobStability {
    pub const ALL: [JobStability; 3] = [Self::Stable, Self::Contract, Self::Student];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Contract => "contract",
            Self::Student => "student",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable Full-time",
            Self::Contract => "Contract / Freelance",
            Self::Student => "Student / Entry Level",
        }
    }
}

impl CityTier {
    pub const ALL: [CityTier; 3] = [Self::Tier1, Self::Tier2, Self::Tier3];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tier1 => "Tier 1 (High Cost of Living)",
            Self::Tier2 => "Tier 2 (Medium Cost of Living)",
            Self::Tier3 => "Tier 3 (Low Cost of Living)",
        }
    }
}

impl BridePreference {
    pub const ALL: [BridePreference; 3] = [Self::Sunnah, Self::Balanced, Self::Generous];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Sunnah => "sunnah",
            Self::Balanced => "balanced",
            Self::Generous => "generous",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunnah => "Sunnah / Simple",
            Self::Balanced => "Balanced",
            Self::Generous => "Generous",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Sunnah => "Prioritizes ease of marriage.",
            Self::Balanced => "Considers market standards and fairness.",
            Self::Generous => "Reflects high appreciation or status.",
        }
    }

    /// Reads a preference code, falling back to `Balanced` for anything unknown.
    #[must_use]
    pub fn from_code(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|pref| pref.code().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

impl PaymentStructure {
    pub const ALL: [PaymentStructure; 3] = [Self::Prompt, Self::Deferred, Self::Split];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Deferred => "deferred",
            Self::Split => "split",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Prompt => "Prompt (Mu'ajjal)",
            Self::Deferred => "Deferred (Mu'akhkhar)",
            Self::Split => "Split",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Prompt => "Paid in full at the time of Nikah.",
            Self::Deferred => "Paid at a later agreed date.",
            Self::Split => "Part prompt, part deferred.",
        }
    }
}

impl From<String> for BridePreference {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl FromStr for BridePreference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

/// Implements `FromStr` and `Display` over the canonical lowercase codes.
macro_rules! strict_codes {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|item| item.code().eq_ignore_ascii_case(value))
                    .ok_or_else(|| EngineError::InvalidCategory {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

strict_codes!(JobStability, "job stability");
strict_codes!(CityTier, "city tier");
strict_codes!(PaymentStructure, "payment structure");

impl fmt::Display for BridePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Financial situation of the prospective groom.
///
/// All amounts are monthly or total values in [`GroomProfile::currency`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroomProfile {
    pub monthly_income: f64,
    pub savings: f64,
    /// Collected for the advisor; the formula does not use it.
    pub monthly_expenses: f64,
    pub debt_amount: f64,
    pub job_stability: JobStability,
    pub city_tier: CityTier,
    pub currency: Currency,
}

/// Expectations and payment preferences of the bride.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrideProfile {
    pub expected_min: f64,
    pub expected_max: f64,
    pub preference: BridePreference,
    pub payment: PaymentStructure,
    /// Share paid immediately, in percent. Only read when `payment` is
    /// [`PaymentStructure::Split`].
    pub prompt_percentage: u8,
}

impl Default for BrideProfile {
    fn default() -> Self {
        Self {
            expected_min: 0.0,
            expected_max: 0.0,
            preference: BridePreference::Balanced,
            payment: PaymentStructure::Prompt,
            prompt_percentage: 50,
        }
    }
}

impl BrideProfile {
    /// Midpoint of the expected range.
    #[must_use]
    pub fn average_expectation(&self) -> f64 {
        (self.expected_min + self.expected_max) / 2.0
    }
}
