use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO-like currency code attached to a groom profile.
///
/// The engine never converts between currencies: every amount of a
/// calculation is expressed in the currency of the groom profile, and the
/// currency only matters when an amount is rendered.
///
/// ## Formatting
///
/// Amounts are displayed in whole units (no fractional digits) with `,` as
/// thousands separator. Currencies with a widely known symbol are prefixed
/// with it (`$7,050`), the others with their code (`AED 7,050`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Gbp,
    Eur,
    Aed,
    Sar,
    Inr,
    Pkr,
}

impl Currency {
    /// Every supported currency, in the order offered to the user.
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Gbp,
        Currency::Eur,
        Currency::Aed,
        Currency::Sar,
        Currency::Inr,
        Currency::Pkr,
    ];

    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Aed => "AED",
            Currency::Sar => "SAR",
            Currency::Inr => "INR",
            Currency::Pkr => "PKR",
        }
    }

    /// Display symbol, if the currency is rendered with one instead of its code.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Currency::Usd => Some("$"),
            Currency::Gbp => Some("£"),
            Currency::Eur => Some("€"),
            Currency::Inr => Some("₹"),
            Currency::Aed | Currency::Sar | Currency::Pkr => None,
        }
    }

    /// Formats `amount` in whole units of this currency.
    ///
    /// ```rust
    /// use engine::Currency;
    ///
    /// assert_eq!(Currency::Usd.format(7050.0), "$7,050");
    /// assert_eq!(Currency::Aed.format(1234567.4), "AED 1,234,567");
    /// assert_eq!(Currency::Gbp.format(-12.5), "-£13");
    /// ```
    #[must_use]
    pub fn format(self, amount: f64) -> String {
        format_amount(amount, self)
    }
}

/// Formats `amount` in whole units of `currency`, rounding half away from zero.
///
/// Non-finite amounts are rendered as zero.
#[must_use]
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(rounded.abs() as u64);
    match currency.symbol() {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{} {digits}", currency.code()),
    }
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let code = value.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or(EngineError::UnsupportedCurrency(code))
    }
}

impl core::str::FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::try_from(s)
    }
}
