use clap::Parser;
use engine::{
    BridePreference, BrideProfile, CityTier, Currency, GroomProfile, JobStability,
    PaymentStructure,
};

#[derive(Debug, Parser)]
#[command(name = "mahr", about = "Estimate a recommended Mahr range")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,

    /// Groom's monthly income.
    #[arg(long, default_value_t = 0.0)]
    pub income: f64,
    #[arg(long, default_value_t = 0.0)]
    pub savings: f64,
    /// Monthly expenses (shared with the advisor only).
    #[arg(long, default_value_t = 0.0)]
    pub expenses: f64,
    /// Outstanding debt.
    #[arg(long, default_value_t = 0.0)]
    pub debt: f64,
    /// stable, contract or student.
    #[arg(long, default_value = "stable")]
    pub stability: JobStability,
    /// tier1 (high cost of living), tier2 or tier3.
    #[arg(long, default_value = "tier2")]
    pub tier: CityTier,
    #[arg(long, default_value = "USD")]
    pub currency: Currency,

    /// Bride's expected minimum amount.
    #[arg(long, default_value_t = 0.0)]
    pub expected_min: f64,
    /// Bride's expected maximum amount.
    #[arg(long, default_value_t = 0.0)]
    pub expected_max: f64,
    /// sunnah, balanced or generous. Unknown values count as balanced.
    #[arg(long, default_value = "balanced")]
    pub preference: BridePreference,
    /// prompt, deferred or split.
    #[arg(long, default_value = "prompt")]
    pub payment: PaymentStructure,
    /// Share paid immediately when the payment is split.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub prompt_percentage: u8,

    /// Skip the advisory note.
    #[arg(long)]
    pub no_advice: bool,
    /// Show the full calculation breakdown.
    #[arg(long)]
    pub detailed: bool,
}

impl Args {
    pub fn profiles(&self) -> (GroomProfile, BrideProfile) {
        let groom = GroomProfile {
            monthly_income: self.income,
            savings: self.savings,
            monthly_expenses: self.expenses,
            debt_amount: self.debt,
            job_stability: self.stability,
            city_tier: self.tier,
            currency: self.currency,
        };
        let bride = BrideProfile {
            expected_min: self.expected_min,
            expected_max: self.expected_max,
            preference: self.preference,
            payment: self.payment,
            prompt_percentage: self.prompt_percentage,
        };
        (groom, bride)
    }
}
