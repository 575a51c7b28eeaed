//! Plain-text rendering of a calculation.

use advisor::AdvisoryNote;
use engine::{BrideProfile, CalculationResult, Currency, GroomProfile};

const DISCLAIMER: &str = "This logic serves as a guideline, not a Shariah ruling.";

/// Render headline amounts, payment split and, when `detailed`, the
/// step-by-step breakdown.
pub fn render(
    groom: &GroomProfile,
    bride: &BrideProfile,
    result: &CalculationResult,
    detailed: bool,
) -> String {
    let currency = groom.currency;
    let money = |amount: f64| currency.format(amount);
    let mut text = String::new();

    text.push_str(&format!("Recommended Mahr ({})\n", currency.code()));
    text.push_str(&format!(
        "  Based on {} and {} living standards\n",
        currency.code(),
        groom.city_tier.label()
    ));
    text.push_str(&format!(
        "  Employment: {}. Preference: {} ({})\n",
        groom.job_stability.label(),
        bride.preference.label(),
        bride.preference.description()
    ));
    text.push_str(&format!(
        "  Conservative  {}\n",
        money(result.conservative as f64)
    ));
    text.push_str(&format!("  Fair          {}\n", money(result.fair as f64)));
    text.push_str(&format!("  Generous      {}\n", money(result.generous as f64)));

    let slices = result.payment_split().slices();
    if !slices.is_empty() {
        text.push_str(&format!(
            "\nPayment: {} ({})\n",
            bride.payment.label(),
            bride.payment.description()
        ));
        for slice in slices {
            text.push_str(&format!(
                "  {:<12}  {} ({:.0}%)\n",
                slice.label,
                money(slice.amount as f64),
                slice.share
            ));
        }
    }

    if detailed {
        text.push_str(&render_breakdown(groom, bride, result, currency));
    }
    text
}

fn render_breakdown(
    groom: &GroomProfile,
    bride: &BrideProfile,
    result: &CalculationResult,
    currency: Currency,
) -> String {
    let b = &result.breakdown;
    let money = |amount: f64| currency.format(amount);
    let mut text = String::from("\nBreakdown\n");

    text.push_str(&format!("  Monthly income            {}\n", money(b.income)));
    text.push_str(&format!(
        "  x Preference factor       {} ({})\n",
        b.preference_factor,
        bride.preference.label()
    ));
    text.push_str(&format!("  = Base                    {}\n", money(b.base)));
    text.push_str(&format!(
        "  x City adjustment         {} ({})\n",
        b.city_adjustment,
        groom.city_tier.label()
    ));
    text.push_str(&format!(
        "  Financial adjustment      {:+.0}%\n",
        b.financial_adjustment * 100.0
    ));
    text.push_str(&format!(
        "  = Adjusted                {}\n",
        money(b.adjusted_before_alignment)
    ));
    text.push_str(&format!(
        "  70% formula               {}\n",
        money(b.weighted_formula())
    ));
    text.push_str(&format!(
        "  30% expectation           {} (average {})\n",
        money(b.weighted_expectation()),
        money(b.average_expectation)
    ));
    text.push_str(&format!(
        "  = Fair                    {}\n",
        money(result.fair as f64)
    ));
    text.push_str(&format!("\n{DISCLAIMER}\n"));
    text
}

pub fn render_advice(note: &AdvisoryNote) -> String {
    format!(
        "\nWhy this amount\n  {}\n\nCultural note\n  {}\n\nNegotiation tip\n  {}\n",
        note.explanation, note.cultural_note, note.negotiation_tip
    )
}

#[cfg(test)]
mod tests {
    use engine::{BridePreference, CityTier, JobStability, PaymentStructure, estimate};

    use super::*;

    fn scenario(payment: PaymentStructure) -> (GroomProfile, BrideProfile, CalculationResult) {
        let groom = GroomProfile {
            monthly_income: 5000.0,
            ..Default::default()
        };
        let bride = BrideProfile {
            expected_min: 5000.0,
            expected_max: 7000.0,
            payment,
            prompt_percentage: 40,
            ..Default::default()
        };
        let result = estimate(&groom, &bride);
        (groom, bride, result)
    }

    #[test]
    fn headline_amounts() {
        let (groom, bride, result) = scenario(PaymentStructure::Prompt);
        let text = render(&groom, &bride, &result, false);
        assert!(text.contains("Conservative  $5,640"));
        assert!(text.contains("Fair          $7,050"));
        assert!(text.contains("Generous      $9,165"));
        assert!(text.contains("Payment: Prompt (Mu'ajjal) (Paid in full at the time of Nikah.)"));
        assert!(text.contains("Prompt        $7,050 (100%)"));
        assert!(!text.contains("Deferred"));
        assert!(!text.contains("Breakdown"));
        assert!(!text.contains(DISCLAIMER));
    }

    #[test]
    fn profile_line_uses_labels() {
        let (mut groom, mut bride, _) = scenario(PaymentStructure::Prompt);
        groom.city_tier = CityTier::Tier1;
        groom.job_stability = JobStability::Contract;
        bride.preference = BridePreference::Sunnah;
        let result = estimate(&groom, &bride);

        let text = render(&groom, &bride, &result, false);
        assert!(text.contains("Based on USD and Tier 1 (High Cost of Living) living standards"));
        assert!(text.contains(
            "Employment: Contract / Freelance. Preference: Sunnah / Simple (Prioritizes ease of marriage.)"
        ));
    }

    #[test]
    fn split_lists_both_parts() {
        let (groom, bride, result) = scenario(PaymentStructure::Split);
        let text = render(&groom, &bride, &result, false);
        assert!(text.contains("Payment: Split (Part prompt, part deferred.)"));
        assert!(text.contains("Prompt        $2,820 (40%)"));
        assert!(text.contains("Deferred      $4,230 (60%)"));
    }

    #[test]
    fn detailed_view_shows_weighted_parts() {
        let (groom, bride, result) = scenario(PaymentStructure::Prompt);
        let text = render(&groom, &bride, &result, true);
        assert!(text.contains("x Preference factor       1.5 (Balanced)"));
        assert!(text.contains("= Base                    $7,500"));
        assert!(text.contains("x City adjustment         1 (Tier 2 (Medium Cost of Living))"));
        assert!(text.contains("Financial adjustment      +0%"));
        assert!(text.contains("70% formula               $5,250"));
        assert!(text.contains("30% expectation           $1,800 (average $6,000)"));
        assert!(text.ends_with(&format!("\n{DISCLAIMER}\n")));
    }

    #[test]
    fn advice_sections() {
        let text = render_advice(&AdvisoryNote::service_fallback());
        assert!(text.contains("Cultural note\n  Mahr is a token of respect and security."));
    }
}
