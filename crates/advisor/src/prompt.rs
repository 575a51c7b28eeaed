//! Prompt sent to the text-generation service.

use crate::AdvisoryRequest;

/// Render the prompt for `request`.
///
/// Amounts are written as plain numbers followed by the currency code, the
/// model is asked to answer with the three note fields as JSON.
pub(crate) fn render(request: &AdvisoryRequest) -> String {
    let AdvisoryRequest {
        groom,
        bride,
        result,
    } = request;
    let currency = groom.currency.code();

    format!(
        "Context: A couple is using a Mahr calculator.\n\
         Groom profile: income {income} {currency} per month, savings {savings}, debt {debt}, \
         stability: {stability}, city: {tier}.\n\
         Bride profile: expectation {min}-{max} {currency}, preference: {preference}, \
         payment: {payment}.\n\
         Calculated results: conservative {conservative}, fair {fair}, generous {generous}.\n\
         \n\
         Task: answer with a JSON object containing:\n\
         1. explanation: a polite two-sentence explanation of why the fair amount was \
         calculated, referencing the income and the expectations.\n\
         2. culturalNote: a brief Islamic or cultural insight about Mahr (e.g. ease versus security).\n\
         3. negotiationTip: a gentle tip for the groom, the bride and their families to discuss \
         the amount if there is a gap.\n",
        income = groom.monthly_income,
        savings = groom.savings,
        debt = groom.debt_amount,
        stability = groom.job_stability,
        tier = groom.city_tier,
        min = bride.expected_min,
        max = bride.expected_max,
        preference = bride.preference,
        payment = bride.payment,
        conservative = result.conservative,
        fair = result.fair,
        generous = result.generous,
    )
}
