use crate::core::rounding::round_for_cooking;
use crate::error::ScalingError;
use crate::models::{NegativeAmountPolicy, RuleType, ScaledResult, ScalingRule};

/// Logarithmic curve base: quadrupling servings adds one full base amount
const LOG_GROWTH_BASE: f64 = 4.0;

/// Ratio between a target and a base serving count
pub fn scaling_ratio(base_servings: u32, target_servings: u32) -> Result<f64, ScalingError> {
    if base_servings == 0 {
        return Err(ScalingError::InvalidServings("base"));
    }
    if target_servings == 0 {
        return Err(ScalingError::InvalidServings("target"));
    }
    Ok(target_servings as f64 / base_servings as f64)
}

/// Scale an ingredient amount to `target_servings`
///
/// Negative results from the logarithmic curve are rejected. Use
/// [`scale_amount_with_policy`] or a configured [`crate::core::Scaler`]
/// to clamp them instead.
pub fn scale_amount(rule: &ScalingRule, target_servings: u32) -> Result<ScaledResult, ScalingError> {
    scale_amount_with_policy(rule, target_servings, NegativeAmountPolicy::default())
}

/// Scale an ingredient amount, resolving negative results with `policy`
pub fn scale_amount_with_policy(
    rule: &ScalingRule,
    target_servings: u32,
    policy: NegativeAmountPolicy,
) -> Result<ScaledResult, ScalingError> {
    if target_servings == 0 {
        return Err(ScalingError::InvalidServings("target"));
    }
    rule.validate()?;

    let ratio = target_servings as f64 / rule.base_servings as f64;
    let mut amount = apply_growth_curve(rule.rule_type, rule.base_amount, ratio);

    if amount < 0.0 {
        match policy {
            NegativeAmountPolicy::Reject => {
                return Err(ScalingError::NegativeAmount { amount, ratio });
            }
            NegativeAmountPolicy::Clamp => {
                tracing::warn!(
                    "Clamping negative {} amount {:.3} to zero (ratio {:.3})",
                    rule.rule_type,
                    amount,
                    ratio
                );
                amount = 0.0;
            }
        }
    }

    Ok(ScaledResult {
        amount,
        rounded: round_for_cooking(amount),
    })
}

/// Growth curves
///
/// - linear:      base * ratio
/// - logarithmic: base * (1 + ln(ratio) / ln(4)), negative below ratio 1/4
/// - sqrt:        base * sqrt(ratio)
/// - fixed:       base
#[inline]
fn apply_growth_curve(rule_type: RuleType, base_amount: f64, ratio: f64) -> f64 {
    match rule_type {
        RuleType::Linear => base_amount * ratio,
        RuleType::Logarithmic => base_amount * (1.0 + ratio.ln() / LOG_GROWTH_BASE.ln()),
        RuleType::Sqrt => base_amount * ratio.sqrt(),
        RuleType::Fixed => base_amount,
    }
}

/// Scale a cook or prep time in minutes
///
/// Uses the square-root curve: a double batch takes roughly 40% longer,
/// not twice as long. Rounded to the nearest minute; a result too large
/// for `u32` is reported as `TimeOverflow`.
pub fn scale_cooking_time(
    base_minutes: u32,
    base_servings: u32,
    target_servings: u32,
) -> Result<u32, ScalingError> {
    let ratio = scaling_ratio(base_servings, target_servings)?;
    let scaled = (base_minutes as f64 * ratio.sqrt()).round();

    if scaled > u32::MAX as f64 {
        return Err(ScalingError::TimeOverflow(scaled));
    }
    Ok(scaled as u32)
}
