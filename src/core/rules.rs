use serde_json::Value;

use crate::error::RuleShapeError;
use crate::models::{RuleType, ScalingRule};

/// Keyword table for default rule inference, checked top to bottom
///
/// Best-effort only: "bell pepper" lands on `sqrt` and "coloring book" on
/// `fixed`. Explicit rules always take precedence.
const RULE_KEYWORDS: &[(&str, RuleType)] = &[
    // leavening and chocolate
    ("yeast", RuleType::Logarithmic),
    ("leaven", RuleType::Logarithmic),
    ("baking powder", RuleType::Logarithmic),
    ("baking soda", RuleType::Logarithmic),
    ("chocolate", RuleType::Logarithmic),
    ("cocoa", RuleType::Logarithmic),
    // seasoning and aromatics
    ("salt", RuleType::Sqrt),
    ("spice", RuleType::Sqrt),
    ("pepper", RuleType::Sqrt),
    ("cinnamon", RuleType::Sqrt),
    ("nutmeg", RuleType::Sqrt),
    ("ginger", RuleType::Sqrt),
    ("garlic", RuleType::Sqrt),
    // flavourings
    ("vanilla", RuleType::Fixed),
    ("extract", RuleType::Fixed),
    ("coloring", RuleType::Fixed),
    ("color", RuleType::Fixed),
];

/// Guess a scaling rule from an ingredient name, defaulting to linear
pub fn infer_scaling_rule(ingredient_name: &str) -> RuleType {
    let name = ingredient_name.to_lowercase();

    RULE_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or(RuleType::Linear, |(_, rule)| *rule)
}

/// Validate an untrusted rule object (parser output, user input)
///
/// Expects `{"type": <tag>, "baseAmount": <number > 0>, "baseServings": <integer > 0>}`.
/// Tags must match exactly; unlike [`RuleType`] parsing, case and
/// surrounding whitespace are not forgiven. `squareRoot` is the only alias.
pub fn validate_scaling_rule(candidate: &Value) -> Result<ScalingRule, RuleShapeError> {
    let object = candidate.as_object().ok_or(RuleShapeError::NotAnObject)?;

    let tag = object.get("type").ok_or(RuleShapeError::MissingField("type"))?;
    let rule_type = tag.as_str().and_then(exact_rule_tag).ok_or_else(|| {
        RuleShapeError::UnknownType(tag.as_str().map_or_else(|| tag.to_string(), str::to_string))
    })?;

    let base_amount = positive_number(object.get("baseAmount"), "baseAmount")?;

    let base_servings = positive_number(object.get("baseServings"), "baseServings")?;
    if base_servings.fract() != 0.0 || base_servings > u32::MAX as f64 {
        return Err(RuleShapeError::NotAnInteger("baseServings"));
    }

    Ok(ScalingRule {
        rule_type,
        base_amount,
        base_servings: base_servings as u32,
    })
}

/// Boolean form of [`validate_scaling_rule`]
pub fn is_valid_scaling_rule(candidate: &Value) -> bool {
    validate_scaling_rule(candidate).is_ok()
}

fn exact_rule_tag(tag: &str) -> Option<RuleType> {
    match tag {
        "linear" => Some(RuleType::Linear),
        "logarithmic" => Some(RuleType::Logarithmic),
        "sqrt" | "squareRoot" => Some(RuleType::Sqrt),
        "fixed" => Some(RuleType::Fixed),
        _ => None,
    }
}

fn positive_number(value: Option<&Value>, field: &'static str) -> Result<f64, RuleShapeError> {
    let number = value
        .ok_or(RuleShapeError::MissingField(field))?
        .as_f64()
        .ok_or(RuleShapeError::NotANumber(field))?;

    if !number.is_finite() || number <= 0.0 {
        return Err(RuleShapeError::NonPositive(field));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_by_family() {
        assert_eq!(infer_scaling_rule("Active Dry Yeast"), RuleType::Logarithmic);
        assert_eq!(infer_scaling_rule("dark chocolate chips"), RuleType::Logarithmic);
        assert_eq!(infer_scaling_rule("baking soda"), RuleType::Logarithmic);
        assert_eq!(infer_scaling_rule("Sea Salt"), RuleType::Sqrt);
        assert_eq!(infer_scaling_rule("ground cinnamon"), RuleType::Sqrt);
        assert_eq!(infer_scaling_rule("garlic cloves"), RuleType::Sqrt);
        assert_eq!(infer_scaling_rule("vanilla extract"), RuleType::Fixed);
        assert_eq!(infer_scaling_rule("red food coloring"), RuleType::Fixed);
        assert_eq!(infer_scaling_rule("all-purpose flour"), RuleType::Linear);
        assert_eq!(infer_scaling_rule(""), RuleType::Linear);
    }

    #[test]
    fn test_infer_first_match_wins() {
        // leavening is checked before salt
        assert_eq!(infer_scaling_rule("salted chocolate"), RuleType::Logarithmic);
        // seasoning is checked before flavourings
        assert_eq!(infer_scaling_rule("ginger extract"), RuleType::Sqrt);
    }

    #[test]
    fn test_validate_accepts_well_formed_rule() {
        let rule = validate_scaling_rule(&json!({
            "type": "logarithmic",
            "baseAmount": 7,
            "baseServings": 12
        }))
        .unwrap();

        assert_eq!(rule.rule_type, RuleType::Logarithmic);
        assert_eq!(rule.base_amount, 7.0);
        assert_eq!(rule.base_servings, 12);
    }

    #[test]
    fn test_validate_reports_shape_errors() {
        assert_eq!(validate_scaling_rule(&json!(null)), Err(RuleShapeError::NotAnObject));
        assert_eq!(validate_scaling_rule(&json!([1, 2])), Err(RuleShapeError::NotAnObject));
        assert_eq!(
            validate_scaling_rule(&json!({"baseAmount": 1, "baseServings": 4})),
            Err(RuleShapeError::MissingField("type"))
        );
        assert_eq!(
            validate_scaling_rule(&json!({"type": "cubic", "baseAmount": 1, "baseServings": 4})),
            Err(RuleShapeError::UnknownType("cubic".to_string()))
        );
        assert_eq!(
            validate_scaling_rule(&json!({"type": "linear", "baseAmount": "2", "baseServings": 4})),
            Err(RuleShapeError::NotANumber("baseAmount"))
        );
        assert_eq!(
            validate_scaling_rule(&json!({"type": "linear", "baseAmount": 0, "baseServings": 4})),
            Err(RuleShapeError::NonPositive("baseAmount"))
        );
        assert_eq!(
            validate_scaling_rule(&json!({"type": "linear", "baseAmount": 1, "baseServings": -4})),
            Err(RuleShapeError::NonPositive("baseServings"))
        );
        assert_eq!(
            validate_scaling_rule(&json!({"type": "linear", "baseAmount": 1, "baseServings": 2.5})),
            Err(RuleShapeError::NotAnInteger("baseServings"))
        );
    }

    #[test]
    fn test_is_valid_scaling_rule() {
        assert!(is_valid_scaling_rule(&json!({"type": "sqrt", "baseAmount": 0.5, "baseServings": 2})));
        assert!(is_valid_scaling_rule(&json!({"type": "squareRoot", "baseAmount": 2, "baseServings": 4})));
        assert!(!is_valid_scaling_rule(&json!({"type": 3, "baseAmount": 2, "baseServings": 4})));
        assert!(!is_valid_scaling_rule(&json!("linear")));
    }

    #[test]
    fn test_validate_requires_exact_tags() {
        for tag in [" LINEAR ", "Linear", "SQRT", "square_root", "squareroot"] {
            assert_eq!(
                validate_scaling_rule(&json!({"type": tag, "baseAmount": 1, "baseServings": 4})),
                Err(RuleShapeError::UnknownType(tag.to_string())),
                "{:?} should be rejected",
                tag
            );
        }
    }

    #[test]
    fn test_unknown_type_message_is_unquoted() {
        let err = validate_scaling_rule(&json!({"type": "cubic", "baseAmount": 1, "baseServings": 4}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown scaling rule type: cubic");

        // non-string tags keep their JSON form
        let err = validate_scaling_rule(&json!({"type": 3, "baseAmount": 1, "baseServings": 4}))
            .unwrap_err();
        assert_eq!(err, RuleShapeError::UnknownType("3".to_string()));
    }
}
