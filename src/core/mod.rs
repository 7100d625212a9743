// Core algorithm exports
pub mod density;
pub mod rounding;
pub mod rules;
pub mod scaler;
pub mod scaling;
pub mod units;

pub use density::{cups_to_grams, grams_per_cup, grams_to_cups};
pub use rounding::round_for_cooking;
pub use rules::{infer_scaling_rule, is_valid_scaling_rule, validate_scaling_rule};
pub use scaler::{present_in_system, scale_recipe, Scaler};
pub use scaling::{scale_amount, scale_amount_with_policy, scale_cooking_time, scaling_ratio};
pub use units::{
    canonical_unit, convert, describe_unit, is_valid_unit, list_units, normalize_unit, to_system,
    unit_info, ConversionRate,
};
