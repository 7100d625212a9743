use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScalingError;

/// Growth curve used when an ingredient moves between serving counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Linear,
    Logarithmic,
    Sqrt,
    Fixed,
}

impl RuleType {
    pub const ALL: [RuleType; 4] = [
        RuleType::Linear,
        RuleType::Logarithmic,
        RuleType::Sqrt,
        RuleType::Fixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Linear => "linear",
            RuleType::Logarithmic => "logarithmic",
            RuleType::Sqrt => "sqrt",
            RuleType::Fixed => "fixed",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical tags plus the `squareRoot` spelling found in stored recipes
impl FromStr for RuleType {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(RuleType::Linear),
            "logarithmic" => Ok(RuleType::Logarithmic),
            "sqrt" | "squareroot" | "square_root" => Ok(RuleType::Sqrt),
            "fixed" => Ok(RuleType::Fixed),
            _ => Err(ScalingError::UnknownScalingRule(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for RuleType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Scaling rule for a single ingredient
///
/// `base_amount` is the quantity written for `base_servings`. Both must be
/// positive; [`ScalingRule::validate`] is checked before every scaling call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingRule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    #[serde(rename = "baseAmount")]
    pub base_amount: f64,
    #[serde(rename = "baseServings")]
    pub base_servings: u32,
}

impl ScalingRule {
    pub fn new(rule_type: RuleType, base_amount: f64, base_servings: u32) -> Result<Self, ScalingError> {
        let rule = Self {
            rule_type,
            base_amount,
            base_servings,
        };
        rule.validate()?;
        Ok(rule)
    }

    pub fn validate(&self) -> Result<(), ScalingError> {
        if !self.base_amount.is_finite() || self.base_amount <= 0.0 {
            return Err(ScalingError::InvalidAmount(self.base_amount));
        }
        if self.base_servings == 0 {
            return Err(ScalingError::InvalidServings("base"));
        }
        Ok(())
    }
}

/// Scaled quantity, raw and rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledResult {
    pub amount: f64,
    pub rounded: f64,
}

/// Ingredient record as supplied by recipe storage or the parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "baseServings", default, skip_serializing_if = "Option::is_none")]
    pub base_servings: Option<u32>,
    #[serde(rename = "scalingRule", default, skip_serializing_if = "Option::is_none")]
    pub scaling_rule: Option<RuleType>,
}

/// Ingredient after scaling, with the rule that was actually applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub unit: String,
    #[serde(rename = "scalingRule")]
    pub scaling_rule: RuleType,
    #[serde(rename = "baseAmount")]
    pub base_amount: f64,
    #[serde(rename = "scaledAmount")]
    pub scaled_amount: f64,
    pub rounded: f64,
}

/// Recipe as handed over by the storage layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    pub servings: u32,
    #[serde(rename = "prepTime", default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(rename = "cookTime", default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    pub ingredients: Vec<Ingredient>,
}

/// Physical dimension a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Mass,
    Volume,
}

/// Measurement system a unit belongs to
///
/// Deserializes through [`FromStr`], so config values and CLI flags accept
/// the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(format!("unknown unit system `{}` (expected metric or imperial)", other)),
        }
    }
}

impl<'de> Deserialize<'de> for UnitSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let system = String::deserialize(deserializer)?;
        system.parse().map_err(serde::de::Error::custom)
    }
}

/// Registered unit names split by measurement system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitListing {
    pub metric: Vec<&'static str>,
    pub imperial: Vec<&'static str>,
}

/// What to do when a growth curve drives an amount below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeAmountPolicy {
    #[default]
    Reject,
    Clamp,
}
