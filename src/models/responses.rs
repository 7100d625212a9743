use serde::{Deserialize, Serialize};
use crate::models::domain::ScaledIngredient;

/// Recipe scaled to a new serving count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRecipe {
    pub title: String,
    #[serde(rename = "baseServings")]
    pub base_servings: u32,
    pub servings: u32,
    pub ratio: f64,
    #[serde(rename = "prepTime", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(rename = "cookTime", skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    pub ingredients: Vec<ScaledIngredient>,
}

/// Single unit conversion, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

/// Error payload written when a command fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
