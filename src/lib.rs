//! Recipe Scale - scaling engine for cooking recipes
//!
//! Converts ingredient quantities written for one serving count into
//! quantities for another, using a per-ingredient growth curve rather than
//! plain multiplication, and rounds the result to amounts a cook can
//! measure. Also provides the kitchen unit registry used to present amounts
//! in other units.
//!
//! Everything in [`core`] is pure and synchronous; the only shared state is
//! the read-only unit table.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{convert, infer_scaling_rule, is_valid_scaling_rule, scale_amount, scale_cooking_time, scale_recipe, Scaler};
pub use error::{RuleShapeError, ScalingError};
pub use models::{Ingredient, Recipe, RuleType, ScaledIngredient, ScaledRecipe, ScaledResult, ScalingRule};
