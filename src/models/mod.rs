// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Ingredient, NegativeAmountPolicy, Recipe, RuleType, ScaledIngredient, ScaledResult, ScalingRule,
    UnitKind, UnitListing, UnitSystem,
};
pub use requests::{IngredientInput, RecipeInput};
pub use responses::{ConversionResponse, ErrorResponse, ScaledRecipe};
