use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Ingredient, Recipe, RuleType};

/// Recipe file submitted for scaling
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipeInput {
    #[serde(default)]
    pub title: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(alias = "prep_time", rename = "prepTime", default)]
    pub prep_time: Option<u32>,
    #[serde(alias = "cook_time", rename = "cookTime", default)]
    pub cook_time: Option<u32>,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<IngredientInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IngredientInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(alias = "scaling_rule", rename = "scalingRule", default)]
    pub scaling_rule: Option<RuleType>,
}

impl RecipeInput {
    /// Convert into a [`Recipe`], using `default_servings` when the file omits a count
    pub fn into_recipe(self, default_servings: u32) -> Recipe {
        Recipe {
            title: self.title.unwrap_or_default(),
            servings: self.servings.unwrap_or(default_servings),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|ing| Ingredient {
                    name: ing.name,
                    amount: ing.amount,
                    unit: ing.unit,
                    base_servings: None,
                    scaling_rule: ing.scaling_rule,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(json: &str) -> RecipeInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_input() {
        let recipe = input(
            r#"{"title": "Bread", "servings": 4, "ingredients": [
                {"name": "flour", "amount": 500, "unit": "g"},
                {"name": "yeast", "amount": 7, "unit": "g", "scalingRule": "logarithmic"}
            ]}"#,
        );
        assert!(recipe.validate().is_ok());

        let recipe = recipe.into_recipe(4);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients[1].scaling_rule, Some(RuleType::Logarithmic));
    }

    #[test]
    fn test_rejects_empty_ingredients() {
        let recipe = input(r#"{"servings": 4, "ingredients": []}"#);
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_servings() {
        let recipe = input(r#"{"servings": 0, "ingredients": [{"name": "salt", "amount": 1}]}"#);
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let recipe = input(r#"{"ingredients": [{"name": "salt", "amount": 0}]}"#);
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_missing_servings_uses_default() {
        let recipe = input(r#"{"ingredients": [{"name": "salt", "amount": 1}]}"#);
        assert!(recipe.validate().is_ok());
        assert_eq!(recipe.into_recipe(4).servings, 4);
    }
}
