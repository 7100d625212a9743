use crate::core::{
    rounding::round_for_cooking,
    rules::infer_scaling_rule,
    scaling::{scale_amount_with_policy, scale_cooking_time, scaling_ratio},
    units::to_system,
};
use crate::error::ScalingError;
use crate::models::{
    Ingredient, NegativeAmountPolicy, Recipe, ScaledIngredient, ScaledRecipe, ScaledResult,
    ScalingRule, UnitSystem,
};

/// Scales whole ingredient lists and recipes
///
/// Holds the policy for negative logarithmic results; everything else is a
/// pure function of its inputs, so a `Scaler` can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scaler {
    policy: NegativeAmountPolicy,
}

impl Scaler {
    pub fn new(policy: NegativeAmountPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NegativeAmountPolicy {
        self.policy
    }

    pub fn scale_amount(&self, rule: &ScalingRule, target_servings: u32) -> Result<ScaledResult, ScalingError> {
        scale_amount_with_policy(rule, target_servings, self.policy)
    }

    /// Scale one ingredient record
    ///
    /// `base_servings` overrides the ingredient's own count. A record without
    /// a rule gets one inferred from its name.
    pub fn scale_ingredient(
        &self,
        ingredient: &Ingredient,
        target_servings: u32,
        base_servings: Option<u32>,
    ) -> Result<ScaledIngredient, ScalingError> {
        let rule_type = ingredient.scaling_rule.unwrap_or_else(|| {
            let inferred = infer_scaling_rule(&ingredient.name);
            tracing::debug!("No scaling rule for '{}', inferred {}", ingredient.name, inferred);
            inferred
        });

        let base_servings = base_servings
            .or(ingredient.base_servings)
            .ok_or(ScalingError::InvalidServings("base"))?;

        let rule = ScalingRule {
            rule_type,
            base_amount: ingredient.amount,
            base_servings,
        };
        let scaled = self.scale_amount(&rule, target_servings)?;

        tracing::trace!(
            "Scaled '{}' {} -> {} {} ({})",
            ingredient.name,
            ingredient.amount,
            scaled.amount,
            ingredient.unit,
            rule_type
        );

        Ok(ScaledIngredient {
            name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            scaling_rule: rule_type,
            base_amount: ingredient.amount,
            scaled_amount: scaled.amount,
            rounded: scaled.rounded,
        })
    }

    /// Scale a list of ingredients, failing on the first invalid one
    pub fn scale_recipe(
        &self,
        ingredients: &[Ingredient],
        target_servings: u32,
        base_servings: Option<u32>,
    ) -> Result<Vec<ScaledIngredient>, ScalingError> {
        if target_servings == 0 {
            return Err(ScalingError::InvalidServings("target"));
        }

        tracing::debug!(
            "Scaling {} ingredients to {} servings (base override: {:?})",
            ingredients.len(),
            target_servings,
            base_servings
        );

        ingredients
            .iter()
            .map(|ingredient| self.scale_ingredient(ingredient, target_servings, base_servings))
            .collect()
    }

    /// Scale a whole recipe, using its serving count as the shared base
    ///
    /// Prep and cook times follow the square-root time curve.
    pub fn scale_recipe_card(&self, recipe: &Recipe, target_servings: u32) -> Result<ScaledRecipe, ScalingError> {
        let ratio = scaling_ratio(recipe.servings, target_servings)?;
        let ingredients = self.scale_recipe(&recipe.ingredients, target_servings, Some(recipe.servings))?;

        let scale_time = |minutes: Option<u32>| {
            minutes
                .map(|m| scale_cooking_time(m, recipe.servings, target_servings))
                .transpose()
        };

        Ok(ScaledRecipe {
            title: recipe.title.clone(),
            base_servings: recipe.servings,
            servings: target_servings,
            ratio,
            prep_time: scale_time(recipe.prep_time)?,
            cook_time: scale_time(recipe.cook_time)?,
            ingredients,
        })
    }
}

/// Free-function form of [`Scaler::scale_recipe`] with the default policy
pub fn scale_recipe(
    ingredients: &[Ingredient],
    target_servings: u32,
    base_servings: Option<u32>,
) -> Result<Vec<ScaledIngredient>, ScalingError> {
    Scaler::default().scale_recipe(ingredients, target_servings, base_servings)
}

/// Re-express a scaled ingredient in another measurement system
///
/// Ingredients with unregistered units (counts, "pinch") are returned as-is.
/// The rounded value is recomputed in the new unit.
pub fn present_in_system(ingredient: ScaledIngredient, system: UnitSystem) -> ScaledIngredient {
    let Ok((scaled_amount, unit)) = to_system(ingredient.scaled_amount, &ingredient.unit, system) else {
        return ingredient;
    };
    let Ok((base_amount, _)) = to_system(ingredient.base_amount, &ingredient.unit, system) else {
        return ingredient;
    };

    ScaledIngredient {
        unit: unit.to_string(),
        base_amount,
        scaled_amount,
        rounded: round_for_cooking(scaled_amount),
        ..ingredient
    }
}
