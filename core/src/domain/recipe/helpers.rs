use tracing::debug;

use crate::domain::recipe::entities::{
    CandidateRecipe, ClassifiedRecipe, IngredientRef, PartitionResult,
};

/// Split candidate recipes into ready-to-cook and shopping-required buckets.
///
/// Missing ingredients from pantry aisles become `optional`; the rest stay in
/// `missing`. A recipe with more than `threshold` required ingredients missing is
/// dropped. Both buckets keep the input order.
pub fn partition_recipes(recipes: Vec<CandidateRecipe>, threshold: usize) -> PartitionResult {
    let mut result = PartitionResult::default();

    for recipe in recipes {
        let (optional, missing): (Vec<IngredientRef>, Vec<IngredientRef>) = recipe
            .missing_ingredients
            .into_iter()
            .partition(IngredientRef::is_optional);

        if missing.len() > threshold {
            debug!(
                recipe_id = recipe.id,
                title = %recipe.title,
                required_missing = missing.len(),
                threshold,
                "Recipe needs too much shopping, skipping"
            );
            continue;
        }

        let classified = ClassifiedRecipe {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            used: recipe.used_ingredients,
            missing,
            optional,
        };

        if classified.missing.is_empty() {
            result.ready_to_cook.push(classified);
        } else {
            result.shopping_required.push(classified);
        }
    }

    result
}
