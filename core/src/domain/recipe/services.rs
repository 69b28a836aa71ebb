use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        helpers::{merge_ingredients, normalize_ingredient_names},
        ports::LLMClient,
    },
    recipe::{
        entities::PartitionResult,
        helpers::partition_recipes,
        ports::{RecipeService, RecipeSource},
        value_objects::{FindRecipesInput, RecipeQuery},
    },
};

impl<LLM, RS> RecipeService for Service<LLM, RS>
where
    LLM: LLMClient,
    RS: RecipeSource,
{
    #[instrument(skip(self, input), fields(ingredients = input.ingredients.len()))]
    async fn find_recipes(&self, input: FindRecipesInput) -> Result<PartitionResult, CoreError> {
        let ingredients = merge_ingredients(&normalize_ingredient_names(input.ingredients), &[]);
        if ingredients.is_empty() {
            return Err(CoreError::NoIngredients);
        }

        let query = RecipeQuery {
            ingredients,
            number: self.search.number,
            ranking: self.search.ranking,
            ignore_pantry: self.search.ignore_pantry,
        };

        let candidates = self.recipe_source.find_by_ingredients(query).await?;
        let candidate_count = candidates.len();

        let result = partition_recipes(candidates, self.search.max_missing_ingredients);

        info!(
            candidates = candidate_count,
            ready_to_cook = result.ready_to_cook.len(),
            shopping_required = result.shopping_required.len(),
            "Recipes classified"
        );

        Ok(result)
    }
}
