use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::CandidateRecipe, ports::RecipeSource, value_objects::RecipeQuery},
};

const FIXTURE_RECIPES: &str = include_str!("fixtures/find_by_ingredients.json");

/// Offline recipe source serving a bundled `findByIngredients` response.
///
/// Ignores the requested ingredients; only `number` is honoured.
#[derive(Debug, Clone)]
pub struct FixtureRecipeSource {
    recipes: Vec<CandidateRecipe>,
}

impl FixtureRecipeSource {
    pub fn load() -> Result<Self, CoreError> {
        let recipes = serde_json::from_str(FIXTURE_RECIPES).map_err(|e| {
            tracing::error!("Failed to parse fixture recipes: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self { recipes })
    }
}

impl RecipeSource for FixtureRecipeSource {
    async fn find_by_ingredients(
        &self,
        query: RecipeQuery,
    ) -> Result<Vec<CandidateRecipe>, CoreError> {
        tracing::debug!(
            ingredients = ?query.ingredients,
            "Serving fixture recipes"
        );

        Ok(self
            .recipes
            .iter()
            .take(query.number as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::helpers::partition_recipes;

    fn query(number: u32) -> RecipeQuery {
        RecipeQuery {
            ingredients: vec!["garlic".to_string()],
            number,
            ranking: 1,
            ignore_pantry: true,
        }
    }

    #[tokio::test]
    async fn test_fixture_limits_to_requested_number() {
        let source = FixtureRecipeSource::load().unwrap();

        let all = source.find_by_ingredients(query(10)).await.unwrap();
        let two = source.find_by_ingredients(query(2)).await.unwrap();

        assert_eq!(all.len(), 4);
        assert_eq!(two, all[..2].to_vec());
    }

    #[tokio::test]
    async fn test_fixture_recipes_cover_every_bucket() {
        let source = FixtureRecipeSource::load().unwrap();
        let recipes = source.find_by_ingredients(query(10)).await.unwrap();

        let result = partition_recipes(recipes, 3);

        let ready: Vec<&str> = result.ready_to_cook.iter().map(|r| r.title.as_str()).collect();
        let shopping: Vec<&str> = result
            .shopping_required
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(ready, vec!["Simple Garlic Rice", "Garlic Butter Noodles"]);
        assert_eq!(shopping, vec!["Eggplant Pizzette"]);

        let garlic_rice = &result.ready_to_cook[0];
        assert!(garlic_rice.missing.is_empty());
        assert_eq!(garlic_rice.used.len(), 3);

        let pizzette = &result.shopping_required[0];
        assert_eq!(pizzette.missing.len(), 2);
        assert!(pizzette.optional.is_empty());
    }
}
