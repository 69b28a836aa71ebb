pub mod fixture_recipe_source;
pub mod spoonacular_client;

pub use fixture_recipe_source::FixtureRecipeSource;
pub use spoonacular_client::SpoonacularRecipeSource;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::CandidateRecipe, ports::RecipeSource, value_objects::RecipeQuery},
};

/// Recipe source picked from configuration at startup
#[derive(Debug, Clone)]
pub enum RecipeSourceClient {
    Spoonacular(SpoonacularRecipeSource),
    Fixture(FixtureRecipeSource),
}

impl RecipeSource for RecipeSourceClient {
    async fn find_by_ingredients(
        &self,
        query: RecipeQuery,
    ) -> Result<Vec<CandidateRecipe>, CoreError> {
        match self {
            RecipeSourceClient::Spoonacular(source) => source.find_by_ingredients(query).await,
            RecipeSourceClient::Fixture(source) => source.find_by_ingredients(query).await,
        }
    }
}
