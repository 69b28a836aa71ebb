use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{CandidateRecipe, PartitionResult},
        value_objects::{FindRecipesInput, RecipeQuery},
    },
};

/// Supplier of candidate recipes for a set of ingredients
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSource: Send + Sync {
    fn find_by_ingredients(
        &self,
        query: RecipeQuery,
    ) -> impl Future<Output = Result<Vec<CandidateRecipe>, CoreError>> + Send;
}

/// Service trait for recipe lookup and classification
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn find_recipes(
        &self,
        input: FindRecipesInput,
    ) -> impl Future<Output = Result<PartitionResult, CoreError>> + Send;
}
