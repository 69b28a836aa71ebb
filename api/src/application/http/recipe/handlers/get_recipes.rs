use axum::{extract::State, response::Html};
use axum_extra::extract::Form;
use fridgechef_core::domain::{
    ingredient::{ports::IngredientService, value_objects::MergeIngredientsInput},
    recipe::{ports::RecipeService, value_objects::FindRecipesInput},
};

use crate::application::http::{
    recipe::validators::GetRecipesForm,
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Looks up recipes for the edited list and renders the results page
pub async fn get_recipes(
    State(state): State<AppState>,
    Form(form): Form<GetRecipesForm>,
) -> Result<Html<String>, ApiError> {
    let ingredients = state.service.merge_ingredients(MergeIngredientsInput {
        existing: form.ingredients,
        detected: Vec::new(),
    });

    let result = state
        .service
        .find_recipes(FindRecipesInput {
            ingredients: ingredients.clone(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Html(state.views.recipes(&ingredients, &result)?))
}
