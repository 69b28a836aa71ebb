use axum::extract::State;
use fridgechef_core::domain::recipe::{
    entities::PartitionResult, ports::RecipeService, value_objects::FindRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::SearchRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipesResponse {
    pub data: PartitionResult,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "recipe",
    summary = "Find recipes for a list of ingredients",
    description = "Splits the recipe source results into ready-to-cook and shopping-required buckets. Recipes missing more than the configured number of required ingredients are left out.",
    responses(
        (status = 200, body = RecipesResponse),
        (status = 400, description = "No ingredients given"),
        (status = 500, description = "Recipe source unavailable")
    ),
    request_body = SearchRecipesRequest
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchRecipesRequest>,
) -> Result<Response<RecipesResponse>, ApiError> {
    let result = state
        .service
        .find_recipes(FindRecipesInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipesResponse { data: result }))
}
