use axum::{Json, extract::State};
use fridgechef_core::domain::ingredient::{
    ports::IngredientService, value_objects::MergeIngredientsInput,
};

use crate::application::http::{
    ingredient::{
        handlers::detect_ingredients::IngredientsResponse, validators::MergeIngredientsRequest,
    },
    server::{api_entities::response::Response, app_state::AppState},
};

#[utoipa::path(
    post,
    path = "/merge",
    tag = "ingredient",
    summary = "Merge two ingredient lists",
    description = "Keeps `existing` first and appends the `detected` names not already present",
    responses(
        (status = 200, body = IngredientsResponse)
    ),
    request_body = MergeIngredientsRequest
)]
pub async fn merge_ingredients(
    State(state): State<AppState>,
    Json(payload): Json<MergeIngredientsRequest>,
) -> Response<IngredientsResponse> {
    let ingredients = state.service.merge_ingredients(MergeIngredientsInput {
        existing: payload.existing,
        detected: payload.detected,
    });

    Response::OK(IngredientsResponse { data: ingredients })
}
