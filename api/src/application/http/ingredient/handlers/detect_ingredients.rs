use axum::extract::{Multipart, State};
use fridgechef_core::domain::ingredient::{
    ports::IngredientService, value_objects::DetectIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::ImageUploadForm,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/detect",
    tag = "ingredient",
    summary = "Detect ingredients on a photo",
    description = "Sends the `image` field to the vision model and appends the detected names to the `existingIngredients` fields",
    responses(
        (status = 200, body = IngredientsResponse),
        (status = 400, description = "Missing, empty or non-image upload"),
        (status = 413, description = "Image too large"),
        (status = 500, description = "Vision model unavailable")
    ),
)]
pub async fn detect_ingredients(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<IngredientsResponse>, ApiError> {
    let form = ImageUploadForm::from_multipart(multipart).await?;

    let ingredients = state
        .service
        .detect_ingredients(DetectIngredientsInput {
            image_data: form.image_data,
            mime_type: form.mime_type,
            existing: form.existing_ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(IngredientsResponse { data: ingredients }))
}
