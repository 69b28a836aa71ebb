use axum::{
    extract::{Multipart, State},
    response::Html,
};
use fridgechef_core::domain::ingredient::{
    ports::IngredientService, value_objects::DetectIngredientsInput,
};

use crate::application::http::{
    ingredient::validators::ImageUploadForm,
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Scans the uploaded photo and re-renders the ingredient page with the merged list
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
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

    Ok(Html(state.views.ingredients(&ingredients)?))
}
