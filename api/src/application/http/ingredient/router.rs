use super::handlers::{
    analyze_image::analyze_image,
    detect_ingredients::{__path_detect_ingredients, detect_ingredients},
    home::{home, index},
    merge_ingredients::{__path_merge_ingredients, merge_ingredients},
};
use super::validators::MAX_UPLOAD_BODY_SIZE;
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(detect_ingredients, merge_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/", root_path), get(index))
        .route(&format!("{}/home", root_path), get(home))
        .route(&format!("{}/analyze-image", root_path), post(analyze_image))
        .route(
            &format!("{}/api/ingredients/detect", root_path),
            post(detect_ingredients),
        )
        .route(
            &format!("{}/api/ingredients/merge", root_path),
            post(merge_ingredients),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_SIZE))
}
