use super::handlers::{
    get_recipes::get_recipes,
    search_recipes::{__path_search_recipes, search_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/get-recipes", root_path), post(get_recipes))
        .route(
            &format!("{}/api/recipes/search", root_path),
            post(search_recipes),
        )
}
