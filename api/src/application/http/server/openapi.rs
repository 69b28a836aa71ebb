use utoipa::OpenApi;

use crate::application::http::{
    health::HealthApiDoc, ingredient::router::IngredientApiDoc, recipe::router::RecipeApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FridgeChef API",
        description = "Detect ingredients on a photo and find recipes you can cook with them"
    ),
    nest(
        (path = "/api/ingredients", api = IngredientApiDoc),
        (path = "/api/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc)
    ),
    components(schemas(ApiErrorResponse))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths_are_documented() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/api/ingredients/detect"));
        assert!(paths.iter().any(|p| *p == "/api/ingredients/merge"));
        assert!(paths.iter().any(|p| *p == "/api/recipes/search"));
        assert!(paths.iter().any(|p| *p == "/health/live"));
    }
}
