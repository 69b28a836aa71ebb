use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SearchRecipesRequest {
    #[validate(length(min = 1, max = 100, message = "ingredients must hold between 1 and 100 names"))]
    pub ingredients: Vec<String>,
}

/// Urlencoded form posted by the ingredient page, `ingredients` repeated per name
#[derive(Debug, Deserialize)]
pub struct GetRecipesForm {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_needs_an_ingredient() {
        let empty = SearchRecipesRequest {
            ingredients: vec![],
        };
        let one = SearchRecipesRequest {
            ingredients: vec!["rice".to_string()],
        };

        assert!(empty.validate().is_err());
        assert!(one.validate().is_ok());
    }
}
