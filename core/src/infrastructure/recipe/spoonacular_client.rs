use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::CandidateRecipe, ports::RecipeSource, value_objects::RecipeQuery},
};

pub const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

#[derive(Debug, Clone)]
pub struct SpoonacularRecipeSource {
    api_key: String,
    base_url: Url,
    client: Client,
}

impl SpoonacularRecipeSource {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, CoreError> {
        // Trailing slash so `join` appends instead of replacing the last segment
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/'))).map_err(|e| {
            CoreError::Configuration(format!("Invalid Spoonacular base URL {base_url}: {e}"))
        })?;

        Ok(Self {
            api_key,
            base_url,
            client: Client::new(),
        })
    }

    fn search_url(&self, query: &RecipeQuery) -> Result<Url, CoreError> {
        let mut url = self
            .base_url
            .join("recipes/findByIngredients")
            .map_err(|e| CoreError::Configuration(format!("Invalid recipe search URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("ingredients", &query.ingredients.join(","))
            .append_pair("number", &query.number.to_string())
            .append_pair("ranking", &query.ranking.to_string())
            .append_pair("ignorePantry", &query.ignore_pantry.to_string())
            .append_pair("apiKey", &self.api_key);

        Ok(url)
    }
}

impl RecipeSource for SpoonacularRecipeSource {
    #[instrument(skip(self, query), fields(ingredients = query.ingredients.len(), number = query.number))]
    async fn find_by_ingredients(
        &self,
        query: RecipeQuery,
    ) -> Result<Vec<CandidateRecipe>, CoreError> {
        let url = self.search_url(&query)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            // reqwest errors carry the URL, which holds the API key
            let e = e.without_url();
            tracing::error!("Recipe API request failed: {}", e);
            CoreError::ExternalServiceError(format!("Recipe API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Recipe API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Recipe API returned error: {}",
                status
            )));
        }

        let recipes: Vec<CandidateRecipe> = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse recipe response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse recipe response: {}", e))
        })?;

        tracing::debug!(recipes = recipes.len(), "Recipe API answered");

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn query() -> RecipeQuery {
        RecipeQuery {
            ingredients: vec!["rice".to_string(), "garlic".to_string(), "soy sauce".to_string()],
            number: 10,
            ranking: 1,
            ignore_pantry: true,
        }
    }

    #[test]
    fn test_search_url_carries_all_parameters() {
        let source =
            SpoonacularRecipeSource::new("secret".to_string(), DEFAULT_SPOONACULAR_BASE_URL)
                .unwrap();

        let url = source.search_url(&query()).unwrap();
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

        assert_eq!(url.path(), "/recipes/findByIngredients");
        assert_eq!(params["ingredients"], "rice,garlic,soy sauce");
        assert_eq!(params["number"], "10");
        assert_eq!(params["ranking"], "1");
        assert_eq!(params["ignorePantry"], "true");
        assert_eq!(params["apiKey"], "secret");
    }

    #[test]
    fn test_search_url_keeps_base_path() {
        let source =
            SpoonacularRecipeSource::new("k".to_string(), "http://localhost:8080/proxy/").unwrap();

        let url = source.search_url(&query()).unwrap();

        assert_eq!(url.path(), "/proxy/recipes/findByIngredients");
    }

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        let result = SpoonacularRecipeSource::new("k".to_string(), "not a url");
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_response_shape_deserializes() {
        let body = r#"[{
            "id": 632660,
            "title": "Apricot Glazed Apple Tart",
            "image": "https://img.spoonacular.com/recipes/632660-312x231.jpg",
            "imageType": "jpg",
            "usedIngredientCount": 1,
            "missedIngredientCount": 2,
            "missedIngredients": [
                {"id": 1001, "amount": 2.0, "unit": "tbsp", "aisle": "Milk, Eggs, Other Dairy",
                 "name": "butter", "original": "2 tbsp butter", "image": "https://img.spoonacular.com/ingredients_100x100/butter.png"},
                {"id": 2010, "amount": 1.0, "unit": "tsp", "aisle": null, "name": "cinnamon"}
            ],
            "usedIngredients": [
                {"id": 9003, "name": "apples", "aisle": "Produce"}
            ],
            "unusedIngredients": [],
            "likes": 9
        }]"#;

        let recipes: Vec<CandidateRecipe> = serde_json::from_str(body).unwrap();

        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];
        assert_eq!(recipe.id, 632660);
        assert_eq!(recipe.missed_ingredient_count, 2);
        assert_eq!(recipe.missing_ingredients.len(), 2);
        assert_eq!(recipe.missing_ingredients[1].aisle, None);
        assert_eq!(
            recipe.missing_ingredients[0].original.as_deref(),
            Some("2 tbsp butter")
        );
        assert_eq!(recipe.used_ingredients[0].name, "apples");
    }
}
