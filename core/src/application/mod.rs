use tracing::{info, warn};

use crate::{
    domain::common::{AppConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        llm::GeminiLLMClient,
        recipe::{FixtureRecipeSource, RecipeSourceClient, SpoonacularRecipeSource},
    },
};

pub type FridgeChefService = Service<GeminiLLMClient, RecipeSourceClient>;

pub fn create_service(config: AppConfig) -> Result<FridgeChefService, CoreError> {
    if config.llm.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is empty, image analysis requests will fail");
    }

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );

    let recipe_source = if config.recipe_source.use_fixture_recipes {
        info!("Using bundled fixture recipes");
        RecipeSourceClient::Fixture(FixtureRecipeSource::load()?)
    } else {
        if config.recipe_source.spoonacular_api_key.is_empty() {
            return Err(CoreError::Configuration(
                "SPOONACULAR_API_KEY is required unless fixture recipes are enabled".to_string(),
            ));
        }

        RecipeSourceClient::Spoonacular(SpoonacularRecipeSource::new(
            config.recipe_source.spoonacular_api_key,
            &config.recipe_source.spoonacular_base_url,
        )?)
    };

    Ok(Service::new(llm_client, recipe_source, config.search))
}
