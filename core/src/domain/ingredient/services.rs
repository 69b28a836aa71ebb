use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        helpers::{merge_ingredients, normalize_ingredient_names, parse_ingredient_list},
        ports::{IngredientService, LLMClient},
        schema::{INGREDIENT_DETECTION_PROMPT, get_ingredient_list_schema},
        value_objects::{DetectIngredientsInput, MergeIngredientsInput},
    },
    recipe::ports::RecipeSource,
};

impl<LLM, RS> IngredientService for Service<LLM, RS>
where
    LLM: LLMClient,
    RS: RecipeSource,
{
    #[instrument(skip(self, input), fields(mime_type = %input.mime_type, image_bytes = input.image_data.len()))]
    async fn detect_ingredients(
        &self,
        input: DetectIngredientsInput,
    ) -> Result<Vec<String>, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid);
        }

        let raw_response = self
            .llm_client
            .generate_with_image(
                INGREDIENT_DETECTION_PROMPT.to_string(),
                input.image_data,
                input.mime_type,
                get_ingredient_list_schema(),
            )
            .await?;

        // An unreadable answer means nothing was recognised
        let detected = parse_ingredient_list(&raw_response).unwrap_or_else(|| {
            warn!(
                response_len = raw_response.len(),
                "LLM response is not an ingredient list, treating as empty"
            );
            Vec::new()
        });

        let existing = normalize_ingredient_names(input.existing);
        let merged = merge_ingredients(&existing, &detected);

        info!(
            existing = existing.len(),
            detected = detected.len(),
            merged = merged.len(),
            "Ingredients detected"
        );

        Ok(merged)
    }

    fn merge_ingredients(&self, input: MergeIngredientsInput) -> Vec<String> {
        merge_ingredients(
            &normalize_ingredient_names(input.existing),
            &normalize_ingredient_names(input.detected),
        )
    }
}
