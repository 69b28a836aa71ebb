use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::value_objects::{DetectIngredientsInput, MergeIngredientsInput},
};

/// LLM Client trait for calling vision models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw text the model produced for the prompt and image.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for building the ingredient list a user edits
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    /// Detects ingredients on a photo and appends the new ones to `existing`.
    fn detect_ingredients(
        &self,
        input: DetectIngredientsInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn merge_ingredients(&self, input: MergeIngredientsInput) -> Vec<String>;
}
