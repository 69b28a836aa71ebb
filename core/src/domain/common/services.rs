use std::sync::Arc;

use crate::domain::{
    common::RecipeSearchConfig, ingredient::ports::LLMClient, recipe::ports::RecipeSource,
};

/// Application service holding the outbound adapters.
///
/// Feature behaviour lives in the `services` module of each domain, implemented
/// as traits on this struct.
pub struct Service<LLM, RS>
where
    LLM: LLMClient,
    RS: RecipeSource,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) recipe_source: Arc<RS>,
    pub(crate) search: RecipeSearchConfig,
}

impl<LLM, RS> Service<LLM, RS>
where
    LLM: LLMClient,
    RS: RecipeSource,
{
    pub fn new(llm_client: LLM, recipe_source: RS, search: RecipeSearchConfig) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            recipe_source: Arc::new(recipe_source),
            search,
        }
    }
}

impl<LLM, RS> Clone for Service<LLM, RS>
where
    LLM: LLMClient,
    RS: RecipeSource,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            recipe_source: Arc::clone(&self.recipe_source),
            search: self.search.clone(),
        }
    }
}
