pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub llm: LLMConfig,
    pub recipe_source: RecipeSourceConfig,
    pub search: RecipeSearchConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct RecipeSourceConfig {
    pub spoonacular_api_key: String,
    pub spoonacular_base_url: String,
    pub use_fixture_recipes: bool,
}

/// Knobs passed to the recipe source and the partitioner on every search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeSearchConfig {
    pub number: u32,
    pub ranking: u8,
    pub ignore_pantry: bool,
    pub max_missing_ingredients: usize,
}

impl Default for RecipeSearchConfig {
    fn default() -> Self {
        Self {
            number: 10,
            ranking: 1,
            ignore_pantry: true,
            max_missing_ingredients: 3,
        }
    }
}
