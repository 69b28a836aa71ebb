use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::value_objects::is_optional_aisle;

/// Ingredient entry as returned by the recipe source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientRef {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub aisle: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Amount line as written in the recipe, e.g. "2 cloves garlic"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl IngredientRef {
    pub fn is_optional(&self) -> bool {
        is_optional_aisle(self.aisle.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecipe {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub used_ingredients: Vec<IngredientRef>,
    #[serde(default, rename = "missedIngredients", alias = "missingIngredients")]
    pub missing_ingredients: Vec<IngredientRef>,
}

/// Candidate recipe with its missing ingredients split by aisle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedRecipe {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub used: Vec<IngredientRef>,
    /// Required ingredients the user has to buy
    pub missing: Vec<IngredientRef>,
    /// Pantry staples that are missing but do not block cooking
    pub optional: Vec<IngredientRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartitionResult {
    pub ready_to_cook: Vec<ClassifiedRecipe>,
    pub shopping_required: Vec<ClassifiedRecipe>,
}

impl PartitionResult {
    pub fn is_empty(&self) -> bool {
        self.ready_to_cook.is_empty() && self.shopping_required.is_empty()
    }
}
