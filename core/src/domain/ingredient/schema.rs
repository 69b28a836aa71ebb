use serde_json::json;

pub const INGREDIENT_DETECTION_PROMPT: &str = "Identify every food ingredient visible in this \
image. Respond with a JSON array of short, lower-case ingredient names (for example \
[\"eggs\", \"tomato\", \"cheddar cheese\"]). Do not include quantities, brands or \
cooked dishes. Respond with [] if no food is visible.";

/// Returns the JSON schema for ingredient detection LLM responses
pub fn get_ingredient_list_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": { "type": "string" }
    })
}
