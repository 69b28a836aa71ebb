pub mod get_recipes;
pub mod search_recipes;
