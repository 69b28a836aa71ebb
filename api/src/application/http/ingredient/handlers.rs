pub mod analyze_image;
pub mod detect_ingredients;
pub mod home;
pub mod merge_ingredients;
