/// Aisle keywords marking pantry staples. Matched as lower-case substrings.
pub const OPTIONAL_AISLE_KEYWORDS: [&str; 6] =
    ["spice", "season", "oil", "vinegar", "baking", "condiment"];

pub fn is_optional_aisle(aisle: Option<&str>) -> bool {
    let Some(aisle) = aisle.filter(|aisle| !aisle.is_empty()) else {
        return false;
    };

    let aisle = aisle.to_lowercase();
    OPTIONAL_AISLE_KEYWORDS
        .iter()
        .any(|keyword| aisle.contains(keyword))
}

/// Parameters sent to the recipe source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub ingredients: Vec<String>,
    pub number: u32,
    pub ranking: u8,
    pub ignore_pantry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindRecipesInput {
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_aisle_is_required() {
        assert!(!is_optional_aisle(None));
        assert!(!is_optional_aisle(Some("")));
    }

    #[test]
    fn test_pantry_aisles_are_optional() {
        assert!(is_optional_aisle(Some("Oil, Vinegar, Salad Dressing")));
        assert!(is_optional_aisle(Some("Spices and Seasonings")));
        assert!(is_optional_aisle(Some("Baking")));
        assert!(is_optional_aisle(Some("BAKING")));
        assert!(is_optional_aisle(Some("Condiments")));
        assert!(is_optional_aisle(Some("Ethnic Foods;Spices")));
    }

    #[test]
    fn test_fresh_aisles_are_required() {
        assert!(!is_optional_aisle(Some("Produce")));
        assert!(!is_optional_aisle(Some("Meat")));
        assert!(!is_optional_aisle(Some("Cheese")));
        assert!(!is_optional_aisle(Some("Milk, Eggs, Other Dairy")));
    }

    #[test]
    fn test_substring_match_is_not_whole_word() {
        // "boiled" contains "oil"
        assert!(is_optional_aisle(Some("Boiled Goods")));
    }
}
