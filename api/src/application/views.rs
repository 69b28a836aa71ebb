use fridgechef_core::domain::recipe::entities::PartitionResult;
use tera::{Context, Tera};

const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
const MACROS_TEMPLATE: &str = include_str!("../../templates/macros.html");
const INGREDIENTS_TEMPLATE: &str = include_str!("../../templates/ingredients.html");
const RECIPES_TEMPLATE: &str = include_str!("../../templates/recipes.html");

/// Server-rendered pages
pub struct Views {
    template_engine: Tera,
    root_path: String,
}

impl Views {
    pub fn new(root_path: &str) -> Result<Self, tera::Error> {
        let mut template_engine = Tera::default();

        template_engine.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("macros.html", MACROS_TEMPLATE),
            ("ingredients.html", INGREDIENTS_TEMPLATE),
            ("recipes.html", RECIPES_TEMPLATE),
        ])?;

        Ok(Self {
            template_engine,
            root_path: root_path.to_string(),
        })
    }

    /// Ingredient editing page
    pub fn ingredients(&self, ingredients: &[String]) -> Result<String, tera::Error> {
        let mut context = self.context();
        context.insert("ingredients", ingredients);

        self.template_engine.render("ingredients.html", &context)
    }

    /// Recipe results page
    pub fn recipes(
        &self,
        ingredients: &[String],
        result: &PartitionResult,
    ) -> Result<String, tera::Error> {
        let mut context = self.context();
        context.insert("ingredients", ingredients);
        context.insert("result", result);

        self.template_engine.render("recipes.html", &context)
    }

    fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("root_path", &self.root_path);
        context
    }
}

#[cfg(test)]
mod tests {
    use fridgechef_core::domain::recipe::entities::{ClassifiedRecipe, IngredientRef};

    use super::*;

    fn ingredient(name: &str, aisle: &str) -> IngredientRef {
        IngredientRef {
            id: 1,
            name: name.to_string(),
            aisle: Some(aisle.to_string()),
            image: None,
            original: None,
        }
    }

    #[test]
    fn test_empty_ingredient_page_shows_placeholder() {
        let views = Views::new("").unwrap();

        let html = views.ingredients(&[]).unwrap();

        assert!(html.contains("empty-state"));
        assert!(html.contains(r#"action="/analyze-image""#));
    }

    #[test]
    fn test_ingredient_names_are_escaped() {
        let views = Views::new("/chef").unwrap();

        let html = views
            .ingredients(&["<b>egg</b>".to_string(), "milk".to_string()])
            .unwrap();

        assert!(html.contains("&lt;b&gt;egg&lt;"));
        assert!(!html.contains("<b>egg"));
        assert!(html.contains("milk"));
        // root path is escaped like any other value
        assert!(html.contains("chef/analyze-image"));
    }

    #[test]
    fn test_recipe_page_lists_both_buckets() {
        let views = Views::new("").unwrap();
        let result = PartitionResult {
            ready_to_cook: vec![ClassifiedRecipe {
                id: 1,
                title: "Simple Garlic Rice".to_string(),
                image: String::new(),
                used: vec![ingredient("rice", "Pasta and Rice")],
                missing: vec![],
                optional: vec![ingredient("salt", "Spices and Seasonings")],
            }],
            shopping_required: vec![ClassifiedRecipe {
                id: 2,
                title: "Eggplant Pizzette".to_string(),
                image: String::new(),
                used: vec![],
                missing: vec![ingredient("eggplant", "Produce"), ingredient("basil", "Produce")],
                optional: vec![],
            }],
        };

        let html = views.recipes(&["rice".to_string()], &result).unwrap();

        assert!(html.contains("Simple Garlic Rice"));
        assert!(html.contains("Pantry staples: salt"));
        assert!(html.contains("Eggplant Pizzette"));
        assert!(html.contains("To buy: eggplant, basil"));
    }

    #[test]
    fn test_recipe_page_without_results() {
        let views = Views::new("").unwrap();

        let html = views
            .recipes(&["rice".to_string()], &PartitionResult::default())
            .unwrap();

        assert!(html.contains("Nothing you can cook"));
        assert!(html.contains("No recipes within a short shopping trip"));
    }
}
