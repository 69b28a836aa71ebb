use clap::{ArgAction, Args as ClapArgs, Parser};
use fridgechef_core::{
    domain::common::{AppConfig, LLMConfig, RecipeSearchConfig, RecipeSourceConfig},
    infrastructure::{
        llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
        recipe::spoonacular_client::DEFAULT_SPOONACULAR_BASE_URL,
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "fridgechef", version, about = "Turn a photo of your fridge into recipes")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub recipes: RecipeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix added in front of every route, e.g. "/fridgechef"
    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "public-dir", env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: String,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LLMArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecipeArgs {
    #[arg(
        long = "spoonacular-api-key",
        env = "SPOONACULAR_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub spoonacular_api_key: String,

    #[arg(
        long = "spoonacular-base-url",
        env = "SPOONACULAR_BASE_URL",
        default_value = DEFAULT_SPOONACULAR_BASE_URL
    )]
    pub spoonacular_base_url: String,

    /// Number of candidate recipes requested per search
    #[arg(long = "recipe-count", env = "RECIPE_COUNT", default_value_t = 10)]
    pub recipe_count: u32,

    /// 1 maximizes used ingredients, 2 minimizes missing ones
    #[arg(long = "recipe-ranking", env = "RECIPE_RANKING", default_value_t = 1)]
    pub recipe_ranking: u8,

    #[arg(
        long = "ignore-pantry",
        env = "IGNORE_PANTRY",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub ignore_pantry: bool,

    /// Recipes missing more required ingredients than this are hidden
    #[arg(long = "max-missing-ingredients", env = "MAX_MISSING_INGREDIENTS", default_value_t = 3)]
    pub max_missing_ingredients: usize,

    /// Serve bundled recipes instead of calling Spoonacular
    #[arg(long = "use-fixture-recipes", env = "USE_FIXTURE_RECIPES")]
    pub use_fixture_recipes: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            recipe_source: RecipeSourceConfig {
                spoonacular_api_key: args.recipes.spoonacular_api_key,
                spoonacular_base_url: args.recipes.spoonacular_base_url,
                use_fixture_recipes: args.recipes.use_fixture_recipes,
            },
            search: RecipeSearchConfig {
                number: args.recipes.recipe_count,
                ranking: args.recipes.recipe_ranking,
                ignore_pantry: args.recipes.ignore_pantry,
                max_missing_ingredients: args.recipes.max_missing_ingredients,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_map_to_search_config() {
        let args = Args::parse_from(["fridgechef", "--use-fixture-recipes"]);
        let config = AppConfig::from(args);

        assert!(config.recipe_source.use_fixture_recipes);
        assert_eq!(config.search, RecipeSearchConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "fridgechef",
            "--port",
            "8080",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--max-missing-ingredients",
            "5",
            "--ignore-pantry",
            "false",
            "--metrics-enabled",
            "false",
        ]);

        assert_eq!(args.server.port, 8080);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
        assert!(!args.server.metrics_enabled);

        let config = AppConfig::from(args);
        assert_eq!(config.search.max_missing_ingredients, 5);
        assert!(!config.search.ignore_pantry);
    }
}
