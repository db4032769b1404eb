//! JSON loaders for recipe catalogs and interaction logs.
//!
//! The app's sync layer exports both files as plain JSON arrays/objects:
//! - `recipes.json`: an array of recipe objects (camelCase keys)
//! - `interactions.json`: `{ "liked": [...], "favorited": [...], "tried": [...] }`
//!
//! Parsing is split into `parse_*` functions that take a string slice (used
//! directly by tests) and `load_*` wrappers that add file I/O and path
//! context to errors.

use crate::error::{CatalogError, Result};
use crate::types::{InteractionLog, Recipe, RecipeCatalog};
use std::fs;
use std::path::Path;

/// Parse a catalog from a JSON array of recipes.
pub fn parse_catalog_json(json: &str) -> Result<RecipeCatalog> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    RecipeCatalog::from_recipes(recipes)
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<RecipeCatalog> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let recipes: Vec<Recipe> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    RecipeCatalog::from_recipes(recipes)
}

/// Parse an interaction log from JSON.
///
/// Missing keys deserialize to empty lists, so a log that only ever
/// recorded likes still parses.
pub fn parse_interactions_json(json: &str) -> Result<InteractionLog> {
    Ok(serde_json::from_str(json)?)
}

/// Load an interaction log from a JSON file.
pub fn load_interactions(path: &Path) -> Result<InteractionLog> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {
            "id": "r1",
            "title": "Chicken Curry",
            "tags": ["Indian", "Spicy", "Chicken"],
            "cookingTime": "30 minutes",
            "cookware": "Pan",
            "ingredients": [
                { "name": "Chicken", "quantity": "500g" },
                { "name": "Onion" }
            ],
            "servings": "4 servings"
        },
        {
            "id": "r2",
            "title": "Plain Rice"
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 2);

        let curry = catalog.get("r1").unwrap();
        assert_eq!(curry.tags, vec!["Indian", "Spicy", "Chicken"]);
        assert_eq!(curry.cooking_time, "30 minutes");
        assert_eq!(curry.ingredients[0].quantity.as_deref(), Some("500g"));
        assert_eq!(curry.ingredients[1].quantity, None);
    }

    #[test]
    fn test_sparse_recipe_defaults_to_empty_fields() {
        let catalog = parse_catalog_json(CATALOG_JSON).unwrap();
        let rice = catalog.get("r2").unwrap();

        assert!(rice.tags.is_empty());
        assert!(rice.cooking_time.is_empty());
        assert!(rice.cookware.is_empty());
        assert!(rice.ingredients.is_empty());
        assert!(rice.servings.is_empty());
    }

    #[test]
    fn test_parse_interactions_with_missing_keys() {
        let log = parse_interactions_json(r#"{ "liked": ["r1", "r2"] }"#).unwrap();
        assert_eq!(log.liked.len(), 2);
        assert!(log.favorited.is_empty());
        assert!(log.tried.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_catalog_json("not json").is_err());
        assert!(parse_interactions_json("[]").is_err());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_catalog(Path::new("/nonexistent/recipes.json")).unwrap_err();
        assert!(err.to_string().contains("recipes.json"));
    }
}
