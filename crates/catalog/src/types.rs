//! Core domain types for the recipe catalog.
//!
//! This module defines the data structures shared by every other crate in
//! the workspace: the `Recipe` entity as the surrounding app stores it, and
//! the `RecipeCatalog` in-memory store that resolves interaction ids back to
//! full recipes.
//!
//! The recipe fields mirror what the app's sync layer delivers: free-text
//! strings for cooking time, cookware, and servings. Nothing here is
//! validated beyond the id - downstream consumers are required to treat
//! empty or unclassifiable fields as "no signal", never as an error.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a recipe.
///
/// Ids come from the app's cloud store and are opaque strings; nothing in
/// this workspace parses or orders them.
pub type RecipeId = String;

/// A single ingredient line on a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Free-text amount ("2 cups", "a pinch"); not used for matching
    #[serde(default)]
    pub quantity: Option<String>,
}

/// A recipe as delivered by the surrounding app.
///
/// Every field except `id` may be absent or empty in real data. The serde
/// defaults make missing JSON keys deserialize to empty collections/strings
/// so a sparse recipe still loads and simply contributes nothing to the
/// factors it lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    /// Free-form labels ("Indian", "Spicy", "Weeknight")
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free text, e.g. "30 minutes" or "< 15 min"
    #[serde(default)]
    pub cooking_time: String,
    /// Free text, e.g. "Pan" or "Dutch Oven"
    #[serde(default)]
    pub cookware: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Free text, e.g. "4 servings"
    #[serde(default)]
    pub servings: String,
}

impl Recipe {
    /// Create a bare recipe with only an id and title.
    ///
    /// Mostly useful in tests; production recipes come from the parser.
    pub fn new(id: impl Into<RecipeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: Vec::new(),
            cooking_time: String::new(),
            cookware: String::new(),
            ingredients: Vec::new(),
            servings: String::new(),
        }
    }
}

/// The set of interaction ids the app has recorded for one user.
///
/// This is the on-disk shape of the three interaction stores (ids only).
/// Callers resolve `favorited` to full `Recipe` values through the catalog
/// before handing the lists to the profile builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionLog {
    #[serde(default)]
    pub liked: Vec<RecipeId>,
    #[serde(default)]
    pub favorited: Vec<RecipeId>,
    #[serde(default)]
    pub tried: Vec<RecipeId>,
}

/// In-memory recipe store with O(1) id lookup.
///
/// Recipes are kept in insertion order so that batch operations over the
/// whole catalog (ranking, search) are deterministic run-to-run; the
/// id-to-index map provides the fast lookups the aggregator needs when
/// resolving interaction ids.
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<RecipeId, usize>,
}

impl RecipeCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of recipes.
    ///
    /// # Returns
    /// * `Err(CatalogError::EmptyId)` if a recipe has an empty id
    /// * `Err(CatalogError::DuplicateId)` if two recipes share an id
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut catalog = Self::new();
        for (index, recipe) in recipes.into_iter().enumerate() {
            if recipe.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            catalog.insert_recipe(recipe)?;
        }
        Ok(catalog)
    }

    /// Insert a single recipe, rejecting duplicate ids.
    pub fn insert_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.by_id.contains_key(&recipe.id) {
            return Err(CatalogError::DuplicateId {
                id: recipe.id.clone(),
            });
        }
        self.by_id.insert(recipe.id.clone(), self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    /// Get a recipe by id.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id).map(|&idx| &self.recipes[idx])
    }

    /// All recipes, in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Case-insensitive substring search over titles.
    pub fn search_title(&self, query: &str) -> Vec<&Recipe> {
        let needle = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe::new(id, title)
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = RecipeCatalog::from_recipes(vec![
            recipe("r1", "Chicken Curry"),
            recipe("r2", "Pad Thai"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("r1").unwrap().title, "Chicken Curry");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = RecipeCatalog::from_recipes(vec![
            recipe("b", "Second Alphabetically"),
            recipe("a", "First Alphabetically"),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = RecipeCatalog::from_recipes(vec![
            recipe("r1", "Chicken Curry"),
            recipe("r1", "Another Curry"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { .. })));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = RecipeCatalog::from_recipes(vec![recipe("", "Nameless")]);
        assert!(matches!(result, Err(CatalogError::EmptyId { index: 0 })));
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let catalog = RecipeCatalog::from_recipes(vec![
            recipe("r1", "Chicken Curry"),
            recipe("r2", "Curried Lentils"),
            recipe("r3", "Pad Thai"),
        ])
        .unwrap();

        let hits = catalog.search_title("curr");
        assert_eq!(hits.len(), 2);
    }
}
