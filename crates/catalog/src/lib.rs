//! # Catalog Crate
//!
//! This crate holds the recipe domain types and the in-memory catalog the
//! rest of the workspace scores against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Recipe, Ingredient, RecipeCatalog, InteractionLog)
//! - **parser**: Load recipes and interaction logs from JSON
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_catalog, load_interactions};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("data/recipes.json"))?;
//! let interactions = load_interactions(Path::new("data/interactions.json"))?;
//!
//! let curry = catalog.get("r1").unwrap();
//! println!("{} has {} ingredients", curry.title, curry.ingredients.len());
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{load_catalog, load_interactions, parse_catalog_json, parse_interactions_json};
pub use types::{Ingredient, InteractionLog, Recipe, RecipeCatalog, RecipeId};
