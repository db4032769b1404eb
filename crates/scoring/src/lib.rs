//! # Scoring Crate
//!
//! Scores candidate recipes against a `PreferenceProfile` and ranks them.
//!
//! ## Components
//!
//! - **scorer**: `RecipeScorer` - the five-factor scoring pass
//! - **score**: `RecommendationScore` value object
//! - **rank**: batch ranking (`sort_by_recommendation`)
//! - **weights**: `ScoringWeights` configuration
//!
//! ## Example Usage
//!
//! ```ignore
//! use scoring::RecipeScorer;
//!
//! let scorer = RecipeScorer::new();
//! let ranked = scorer.sort_by_recommendation(candidates, &profile);
//! for recipe in ranked.iter().take(10) {
//!     println!("{} - {}", recipe.title, scorer.recommendation_reason(recipe, &profile));
//! }
//! ```
//!
//! Like the profile crate, everything here is pure computation with no
//! failure modes: a candidate that shares nothing with the profile scores
//! 0, it does not error.

// Public modules
pub mod rank;
pub mod score;
pub mod scorer;
pub mod weights;

// Re-export main types
pub use score::{RecommendationScore, FALLBACK_REASON, MAX_REASONS};
pub use scorer::RecipeScorer;
pub use weights::{ScoringWeights, HIGHLY_RECOMMENDED_THRESHOLD};
