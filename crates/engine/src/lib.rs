//! Engine crate for the PlateRecs recommendation engine.
//!
//! This crate contains the facade that wires the profile builder and the
//! scorer together over a shared catalog.

pub mod recommender;

pub use recommender::{RecipeRecommendation, RecommendationEngine};
