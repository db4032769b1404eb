//! # Profile Crate
//!
//! Turns a user's implicit interaction history (likes, favorites, "tried"
//! marks) into a weighted `PreferenceProfile` the scoring crate can rank
//! candidates against.
//!
//! ## Components
//!
//! - **builder**: `ProfileBuilder` / `build_profile` - the aggregation pass
//! - **profile**: `PreferenceProfile` and its query helpers
//! - **normalize**: shared bucketing of free-text time/servings/cuisine
//! - **types**: the category enums (`TimeCategory`, `ServingsBand`, `Cuisine`)
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile::build_profile;
//!
//! let profile = build_profile(&liked_ids, &favorited_recipes, &tried_ids, &catalog);
//! if profile.has_enough_data() {
//!     for (tag, weight) in profile.top_tags(5) {
//!         println!("{tag}: {weight:.1}");
//!     }
//! }
//! ```
//!
//! The whole crate is pure computation: no I/O, no shared state, no
//! failure modes. Degraded input (empty lists, ids missing from the
//! catalog, unclassifiable free text) degrades the affected field to
//! "no signal" instead of erroring.

// Public modules
pub mod builder;
pub mod normalize;
pub mod profile;
pub mod types;

// Re-export commonly used types
pub use builder::{build_profile, ProfileBuilder, SignalWeights};
pub use normalize::{cuisines_in_tag, normalize_cooking_time, normalize_servings};
pub use profile::{PreferenceProfile, MIN_INTERACTIONS};
pub use types::{Cuisine, ServingsBand, TimeCategory};
