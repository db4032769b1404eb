//! The score value object returned for each candidate.

use catalog::RecipeId;

/// Cap on human-readable justifications per score.
pub const MAX_REASONS: usize = 3;

/// Shown when no factor generated a justification (cold start, or a
/// candidate that only matched weakly).
pub const FALLBACK_REASON: &str = "Recommended based on your preferences";

/// One candidate's compatibility with a preference profile.
///
/// Ephemeral value object: built per scoring call, never cached. `score`
/// is in [0, 100]. `reasons` holds at most [`MAX_REASONS`] strings in the
/// order the factors were evaluated (tags, cooking time, cookware,
/// ingredients); servings matching never surfaces a reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationScore {
    pub recipe_id: RecipeId,
    pub score: f32,
    pub reasons: Vec<String>,
}

impl RecommendationScore {
    /// The top justification, or the generic fallback line.
    pub fn primary_reason(&self) -> &str {
        self.reasons
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_REASON)
    }
}
