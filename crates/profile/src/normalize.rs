//! Heuristic normalizers for free-text recipe fields.
//!
//! These are pure, stateless helpers shared by the aggregator (when
//! building a profile) and the scorer (when classifying a candidate). Both
//! sides must bucket identically or time/servings matching falls apart, so
//! the marker lists and their evaluation order live here and nowhere else.
//!
//! ## Algorithm
//! Each normalizer lowercases its input and checks the buckets in a fixed
//! order; the first bucket with any marker found as a substring wins. The
//! substring checks are deliberately naive: "150 minutes" contains "15" and
//! classifies as Quick, "12 servings" contains "1" and classifies as
//! OneToTwo. That is the app's shipped behavior and recipe ranking is
//! calibrated against it, so it is preserved as-is rather than tightened to
//! word-boundary or numeric parsing.

use crate::types::{Cuisine, ServingsBand, TimeCategory};

const QUICK_MARKERS: [&str; 4] = ["< 15", "15", "10", "quick"];
const MEDIUM_MARKERS: [&str; 4] = ["20", "25", "30", "medium"];
const LONG_MARKERS: [&str; 7] = ["35", "40", "45", "50", "60", ">", "long"];

const ONE_TO_TWO_MARKERS: [&str; 2] = ["1", "2"];
const THREE_TO_FOUR_MARKERS: [&str; 2] = ["3", "4"];
const FIVE_PLUS_MARKERS: [&str; 3] = ["5", "6", "+"];

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

/// Bucket a free-text cooking time ("30 minutes", "< 15 min", "1 hour").
///
/// Returns `None` when no bucket matches; an unclassified time never
/// matches a profile.
pub fn normalize_cooking_time(raw: &str) -> Option<TimeCategory> {
    let text = raw.to_lowercase();
    if contains_any(&text, &QUICK_MARKERS) {
        Some(TimeCategory::Quick)
    } else if contains_any(&text, &MEDIUM_MARKERS) {
        Some(TimeCategory::Medium)
    } else if contains_any(&text, &LONG_MARKERS) {
        Some(TimeCategory::Long)
    } else {
        None
    }
}

/// Bucket a free-text servings count ("4 servings", "serves 2").
pub fn normalize_servings(raw: &str) -> Option<ServingsBand> {
    let text = raw.to_lowercase();
    if contains_any(&text, &ONE_TO_TWO_MARKERS) {
        Some(ServingsBand::OneToTwo)
    } else if contains_any(&text, &THREE_TO_FOUR_MARKERS) {
        Some(ServingsBand::ThreeToFour)
    } else if contains_any(&text, &FIVE_PLUS_MARKERS) {
        Some(ServingsBand::FivePlus)
    } else {
        None
    }
}

/// All cuisines named (by substring) inside a single tag.
///
/// A tag can carry more than one cuisine ("Asian Fusion" names only Asian,
/// but a hypothetical "Indian-Chinese" names both).
pub fn cuisines_in_tag(tag: &str) -> impl Iterator<Item = Cuisine> {
    let lowered = tag.to_lowercase();
    Cuisine::ALL
        .into_iter()
        .filter(move |cuisine| lowered.contains(cuisine.marker()))
}
