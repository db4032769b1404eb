//! Category enums the free-text recipe fields are bucketed into.
//!
//! Cooking time, servings, and cuisine all arrive as free text ("30
//! minutes", "4 servings", a tag like "South Indian"). Matching raw strings
//! against each other would make almost nothing line up, so both the
//! aggregator and the scorer first reduce them to the small fixed
//! vocabularies defined here. An unclassifiable string maps to `None` and
//! can never match anything.

use std::fmt;

/// Cooking-time bucket a recipe's free-text duration classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeCategory {
    Quick,
    Medium,
    Long,
}

impl fmt::Display for TimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeCategory::Quick => "quick",
            TimeCategory::Medium => "medium",
            TimeCategory::Long => "long",
        };
        write!(f, "{label}")
    }
}

/// Servings bucket a recipe's free-text yield classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServingsBand {
    OneToTwo,
    ThreeToFour,
    FivePlus,
}

impl fmt::Display for ServingsBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServingsBand::OneToTwo => "1-2",
            ServingsBand::ThreeToFour => "3-4",
            ServingsBand::FivePlus => "5+",
        };
        write!(f, "{label}")
    }
}

/// The fixed cuisine vocabulary tags are matched against.
///
/// Detection is by substring: a tag like "South Indian Breakfast" carries
/// `Indian`, and "Asian Fusion" carries `Asian`. The vocabulary is closed;
/// tags that name no known cuisine simply contribute none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cuisine {
    Italian,
    Chinese,
    Japanese,
    Thai,
    Indian,
    Mexican,
    French,
    Mediterranean,
    American,
    Asian,
    Korean,
    Vietnamese,
    Greek,
    Spanish,
    MiddleEastern,
    Latin,
    Caribbean,
}

impl Cuisine {
    /// Every cuisine, in vocabulary order.
    pub const ALL: [Cuisine; 17] = [
        Cuisine::Italian,
        Cuisine::Chinese,
        Cuisine::Japanese,
        Cuisine::Thai,
        Cuisine::Indian,
        Cuisine::Mexican,
        Cuisine::French,
        Cuisine::Mediterranean,
        Cuisine::American,
        Cuisine::Asian,
        Cuisine::Korean,
        Cuisine::Vietnamese,
        Cuisine::Greek,
        Cuisine::Spanish,
        Cuisine::MiddleEastern,
        Cuisine::Latin,
        Cuisine::Caribbean,
    ];

    /// The lowercase marker searched for inside lowercased tags.
    pub fn marker(&self) -> &'static str {
        match self {
            Cuisine::Italian => "italian",
            Cuisine::Chinese => "chinese",
            Cuisine::Japanese => "japanese",
            Cuisine::Thai => "thai",
            Cuisine::Indian => "indian",
            Cuisine::Mexican => "mexican",
            Cuisine::French => "french",
            Cuisine::Mediterranean => "mediterranean",
            Cuisine::American => "american",
            Cuisine::Asian => "asian",
            Cuisine::Korean => "korean",
            Cuisine::Vietnamese => "vietnamese",
            Cuisine::Greek => "greek",
            Cuisine::Spanish => "spanish",
            Cuisine::MiddleEastern => "middle eastern",
            Cuisine::Latin => "latin",
            Cuisine::Caribbean => "caribbean",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}
