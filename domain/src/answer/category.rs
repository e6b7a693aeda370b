//! Answer category value object and keyword classifier

use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Bucket a question falls into for rule-based answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerCategory {
    Color,
    PeopleCount,
    Object,
    Location,
    Activity,
    Other,
}

impl AnswerCategory {
    /// Every category, in declaration order
    pub const ALL: [AnswerCategory; 6] = [
        AnswerCategory::Color,
        AnswerCategory::PeopleCount,
        AnswerCategory::Object,
        AnswerCategory::Location,
        AnswerCategory::Activity,
        AnswerCategory::Other,
    ];

    /// Keyword-bearing categories, in matching priority order.
    ///
    /// Keyword sets overlap ("what is the setting?" hits both Object and
    /// Location), so this order is observable and must not change.
    pub const PRIORITY: [AnswerCategory; 5] = [
        AnswerCategory::Color,
        AnswerCategory::PeopleCount,
        AnswerCategory::Object,
        AnswerCategory::Location,
        AnswerCategory::Activity,
    ];

    /// Lower-case keywords that select this category. `Other` has none.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            AnswerCategory::Color => &["color", "colour"],
            AnswerCategory::PeopleCount => &["people", "person", "many", "how many"],
            AnswerCategory::Object => &["object", "thing", "main", "what is"],
            AnswerCategory::Location => &["where", "location", "place", "setting"],
            AnswerCategory::Activity => &["doing", "activity", "action", "happening"],
            AnswerCategory::Other => &[],
        }
    }

    /// Substring match of any keyword against an already lower-cased question
    pub fn matches(&self, normalized_question: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| normalized_question.contains(keyword))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerCategory::Color => "color",
            AnswerCategory::PeopleCount => "people_count",
            AnswerCategory::Object => "object",
            AnswerCategory::Location => "location",
            AnswerCategory::Activity => "activity",
            AnswerCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for AnswerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnswerCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown answer category: {s}"))
    }
}

/// Classify a question by keyword.
///
/// Returns the first category in [`AnswerCategory::PRIORITY`] whose keyword
/// set matches, or `None` when nothing matches. Choosing a category for the
/// `None` case is left to the caller, which owns the random source.
pub fn classify(question: &Question) -> Option<AnswerCategory> {
    let normalized = question.normalized();
    AnswerCategory::PRIORITY
        .into_iter()
        .find(|category| category.matches(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Question {
        Question::try_new(s).unwrap()
    }

    #[test]
    fn test_color_keywords_any_case() {
        for text in [
            "What color is the car?",
            "WHAT COLOUR IS THE SKY",
            "Describe the Colors here",
            "colour?",
        ] {
            assert_eq!(classify(&q(text)), Some(AnswerCategory::Color), "{text}");
        }
    }

    #[test]
    fn test_people_count_in_park() {
        assert_eq!(
            classify(&q("How many people are in the park?")),
            Some(AnswerCategory::PeopleCount)
        );
    }

    #[test]
    fn test_color_beats_people() {
        assert_eq!(
            classify(&q("What color shirt is the person wearing?")),
            Some(AnswerCategory::Color)
        );
    }

    #[test]
    fn test_object_beats_location() {
        // "what is" (Object) and "setting" (Location) both match
        assert_eq!(
            classify(&q("What is the setting?")),
            Some(AnswerCategory::Object)
        );
    }

    #[test]
    fn test_location_and_activity() {
        assert_eq!(
            classify(&q("Where was this taken?")),
            Some(AnswerCategory::Location)
        );
        assert_eq!(
            classify(&q("What are they doing?")),
            Some(AnswerCategory::Activity)
        );
        // "place" hits Location before "activity" is considered
        assert_eq!(
            classify(&q("What activity is taking place?")),
            Some(AnswerCategory::Location)
        );
        assert_eq!(
            classify(&q("What is happening?")),
            Some(AnswerCategory::Object)
        );
    }

    #[test]
    fn test_substring_semantics() {
        // "many" inside "Germany" still counts, as does "main" inside "remains"
        assert_eq!(
            classify(&q("Is this Germany?")),
            Some(AnswerCategory::PeopleCount)
        );
        assert_eq!(
            classify(&q("Nothing remains")),
            Some(AnswerCategory::Object)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify(&q("Is it sunny?")), None);
        assert_eq!(classify(&q("What time of day does this appear to be?")), None);
    }

    #[test]
    fn test_other_never_matches() {
        assert!(!AnswerCategory::Other.matches("anything at all"));
        assert!(!AnswerCategory::PRIORITY.contains(&AnswerCategory::Other));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for category in AnswerCategory::ALL {
            assert_eq!(category.as_str().parse::<AnswerCategory>().unwrap(), category);
        }
        assert!("weather".parse::<AnswerCategory>().is_err());
    }
}
