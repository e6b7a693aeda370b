//! Static exemplar answers for rule-based resolution

use super::category::AnswerCategory;

const COLOR: &[&str] = &[
    "The dominant color in this image is blue.",
    "I can see red and white colors prominently.",
    "The main colors are green and brown.",
    "There are multiple colors including yellow, orange, and purple.",
];

const PEOPLE_COUNT: &[&str] = &[
    "I can see 2 people in this image.",
    "There are 3 people visible in the scene.",
    "I detect 1 person in the image.",
    "There appear to be 4 people in this photo.",
];

const OBJECT: &[&str] = &[
    "The main object in this image is a car.",
    "I can see a large building as the primary subject.",
    "The central object appears to be a bicycle.",
    "The main focus is on a beautiful tree.",
];

const LOCATION: &[&str] = &[
    "This appears to be taken in a park or outdoor setting.",
    "The location looks like an indoor office or workspace.",
    "This seems to be a residential area with houses.",
    "The setting appears to be a busy city street.",
];

const ACTIVITY: &[&str] = &[
    "The people in the image appear to be walking.",
    "I can see someone riding a bicycle.",
    "The activity shown is people having a conversation.",
    "The scene shows people working at computers.",
];

const OTHER: &[&str] = &[
    "The image shows an everyday scene with several distinct elements.",
    "I can see a mix of foreground subjects and background detail.",
    "Nothing unusual stands out; the scene looks ordinary and calm.",
];

/// Exemplar answers per [`AnswerCategory`]
///
/// Lists are fixed for the lifetime of the process and keep their order, so a
/// seeded random source always picks the same answer for the same index.
pub struct AnswerBank;

impl AnswerBank {
    /// Candidate answers for a category (3 to 4 entries, never empty)
    pub fn candidates(category: AnswerCategory) -> &'static [&'static str] {
        match category {
            AnswerCategory::Color => COLOR,
            AnswerCategory::PeopleCount => PEOPLE_COUNT,
            AnswerCategory::Object => OBJECT,
            AnswerCategory::Location => LOCATION,
            AnswerCategory::Activity => ACTIVITY,
            AnswerCategory::Other => OTHER,
        }
    }

    /// Check whether `answer` is one of the category's exemplars
    pub fn contains(category: AnswerCategory, answer: &str) -> bool {
        Self::candidates(category).contains(&answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_three_to_four_candidates() {
        for category in AnswerCategory::ALL {
            let n = AnswerBank::candidates(category).len();
            assert!((3..=4).contains(&n), "{category} has {n} candidates");
        }
    }

    #[test]
    fn test_candidates_are_non_empty_strings() {
        for category in AnswerCategory::ALL {
            for answer in AnswerBank::candidates(category) {
                assert!(!answer.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_contains() {
        assert!(AnswerBank::contains(
            AnswerCategory::PeopleCount,
            "I detect 1 person in the image."
        ));
        assert!(!AnswerBank::contains(
            AnswerCategory::Color,
            "I detect 1 person in the image."
        ));
    }
}
