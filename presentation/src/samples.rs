//! Sample questions offered to users who don't know what to ask.

/// Longer sample questions, one per answer category plus an unmatched one
pub const SAMPLE_QUESTIONS: [&str; 6] = [
    "What is the main object in this image?",
    "What color is the dominant object?",
    "How many people are visible?",
    "What is the setting or location?",
    "What activity is taking place?",
    "What time of day does this appear to be?",
];

/// Short one-click questions
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What is the main object?",
    "How many people are there?",
    "What colors do you see?",
    "What is the setting?",
];
