//! Console output formatter for answers

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde::Serialize;
use vqa_domain::{AnswerResult, ConfidenceSource, ImageHandle, ResolutionMode};

/// Width of the rendered confidence bar, in columns
pub const CONFIDENCE_BAR_WIDTH: usize = 40;

const EXPLANATION_STEPS: [(&str, &str); 5] = [
    ("Image Processing", "Analyzing visual features and objects"),
    ("Question Understanding", "Processing natural language query"),
    ("Multi-modal Fusion", "Combining visual and textual information"),
    ("Answer Generation", "Producing contextual response"),
    ("Confidence Calculation", "Estimating prediction reliability"),
];

/// Everything the renderer shows next to the answer
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub question: &'a str,
    pub image: Option<&'a ImageHandle>,
    pub show_explanation: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(question: &'a str) -> Self {
        Self {
            question,
            image: None,
            show_explanation: true,
        }
    }

    pub fn with_image(mut self, image: Option<&'a ImageHandle>) -> Self {
        self.image = image;
        self
    }

    pub fn with_explanation(mut self, show: bool) -> Self {
        self.show_explanation = show;
        self
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(flatten)]
    result: &'a AnswerResult,
}

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result page
    pub fn format(ctx: &RenderContext<'_>, result: &AnswerResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Explainable Multi-Modal VQA Demo"));
        output.push('\n');

        if result.mode() == ResolutionMode::RuleBased {
            output.push_str(&format!(
                "{}\n",
                format!("{:^60}", "Demo Mode - Mock Responses Enabled")
                    .red()
                    .bold()
            ));
        }
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), ctx.question));
        let image = ctx
            .image
            .map(|i| i.describe())
            .unwrap_or_else(|| "none".to_string());
        output.push_str(&format!("{} {}\n", "Image:".cyan().bold(), image.dimmed()));

        output.push_str(&Self::section_header("Analysis Results"));
        output.push_str(&format!(
            "\n{} {}\n\n",
            "Answer:".magenta().bold(),
            result.answer()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Confidence Score:".cyan().bold(),
            Self::percent(result.confidence())
        ));
        output.push_str(&format!(
            "{}\n",
            Self::confidence_bar(result.confidence(), CONFIDENCE_BAR_WIDTH)
        ));
        if result.confidence_source() == ConfidenceSource::Decorative {
            output.push_str(&format!(
                "{}\n",
                "(illustrative score, not derived from the model)".dimmed()
            ));
        }

        if ctx.show_explanation {
            output.push_str(&Self::section_header("How the model analyzed this image"));
            output.push('\n');
            for (i, (title, detail)) in EXPLANATION_STEPS.iter().enumerate() {
                output.push_str(&format!("  {}: {}\n", title.bold(), detail));
                if i < EXPLANATION_STEPS.len() - 1 {
                    output.push_str(&format!("  {}\n", "|".dimmed()));
                }
            }
            output.push_str(&format!(
                "\n{}\n",
                "Note: full explainability would add attention heatmaps and reasoning chains."
                    .dimmed()
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(ctx: &RenderContext<'_>, result: &AnswerResult) -> String {
        let output = JsonOutput {
            question: ctx.question,
            image: ctx.image.map(|i| i.describe()),
            result,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format answer only (concise output)
    pub fn format_answer_only(result: &AnswerResult) -> String {
        format!(
            "{} {}\n{} {}\n",
            "Answer:".bold(),
            result.answer(),
            "Confidence:".dimmed(),
            Self::percent(result.confidence())
        )
    }

    /// Format a user-visible error
    pub fn format_error(error: &dyn std::fmt::Display) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    /// Confidence as a percentage with two decimals, e.g. `87.34%`
    pub fn percent(confidence: f64) -> String {
        format!("{:.2}%", confidence * 100.0)
    }

    /// Horizontal bar, `width` columns wide, filled in proportion to `confidence`
    pub fn confidence_bar(confidence: f64, width: usize) -> String {
        let filled = ((confidence.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
        format!(
            "[{}{}]",
            "#".repeat(filled).green(),
            "-".repeat(width - filled).dimmed()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, ctx: &RenderContext<'_>, result: &AnswerResult) -> String {
        Self::format(ctx, result)
    }

    fn format_json(&self, ctx: &RenderContext<'_>, result: &AnswerResult) -> String {
        Self::format_json(ctx, result)
    }

    fn format_answer_only(&self, result: &AnswerResult) -> String {
        Self::format_answer_only(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vqa_domain::{AnswerCategory, ImageFormat};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_percent_two_decimals() {
        assert_eq!(ConsoleFormatter::percent(0.8734), "87.34%");
        assert_eq!(ConsoleFormatter::percent(0.75), "75.00%");
    }

    #[test]
    fn test_confidence_bar_fill() {
        plain();
        assert_eq!(
            ConsoleFormatter::confidence_bar(0.5, 10),
            "[#####-----]"
        );
        assert_eq!(ConsoleFormatter::confidence_bar(1.0, 4), "[####]");
        assert_eq!(ConsoleFormatter::confidence_bar(0.0, 4), "[----]");
        assert_eq!(ConsoleFormatter::confidence_bar(3.0, 4), "[####]");
    }

    #[test]
    fn test_full_output_mock_mode() {
        plain();
        let result = AnswerResult::rule_based(
            AnswerCategory::Color,
            "The dominant color in this image is blue.",
            0.8734,
        );
        let ctx = RenderContext::new("What color is the car?");
        let output = ConsoleFormatter::format(&ctx, &result);

        assert!(output.contains("Demo Mode - Mock Responses Enabled"));
        assert!(output.contains("What color is the car?"));
        assert!(output.contains("The dominant color in this image is blue."));
        assert!(output.contains("87.34%"));
        assert!(output.contains("Image: none"));
        assert!(output.contains("Multi-modal Fusion"));
    }

    #[test]
    fn test_full_output_model_mode_without_explanation() {
        plain();
        let image = ImageHandle::new(vec![0u8], 640, 480, ImageFormat::Jpeg);
        let result = AnswerResult::model_backed("two dogs", 0.91, ConfidenceSource::Model);
        let ctx = RenderContext::new("What is this?")
            .with_image(Some(&image))
            .with_explanation(false);
        let output = ConsoleFormatter::format(&ctx, &result);

        assert!(!output.contains("Demo Mode"));
        assert!(!output.contains("illustrative score"));
        assert!(!output.contains("Multi-modal Fusion"));
        assert!(output.contains("640x480 jpeg"));
        assert!(output.contains("91.00%"));
    }

    #[test]
    fn test_json_output() {
        let result = AnswerResult::rule_based(AnswerCategory::PeopleCount, "I detect 1 person in the image.", 0.8);
        let ctx = RenderContext::new("How many people?");
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&ctx, &result)).unwrap();

        assert_eq!(json["question"], "How many people?");
        assert_eq!(json["answer"], "I detect 1 person in the image.");
        assert_eq!(json["category"], "people_count");
        assert_eq!(json["mode"], "rule_based");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_answer_only_and_error() {
        plain();
        let result = AnswerResult::model_backed("red", 0.5, ConfidenceSource::Decorative);
        assert_eq!(
            ConsoleFormatter::format_answer_only(&result),
            "Answer: red\nConfidence: 50.00%\n"
        );
        assert_eq!(
            ConsoleFormatter::format_error(&"Please enter a question"),
            "Error: Please enter a question"
        );
    }
}
