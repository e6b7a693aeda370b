//! Output formatter trait

use crate::output::console::RenderContext;
use vqa_domain::AnswerResult;

/// Trait for formatting resolved answers
pub trait OutputFormatter {
    /// Format the complete result page
    fn format(&self, ctx: &RenderContext<'_>, result: &AnswerResult) -> String;

    /// Format as JSON
    fn format_json(&self, ctx: &RenderContext<'_>, result: &AnswerResult) -> String;

    /// Format answer only (concise output)
    fn format_answer_only(&self, result: &AnswerResult) -> String;
}
