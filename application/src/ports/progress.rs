//! Progress notification port
//!
//! Defines the interface for reporting progress while an answer is resolved.

use vqa_domain::{AnswerResult, ResolutionMode};

/// Callback for progress updates during resolution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ResolveProgressNotifier: Send + Sync {
    /// Called once the resolution path is known
    fn on_resolve_start(&self, mode: ResolutionMode);

    /// Called right before the inference provider is invoked
    fn on_provider_request(&self, _provider: &str) {}

    /// Called when resolution finishes, with the result on success
    fn on_resolve_complete(&self, result: Option<&AnswerResult>);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ResolveProgressNotifier for NoProgress {
    fn on_resolve_start(&self, _mode: ResolutionMode) {}
    fn on_resolve_complete(&self, _result: Option<&AnswerResult>) {}
}
