//! Progress reporting while an answer is resolved

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use vqa_application::ResolveProgressNotifier;
use vqa_domain::{AnswerResult, ResolutionMode};

/// Reports progress with an animated spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_message(mode: ResolutionMode) -> &'static str {
        match mode {
            ResolutionMode::RuleBased => "Analyzing image and generating answer...",
            ResolutionMode::ModelBacked => "AI is analyzing your image...",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveProgressNotifier for ProgressReporter {
    fn on_resolve_start(&self, mode: ResolutionMode) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::start_message(mode));
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_provider_request(&self, provider: &str) {
        if let Ok(spinner) = self.spinner.lock() {
            if let Some(pb) = spinner.as_ref() {
                pb.set_message(format!("Waiting for {}...", provider));
            }
        }
    }

    fn on_resolve_complete(&self, result: Option<&AnswerResult>) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) {
            match result {
                Some(_) => pb.finish_with_message(format!("{}", "Analysis complete!".green())),
                None => pb.finish_and_clear(),
            }
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ResolveProgressNotifier for SimpleProgress {
    fn on_resolve_start(&self, mode: ResolutionMode) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::start_message(mode).bold()
        );
    }

    fn on_provider_request(&self, provider: &str) {
        eprintln!("  {} {}", "..".dimmed(), provider);
    }

    fn on_resolve_complete(&self, result: Option<&AnswerResult>) {
        match result {
            Some(_) => eprintln!("  {} done", "v".green()),
            None => eprintln!("  {} failed", "x".red()),
        }
    }
}
