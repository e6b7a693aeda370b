//! CLI entrypoint for the VQA demo
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
#[cfg(feature = "http-provider")]
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
#[cfg(not(feature = "http-provider"))]
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use vqa_application::{InferenceProvider, ResolveAnswerInput, ResolveAnswerUseCase};
use vqa_domain::{Question, ResolverMode};
use vqa_infrastructure::{ConfigLoader, FileConfig, ImageFileLoader, StdRandomSource};
use vqa_presentation::output::console::RenderContext;
use vqa_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormat, ProgressReporter, QUICK_QUESTIONS,
    SAMPLE_QUESTIONS, SimpleProgress,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.samples {
        print_samples();
        return Ok(ExitCode::SUCCESS);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration, then let CLI flags win
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("invalid configuration")?;

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting VQA demo");

    let output = output_config(&cli, &config);
    if !output.color {
        colored::control::set_override(false);
    }

    // Reject empty questions before anything reaches the resolver
    let question = match cli.question.as_deref().map(Question::try_new) {
        Some(Ok(question)) => question,
        Some(Err(e)) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            return Ok(ExitCode::FAILURE);
        }
        None => {
            eprintln!(
                "{}",
                ConsoleFormatter::format_error(&"a question is required (try --samples for ideas)")
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let image = match cli.image.as_deref().map(ImageFileLoader::load).transpose() {
        Ok(image) => image,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    // === Dependency Injection ===
    let cancel = CancellationToken::new();
    let mut use_case = ResolveAnswerUseCase::new(Box::new(StdRandomSource::new(
        config.resolver.seed,
    )))
    .with_params(config.resolver_params())
    .with_cancellation(cancel.clone());

    if let Some(provider) = build_provider(&config)? {
        use_case = use_case.with_provider(provider);
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let mut input = ResolveAnswerInput::new(question.content()).with_mode(config.resolver.mode);
    if let Some(image) = &image {
        input = input.with_image(image.clone());
    }

    let result = if output.show_progress && cli.verbose > 0 {
        // Spinner redraws would interleave with log lines
        use_case.execute_with_progress(input, &SimpleProgress).await
    } else if output.show_progress {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    } else {
        use_case.execute(input).await
    };

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    // Output results
    let ctx = RenderContext::new(question.content())
        .with_image(image.as_ref())
        .with_explanation(output.show_explanation);
    let rendered = match output.format {
        OutputFormat::Full => ConsoleFormatter::format(&ctx, &result),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&ctx, &result),
    };

    println!("{}", rendered);

    Ok(ExitCode::SUCCESS)
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(mode) = cli.mode {
        config.resolver.mode = mode.into();
    }
    if let Some(seed) = cli.seed {
        config.resolver.seed = Some(seed);
    }
    if let Some(endpoint) = &cli.endpoint {
        config.provider.endpoint = Some(endpoint.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.provider.timeout_seconds = Some(timeout);
    }
}

fn output_config(cli: &Cli, config: &FileConfig) -> OutputConfig {
    let format = cli
        .output
        .or(config.output.format.map(OutputFormat::from))
        .unwrap_or_default();

    OutputConfig {
        format,
        color: config.output.color && !cli.no_color,
        show_explanation: config.output.show_explanation && !cli.no_explanation,
        // JSON goes to pipes; keep stderr quiet there too
        show_progress: !cli.quiet && format != OutputFormat::Json,
    }
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr, or to `log_file` when one is configured.
fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(file) => {
            let appender = log_file_appender(file)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Open `file` for appending, creating its directory when missing
fn log_file_appender(file: &str) -> Result<RollingFileAppender> {
    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid log file path: {file}"))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .with_context(|| format!("cannot open log file {file}"))
}

/// Construct the inference provider once for the whole process
#[cfg(feature = "http-provider")]
fn build_provider(config: &FileConfig) -> Result<Option<Arc<dyn InferenceProvider>>> {
    let Some(endpoint) = &config.provider.endpoint else {
        return Ok(None);
    };
    if config.resolver.mode == ResolverMode::Mock {
        return Ok(None);
    }

    let provider = vqa_infrastructure::HttpInferenceProvider::new(
        endpoint.as_str(),
        config.provider.model.as_str(),
        config.provider.timeout().map(|t| t + Duration::from_secs(1)),
    )?
    .with_api_key(config.provider.api_key());

    info!("Using inference endpoint {}", provider.endpoint());
    Ok(Some(Arc::new(provider)))
}

#[cfg(not(feature = "http-provider"))]
fn build_provider(config: &FileConfig) -> Result<Option<Arc<dyn InferenceProvider>>> {
    if config.provider.endpoint.is_some() && config.resolver.mode != ResolverMode::Mock {
        warn!("Built without the http-provider feature; ignoring provider.endpoint");
    }
    Ok(None)
}

fn print_samples() {
    println!("Sample questions:");
    for question in SAMPLE_QUESTIONS {
        println!("  - {}", question);
    }
    println!();
    println!("Quick questions:");
    for question in QUICK_QUESTIONS {
        println!("  - {}", question);
    }
}
