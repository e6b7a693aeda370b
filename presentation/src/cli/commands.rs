//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vqa_domain::ResolverMode;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header, answer, confidence bar and explanation
    #[default]
    Full,
    /// Only the answer and its confidence
    Answer,
    /// JSON output
    Json,
}

impl From<vqa_domain::OutputFormat> for OutputFormat {
    fn from(format: vqa_domain::OutputFormat) -> Self {
        match format {
            vqa_domain::OutputFormat::Full => OutputFormat::Full,
            vqa_domain::OutputFormat::Answer => OutputFormat::Answer,
            vqa_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Resolution path selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Model when an endpoint is configured, otherwise mock
    Auto,
    /// Keyword-based demo answers, no model
    Mock,
    /// Always ask the inference endpoint
    Model,
}

impl From<ModeArg> for ResolverMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => ResolverMode::Auto,
            ModeArg::Mock => ResolverMode::Mock,
            ModeArg::Model => ResolverMode::Model,
        }
    }
}

/// CLI arguments for vqa-demo
#[derive(Parser, Debug)]
#[command(name = "vqa-demo")]
#[command(author, version, about = "Explainable multi-modal visual question answering demo")]
#[command(long_about = r#"
Ask a question about an image and get an answer with a confidence score.

Two resolution modes exist:
1. model: the question and image are sent to a VQA inference endpoint
2. mock:  the question is bucketed by keyword and a demo answer is returned

Configuration files are loaded from (in priority order):
1. VQA_* environment variables
2. --config <path>     Explicit config file
3. ./vqa.toml          Project-level config
4. ~/.config/vqa-demo/config.toml   Global config

Example:
  vqa-demo --image photo.jpg "What color is the car?"
  vqa-demo --mode mock --seed 7 "How many people are there?"
  vqa-demo --image street.png --endpoint http://localhost:8000/vqa "What is happening?"
"#)]
pub struct Cli {
    /// The question to ask about the image
    pub question: Option<String>,

    /// Image to ask about (jpg, jpeg, png, bmp)
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Resolution mode (overrides config)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for reproducible mock answers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Inference endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Inference timeout in seconds (overrides config)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Hide the analysis explanation
    #[arg(long)]
    pub no_explanation: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List sample questions and exit
    #[arg(long)]
    pub samples: bool,
}
