use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use hw2sw::application::dto::{DiffFormat, OutputFormat};
use hw2sw::architecture_generation::domain::ProgrammingLanguage;

/// Turn hardware block diagrams into layered software architectures
#[derive(Parser, Debug)]
#[command(name = "hw2sw")]
#[command(version)]
#[command(about = "Turn hardware block diagrams into layered software architectures and versioned requirements", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ./hw2sw.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a diagram image with the LLM and assemble its architecture
    Analyze(AnalyzeArgs),
    /// Assemble an architecture from a saved analysis JSON (no network)
    Assemble(AssembleArgs),
    /// Compare two requirement revisions and list the impacted modules
    Diff(DiffArgs),
    /// Generate API stubs for one module of an architecture document
    GenerateApi(GenerateApiArgs),
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LlmArgs {
    /// Model name (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum tokens of each completion (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tokens: Option<u32>,

    /// Sampling temperature between 0.0 and 2.0 (overrides config)
    #[arg(long, value_parser = parse_temperature)]
    pub temperature: Option<f32>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Hardware block diagram image (JPEG)
    #[arg(short, long, value_name = "PATH")]
    pub image: PathBuf,

    /// System requirements text, or @FILE to read it from a file
    #[arg(short, long, value_name = "TEXT|@FILE")]
    pub requirements: String,

    /// Output format: mermaid or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Analysis JSON (hardwareComponents, suggestedArchitecture, requirements)
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output format: mermaid or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Previous requirement list (JSON array)
    pub old: PathBuf,

    /// Current requirement list (JSON array)
    #[arg(required_unless_present = "edits")]
    pub new: Option<PathBuf>,

    /// Requirement edits (JSON array) applied on top of NEW, or OLD when NEW is omitted
    #[arg(long, value_name = "PATH")]
    pub edits: Option<PathBuf>,

    /// Architecture document whose diagram gets the impacted nodes highlighted
    #[arg(short, long, value_name = "PATH")]
    pub architecture: Option<PathBuf>,

    /// Output format: summary, json or mermaid
    #[arg(short, long, default_value = "summary")]
    pub format: DiffFormat,

    /// Exit with code 1 when requirements were added, modified or removed
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct GenerateApiArgs {
    /// Architecture document written by `analyze` or `assemble -f json`
    #[arg(short, long, value_name = "PATH")]
    pub architecture: PathBuf,

    /// Module id to generate an API for
    #[arg(short, long, value_name = "ID")]
    pub module: String,

    /// Target language (repeatable): typescript, python, c, java
    #[arg(short, long = "language", value_name = "LANG")]
    pub languages: Vec<ProgrammingLanguage>,

    /// Emit the stubs as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

fn parse_temperature(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("Invalid temperature: {}", s))?;
    if (0.0..=2.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Temperature must be between 0.0 and 2.0, got {}", value))
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
