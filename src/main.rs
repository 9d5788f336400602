mod cli;

use cli::{AnalyzeArgs, AssembleArgs, Cli, Command, DiffArgs, GenerateApiArgs, LlmArgs};
use hw2sw::adapters::outbound::console::{StderrProgressReporter, SummaryStyler};
use hw2sw::adapters::outbound::filesystem::FileSystemReader;
use hw2sw::adapters::outbound::network::OpenAiClient;
use hw2sw::application::dto::{
    AnalyzeRequest, ApiRequest, ArchitectureResponse, AssembleRequest, CompareRequest, DiffFormat,
    OutputFormat, DEFAULT_ANALYSIS_MAX_TOKENS, DEFAULT_API_MAX_TOKENS,
};
use hw2sw::application::factories::{FormatterFactory, PresenterFactory};
use hw2sw::application::use_cases::{
    AnalyzeDiagramUseCase, AssembleArchitectureUseCase, CompareRequirementsUseCase,
    GenerateApiUseCase,
};
use hw2sw::architecture_generation::domain::ProgrammingLanguage;
use hw2sw::config::{self, ConfigFile, LlmSettings};
use hw2sw::ports::outbound::DocumentReader;
use hw2sw::shared::error::{ConverterError, ExitCode};
use hw2sw::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let cli = Cli::parse_args();
    init_tracing();

    match run(cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    let config = config.as_ref();

    match cli.command {
        Command::Analyze(args) => run_analyze(args, config),
        Command::Assemble(args) => run_assemble(args, config),
        Command::Diff(args) => run_diff(args),
        Command::GenerateApi(args) => run_generate_api(args, config),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// CLI flags over config over defaults.
fn llm_settings(config: Option<&ConfigFile>, args: &LlmArgs) -> LlmSettings {
    let mut settings = LlmSettings::from_config(config);
    if let Some(model) = &args.model {
        settings.model = model.clone();
    }
    if let Some(max_tokens) = args.max_tokens {
        settings.max_tokens = Some(max_tokens);
    }
    if let Some(temperature) = args.temperature {
        settings.temperature = temperature;
    }
    settings
}

fn completion_client(settings: &LlmSettings) -> Result<OpenAiClient> {
    OpenAiClient::from_env(
        &settings.api_base_url,
        &settings.model,
        &settings.api_key_env,
        settings.request_timeout,
    )
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

/// `@path` reads the requirements from a file; anything else is the text itself.
fn requirements_text(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => FileSystemReader::new().read_text(Path::new(path)),
        None => Ok(value.to_string()),
    }
}

fn present_architecture(
    response: &ArchitectureResponse,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    eprintln!("{}", FormatterFactory::progress_message(format));
    let content = FormatterFactory::create(format).format(response)?;
    PresenterFactory::create(output.into()).present(&content)?;
    Ok(ExitCode::Success)
}

fn run_analyze(args: AnalyzeArgs, config: Option<&ConfigFile>) -> Result<ExitCode> {
    let settings = llm_settings(config, &args.llm);
    let requirements = requirements_text(&args.requirements)?;
    let max_tokens = settings.max_tokens.unwrap_or(DEFAULT_ANALYSIS_MAX_TOKENS);

    let use_case = AnalyzeDiagramUseCase::new(
        FileSystemReader::new(),
        completion_client(&settings)?,
        StderrProgressReporter::new(),
    );
    let request =
        AnalyzeRequest::new(args.image, requirements).with_sampling(max_tokens, settings.temperature);
    let response = runtime()?.block_on(use_case.execute(request))?;

    let format = args
        .format
        .or_else(|| config.and_then(ConfigFile::output_format))
        .unwrap_or_default();
    present_architecture(&response, format, args.output.output)
}

fn run_assemble(args: AssembleArgs, config: Option<&ConfigFile>) -> Result<ExitCode> {
    let use_case =
        AssembleArchitectureUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(AssembleRequest::new(args.input))?;

    let format = args
        .format
        .or_else(|| config.and_then(ConfigFile::output_format))
        .unwrap_or_default();
    present_architecture(&response, format, args.output.output)
}

fn run_diff(args: DiffArgs) -> Result<ExitCode> {
    if args.format == DiffFormat::Mermaid && args.architecture.is_none() {
        return Err(ConverterError::MissingInput {
            fields: "--architecture (needed for mermaid output)".to_string(),
        }
        .into());
    }

    let use_case =
        CompareRequirementsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let request = CompareRequest::new(args.old, args.new)
        .with_edits(args.edits)
        .with_architecture(args.architecture);
    let response = use_case.execute(request)?;

    let content = match args.format {
        DiffFormat::Summary => {
            let summary = if response.has_changes() {
                response.summary.clone()
            } else {
                "No requirement changes.".to_string()
            };
            let colored = args.output.output.is_none()
                && std::io::stdout().is_terminal()
                && std::env::var_os("NO_COLOR").is_none();
            format!("{}\n", SummaryStyler::new(colored).style(&summary))
        }
        DiffFormat::Json => format!("{}\n", serde_json::to_string_pretty(&response)?),
        DiffFormat::Mermaid => response.highlighted_diagram.clone().unwrap_or_default(),
    };
    PresenterFactory::create(args.output.output.into()).present(&content)?;

    if args.check && response.has_changes() {
        Ok(ExitCode::ChangesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}

fn run_generate_api(args: GenerateApiArgs, config: Option<&ConfigFile>) -> Result<ExitCode> {
    let settings = llm_settings(config, &args.llm);
    let languages = if args.languages.is_empty() {
        let configured = config.map(ConfigFile::languages).unwrap_or_default();
        if configured.is_empty() {
            vec![ProgrammingLanguage::TypeScript]
        } else {
            configured
        }
    } else {
        args.languages
    };
    let max_tokens = settings.max_tokens.unwrap_or(DEFAULT_API_MAX_TOKENS);

    let use_case = GenerateApiUseCase::new(
        FileSystemReader::new(),
        completion_client(&settings)?,
        StderrProgressReporter::new(),
    );
    let request = ApiRequest::new(args.architecture, args.module, languages)
        .with_sampling(max_tokens, settings.temperature);
    let response = runtime()?.block_on(use_case.execute(request))?;

    let content = if args.json {
        format!("{}\n", serde_json::to_string_pretty(&response)?)
    } else {
        response.to_text()
    };
    PresenterFactory::create(args.output.output.into()).present(&content)?;
    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_requirements_text_inline() {
        assert_eq!(requirements_text("log at 100 Hz").unwrap(), "log at 100 Hz");
    }

    #[test]
    fn test_requirements_text_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reqs.txt");
        fs::write(&path, "must boot in 2 s").unwrap();

        let arg = format!("@{}", path.display());
        assert_eq!(requirements_text(&arg).unwrap(), "must boot in 2 s");
    }

    #[test]
    fn test_llm_settings_cli_overrides_config() {
        let config = ConfigFile {
            model: Some("from-config".to_string()),
            temperature: Some(0.1),
            max_tokens: Some(1000),
            ..Default::default()
        };
        let args = LlmArgs {
            model: Some("from-cli".to_string()),
            max_tokens: None,
            temperature: Some(1.5),
        };

        let settings = llm_settings(Some(&config), &args);
        assert_eq!(settings.model, "from-cli");
        assert_eq!(settings.temperature, 1.5);
        assert_eq!(settings.max_tokens, Some(1000));
    }

    #[test]
    fn test_load_config_explicit_missing() {
        let result = load_config(Some(Path::new("/nonexistent/hw2sw.config.yml")));
        assert!(result.is_err());
    }
}
