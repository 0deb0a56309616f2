// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};
use serde_json::json;

use langlearn::app_config::{Config, LogLevel};
use langlearn::providers::mock::MockImageQueryService;
use langlearn::{Language, LanguageRegistry};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Parser, Debug)]
struct RecordArgs {
    /// Language code (e.g., 'de', 'ru', 'ko' or 'deu')
    #[arg(short, long)]
    language: Option<String>,

    /// Record type tag (e.g., 'noun', 'verb_imperative')
    #[arg(short, long)]
    record_type: String,

    /// Raw CSV fields in column order
    #[arg(last = true, value_name = "FIELDS")]
    fields: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the version
    Version,

    /// Check the configuration and the language registry
    Doctor,

    /// List record types supported by a language
    Types {
        /// Language code (defaults to the configured default language)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Parse one CSV row into a record and print its fields
    Parse(RecordArgs),

    /// Build the domain model for one CSV row and preview its media texts
    Preview(RecordArgs),

    /// Generate shell completions for langlearn
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// langlearn - vocabulary records and domain models for language flashcards
#[derive(Parser, Debug)]
#[command(name = "langlearn")]
#[command(version)]
#[command(about = "Validate vocabulary rows and preview flashcard media")]
#[command(long_about = "langlearn parses vocabulary CSV rows into validated records and
builds the language-aware domain models used to generate flashcard audio and images.

EXAMPLES:
    langlearn types --language de
    langlearn parse -l de -r noun -- Haus das house Häuser \"Das Haus ist groß.\" \"\"
    langlearn preview -l ko -r noun -- 책 chaek book 권 object \"\" \"\" \"\" \"\"
    langlearn --json doctor
    langlearn completions bash > langlearn.bash

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a different
    file with --config. Without a config file the built-in German, Russian and
    Korean settings are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config: String,

    /// Set logging level
    #[arg(long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and marker for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌ "),
            Level::Warn => ("\x1B[1;33m", "🚧 "),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍 "),
            Level::Trace => ("\x1B[1;35m", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, marker) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                colour,
                now,
                marker,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "langlearn", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli.config, cli.log_level.clone())?;
    log::set_max_level(config.log_level.to_level_filter());

    match cli.command {
        Commands::Version => {
            let version = env!("CARGO_PKG_VERSION");
            if cli.json {
                print_json(&json!({ "name": "langlearn", "version": version }))?;
            } else {
                println!("langlearn {}", version);
            }
            Ok(())
        }
        Commands::Doctor => run_doctor(&config, cli.json),
        Commands::Types { language } => {
            let registry = LanguageRegistry::from_config(&config)?;
            let code = language.unwrap_or_else(|| config.default_language.clone());
            let language = registry.get(&code)?;
            run_types(language, cli.json)
        }
        Commands::Parse(args) => {
            let registry = LanguageRegistry::from_config(&config)?;
            let code = args
                .language
                .clone()
                .unwrap_or_else(|| config.default_language.clone());
            run_parse(registry.get(&code)?, &args)
        }
        Commands::Preview(args) => {
            let registry = LanguageRegistry::from_config(&config)?;
            let code = args
                .language
                .clone()
                .unwrap_or_else(|| config.default_language.clone());
            run_preview(registry.get(&code)?, &args)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load the config file when present, otherwise built-in defaults
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        debug!("Loading configuration from {}", config_path);
        Config::from_file(config_path)?
    } else {
        debug!(
            "Config file not found at '{}', using built-in defaults",
            config_path
        );
        Config::default()
    };

    if let Some(level) = log_level {
        config.log_level = level.into();
    }

    Ok(config)
}

fn run_doctor(config: &Config, as_json: bool) -> Result<()> {
    config
        .validate()
        .context("Configuration validation failed")?;
    let registry = LanguageRegistry::from_config(config)?;

    if as_json {
        let languages: Vec<_> = registry
            .list_available()
            .into_iter()
            .filter_map(|code| registry.get(code).ok())
            .map(|language| {
                json!({
                    "code": language.code(),
                    "name": language.name(),
                    "voice": language.tts_config().voice_id,
                    "record_types": language.supported_record_types(),
                })
            })
            .collect();
        return print_json(&json!({ "status": "ok", "languages": languages }));
    }

    info!("Configuration is valid");
    for code in registry.list_available() {
        let language = registry.get(code)?;
        println!(
            "{} ({}): voice {}, {} record types, templates in {}",
            language.name(),
            language.code(),
            language.tts_config().voice_id,
            language.supported_record_types().len(),
            language.template_directory().display()
        );
    }
    Ok(())
}

fn run_types(language: &dyn Language, as_json: bool) -> Result<()> {
    if as_json {
        let mapping: serde_json::Map<_, _> = language
            .csv_to_record_type_mapping()
            .into_iter()
            .map(|(file, tag)| (file.to_string(), json!(tag)))
            .collect();
        return print_json(&json!({
            "language": language.code(),
            "record_types": language.supported_record_types(),
            "csv_files": mapping,
        }));
    }

    for tag in language.supported_record_types() {
        println!("{}", tag);
    }
    Ok(())
}

fn run_parse(language: &dyn Language, args: &RecordArgs) -> Result<()> {
    let fields: Vec<&str> = args.fields.iter().map(String::as_str).collect();
    let record = language
        .create_record(&args.record_type, &fields)
        .with_context(|| format!("Invalid {} row", args.record_type))?;
    print_json(&serde_json::Value::Object(record.to_dict()))
}

fn run_preview(language: &dyn Language, args: &RecordArgs) -> Result<()> {
    let fields: Vec<&str> = args.fields.iter().map(String::as_str).collect();
    let record = language
        .create_record(&args.record_type, &fields)
        .with_context(|| format!("Invalid {} row", args.record_type))?;
    let model = language.create_domain_model(record.as_ref())?;

    let service = MockImageQueryService::working();
    let strategy = model.image_search_strategy(&service);
    let context = strategy.context().to_string();
    let search_terms = match strategy.execute() {
        Ok(terms) => Some(terms),
        Err(err) => {
            warn!("{}", err);
            None
        }
    };

    print_json(&json!({
        "identifier": record.identifier(),
        "primary_word": model.primary_word(),
        "audio_text": model.combined_audio_text(),
        "audio_segments": model.audio_segments(),
        "search_context": context,
        "search_terms": search_terms,
    }))
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}
