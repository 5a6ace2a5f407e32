// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, PaletteColors};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod document;
mod errors;
mod file_utils;
mod markup;
mod paragraph;
mod providers;
mod rebuild;
mod theme;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enhance presentation decks using an AI rewrite provider (default command)
    #[command(alias = "enhance")]
    Enhance(EnhanceArgs),

    /// Generate shell completions for slideforge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct EnhanceArgs {
    /// Input deck file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file path (single-file mode only; defaults next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Free-form rewrite instructions passed to the provider
    #[arg(short, long, default_value = "")]
    instructions: String,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Font family applied to every slide
    #[arg(long)]
    font: Option<String>,

    /// Named color palette (Professional, Modern, Vibrant, Corporate,
    /// Creative, Nature, Elegant, Minimal)
    #[arg(long)]
    palette: Option<String>,

    /// Title font size in points
    #[arg(long)]
    title_size: Option<u32>,

    /// Heading font size in points
    #[arg(long)]
    heading_size: Option<u32>,

    /// Body font size in points
    #[arg(long)]
    body_size: Option<u32>,

    /// Fill slide backgrounds with the palette background color
    #[arg(long)]
    set_background: bool,

    /// Use explicit colors instead of a named palette
    #[arg(long)]
    custom_colors: bool,

    /// Primary color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#2B579A")]
    primary_color: String,

    /// Secondary color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#5B9BD5")]
    secondary_color: String,

    /// Text color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#000000")]
    text_color: String,

    /// Background color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#FFFFFF")]
    background_color: String,

    /// Model name to use for rewriting
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// slideforge - AI-powered presentation deck enhancer
///
/// Rewrites the text content of every slide through an AI provider and
/// restyles the whole deck with a uniform visual theme.
#[derive(Parser, Debug)]
#[command(name = "slideforge")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered presentation enhancement tool")]
#[command(long_about = "slideforge rewrites the content of every slide in a deck through an AI \
provider and applies a uniform visual theme.

EXAMPLES:
    slideforge talk.deck.json                         # Enhance using default config
    slideforge -f talk.deck.json                      # Force overwrite existing output
    slideforge -i \"make it concise\" talk.deck.json    # Pass rewrite instructions
    slideforge --palette Modern --font Georgia talk.deck.json
    slideforge --set-background /decks/               # Process a whole directory
    slideforge completions bash > slideforge.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The rewrite provider reads its API key
    from the config or the GROQ_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    enhance: EnhanceArgsOptional,
}

// Top-level mirror of EnhanceArgs so the default invocation works without a
// subcommand, per the usual clap default-command pattern.
#[derive(Parser, Debug)]
struct EnhanceArgsOptional {
    /// Input deck file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file path (single-file mode only; defaults next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Free-form rewrite instructions passed to the provider
    #[arg(short, long, default_value = "")]
    instructions: String,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Font family applied to every slide
    #[arg(long)]
    font: Option<String>,

    /// Named color palette
    #[arg(long)]
    palette: Option<String>,

    /// Title font size in points
    #[arg(long)]
    title_size: Option<u32>,

    /// Heading font size in points
    #[arg(long)]
    heading_size: Option<u32>,

    /// Body font size in points
    #[arg(long)]
    body_size: Option<u32>,

    /// Fill slide backgrounds with the palette background color
    #[arg(long)]
    set_background: bool,

    /// Use explicit colors instead of a named palette
    #[arg(long)]
    custom_colors: bool,

    /// Primary color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#2B579A")]
    primary_color: String,

    /// Secondary color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#5B9BD5")]
    secondary_color: String,

    /// Text color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#000000")]
    text_color: String,

    /// Background color as #RRGGBB (with --custom-colors)
    #[arg(long, default_value = "#FFFFFF")]
    background_color: String,

    /// Model name to use for rewriting
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

impl EnhanceArgsOptional {
    fn into_args(self) -> Result<EnhanceArgs> {
        let input_path = self
            .input_path
            .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;
        Ok(EnhanceArgs {
            input_path,
            output: self.output,
            instructions: self.instructions,
            force_overwrite: self.force_overwrite,
            font: self.font,
            palette: self.palette,
            title_size: self.title_size,
            heading_size: self.heading_size,
            body_size: self.body_size,
            set_background: self.set_background,
            custom_colors: self.custom_colors,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            text_color: self.text_color,
            background_color: self.background_color,
            model: self.model,
            config_path: self.config_path,
            log_level: self.log_level,
        })
    }
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // The level is updated after the config is loaded if needed.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "slideforge", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Enhance(args)) => run_enhance(args).await,
        None => run_enhance(cli.enhance.into_args()?).await,
    }
}

async fn run_enhance(options: EnhanceArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_level));
    }

    let config = load_config(&options)?;

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        controller
            .run(
                options.input_path.clone(),
                options.output.clone(),
                &options.instructions,
                options.force_overwrite,
            )
            .await
    } else if options.input_path.is_dir() {
        controller
            .run_folder(
                &options.input_path,
                &options.instructions,
                options.force_overwrite,
            )
            .await
    } else {
        Err(anyhow!(
            "Input path does not exist: {:?}",
            options.input_path
        ))
    }
}

/// Load the configuration file (creating a default one if missing) and fold
/// in the command-line overrides.
fn load_config(options: &EnhanceArgs) -> Result<Config> {
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    if let Some(model) = &options.model {
        config.rewrite.model = model.clone();
    }
    if let Some(font) = &options.font {
        config.design.font_family = font.clone();
    }
    if let Some(palette) = &options.palette {
        config.design.color_palette = palette.clone();
    }
    if let Some(size) = options.title_size {
        config.design.title_size_pt = size;
    }
    if let Some(size) = options.heading_size {
        config.design.heading_size_pt = size;
    }
    if let Some(size) = options.body_size {
        config.design.body_size_pt = size;
    }
    if options.set_background {
        config.design.set_background = true;
    }
    if options.custom_colors {
        config.design.custom_colors = Some(PaletteColors {
            primary: options.primary_color.clone(),
            secondary: options.secondary_color.clone(),
            text: options.text_color.clone(),
            background: options.background_color.clone(),
        });
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}
