// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use vardnica::app_config::{self, Config};
use vardnica::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe a part-of-speech code
    Pos {
        /// Language code (e.g., 'lv', 'en', 'lav')
        language: String,
        /// POS code (e.g., 'n', 'v', 's')
        code: String,
    },

    /// List all POS codes of a language
    List {
        /// Language code (e.g., 'lv', 'en')
        language: String,
    },

    /// List languages with POS tables
    Languages,

    /// Show whether a compiler warning code would be suppressed or forwarded
    Warning {
        /// Warning code (e.g., 'a11y-missing-attribute')
        code: String,
    },

    /// Print the front-end build configuration as JSON
    BuildConfig,

    /// Generate shell completions for vardnica
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// vardnica - Latvian/English WordNet dictionary support tool
#[derive(Parser, Debug)]
#[command(name = "vardnica")]
#[command(version)]
#[command(about = "POS label tables and front-end build settings for the WordNet dictionary")]
#[command(long_about = "vardnica prints part-of-speech descriptions and evaluates the front-end build configuration.

EXAMPLES:
    vardnica pos lv n                     # Describe the Latvian noun code
    vardnica pos eng s                    # ISO 639-2 codes are accepted too
    vardnica list en                      # All English POS codes
    vardnica warning a11y-missing-content # suppress or forward
    vardnica build-config                 # Effective build configuration
    vardnica completions bash > vardnica.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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

fn main() -> Result<()> {
    // Start at info; the config may lower or raise it once loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = cli.log_level {
        let level: app_config::LogLevel = level.into();
        log::set_max_level(level.into());
    }

    // Completions never touch the config file
    let config = if matches!(cli.command, Commands::Completions { .. }) {
        Config::default()
    } else {
        let config = Config::load_or_create(&cli.config_path)?;
        config.validate().context("Configuration validation failed")?;
        config
    };

    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.into());
    }

    run(cli.command, config)
}

fn run(command: Commands, config: Config) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    if let Commands::Completions { shell } = command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "vardnica", &mut stdout);
        return Ok(());
    }

    let controller = Controller::with_config(config)?;

    match command {
        Commands::Pos { language, code } => controller.describe_pos(&language, &code, &mut stdout)?,
        Commands::List { language } => controller.list_language(&language, &mut stdout)?,
        Commands::Languages => controller.list_languages(&mut stdout)?,
        Commands::Warning { code } => {
            controller.check_warning(&code, &mut stdout)?;
        }
        Commands::BuildConfig => controller.print_build_config(&mut stdout)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
