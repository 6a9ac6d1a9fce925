//! Argument parsing and command dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use medichat_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
use medichat_ui::LogoRequest;
use medichat_ui::logo::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

use crate::commands::logo::handle_logo;
use crate::error::{CliError, CliResult};

/// Parses CLI arguments, installs logging, and executes the requested command.
/// Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        build_sha: option_env!("MEDICHAT_BUILD_SHA").unwrap_or("dev"),
    };
    if let Err(err) = init_logging(&logging) {
        let err = CliError::from(err);
        eprintln!("error: {}", err.display_message());
        return err.exit_code();
    }

    let span = tracing::info_span!(
        "cli",
        command = command_label(&cli.command),
        build_sha = build_sha()
    );
    let _entered = span.enter();

    let result = dispatch(cli.command, &mut io::stdout().lock());
    match result {
        Ok(()) => 0,
        Err(err) => {
            let message = err.display_message();
            tracing::debug!(error = %message, "command failed");
            eprintln!("error: {message}");
            err.exit_code()
        }
    }
}

pub(crate) fn dispatch(command: Command, stdout: &mut dyn Write) -> CliResult<()> {
    match command {
        Command::Logo(args) => handle_logo(&args, stdout),
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Logo(_) => "logo",
    }
}

#[derive(Parser)]
#[command(name = "medichat", about = "Export the Medichat brand mark")]
pub(crate) struct Cli {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "MEDICHAT_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub(crate) log_level: String,
    /// Log output format (`pretty` or `json`).
    #[arg(long, global = true, env = "MEDICHAT_LOG_FORMAT")]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Render the logo as SVG markup or as its JSON structure.
    Logo(LogoArgs),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct LogoArgs {
    /// Display width of the root element.
    #[arg(
        long,
        env = "MEDICHAT_LOGO_WIDTH",
        default_value_t = DEFAULT_WIDTH,
        allow_negative_numbers = true
    )]
    pub(crate) width: f64,
    /// Display height of the root element.
    #[arg(
        long,
        env = "MEDICHAT_LOGO_HEIGHT",
        default_value_t = DEFAULT_HEIGHT,
        allow_negative_numbers = true
    )]
    pub(crate) height: f64,
    /// Class attached verbatim to the root element.
    #[arg(long = "class", env = "MEDICHAT_LOGO_CLASS")]
    pub(crate) class: Option<String>,
    /// Encoding of the exported document.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub(crate) format: OutputFormat,
    /// Destination file; stdout when omitted.
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
}

impl LogoArgs {
    pub(crate) fn request(&self) -> LogoRequest {
        LogoRequest {
            width: self.width,
            height: self.height,
            class: self.class.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Standalone SVG markup.
    Svg,
    /// Rendered document structure as pretty JSON.
    Json,
}
