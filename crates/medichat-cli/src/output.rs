//! Document encoders and writers for CLI commands.

use std::fs;
use std::io::Write;
use std::path::Path;

use medichat_ui::LogoDocument;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Encode the document in the requested format, newline-terminated.
pub(crate) fn encode_document(document: &LogoDocument, format: OutputFormat) -> CliResult<String> {
    let mut body = match format {
        OutputFormat::Svg => document.to_markup(),
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|source| CliError::Encode { source })?,
    };
    body.push('\n');
    Ok(body)
}

pub(crate) fn write_stdout(stdout: &mut dyn Write, body: &str) -> CliResult<()> {
    stdout
        .write_all(body.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| CliError::Write { path: None, source })
}

pub(crate) fn write_file(path: &Path, body: &str) -> CliResult<()> {
    fs::write(path, body).map_err(|source| CliError::Write {
        path: Some(path.to_path_buf()),
        source,
    })
}
