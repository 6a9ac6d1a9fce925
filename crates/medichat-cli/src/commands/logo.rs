//! `medichat logo`: render the brand mark and write it out.

use std::io::Write;

use medichat_ui::render_logo;

use crate::cli::LogoArgs;
use crate::error::CliResult;
use crate::output::{encode_document, write_file, write_stdout};

pub(crate) fn handle_logo(args: &LogoArgs, stdout: &mut dyn Write) -> CliResult<()> {
    let request = args.request();
    let document = render_logo(&request);
    let body = encode_document(&document, args.format)?;

    match &args.output {
        Some(path) => write_file(path, &body)?,
        None => write_stdout(stdout, &body)?,
    }

    let destination = args
        .output
        .as_deref()
        .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    tracing::info!(
        width = request.width,
        height = request.height,
        class = request.class.as_deref(),
        format = ?args.format,
        destination = %destination,
        "logo exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Command, OutputFormat, dispatch};
    use crate::error::{CliError, EXIT_FAILURE};
    use medichat_ui::LogoRequest;
    use std::error::Error;
    use std::fs;
    use std::path::PathBuf;

    fn args(format: OutputFormat, output: Option<PathBuf>) -> LogoArgs {
        LogoArgs {
            width: 32.0,
            height: 32.0,
            class: Some("nav-icon".to_string()),
            format,
            output,
        }
    }

    #[test]
    fn svg_goes_to_stdout_by_default() -> Result<(), Box<dyn Error>> {
        let mut stdout = Vec::new();
        dispatch(Command::Logo(args(OutputFormat::Svg, None)), &mut stdout)?;
        let expected = LogoRequest::default()
            .with_width(32.0)
            .with_height(32.0)
            .with_class("nav-icon")
            .render()
            .to_markup();
        assert_eq!(String::from_utf8(stdout)?, format!("{expected}\n"));
        Ok(())
    }

    #[test]
    fn output_flag_writes_file_and_leaves_stdout_empty() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("logo.json");
        let mut stdout = Vec::new();
        handle_logo(&args(OutputFormat::Json, Some(path.clone())), &mut stdout)?;
        assert!(stdout.is_empty());

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["width"], 32.0);
        assert_eq!(value["class"], "nav-icon");
        assert_eq!(value["view_box"]["height"], 100.0);
        Ok(())
    }

    #[test]
    fn missing_output_directory_reports_write_failure() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("logo.svg");
        let mut stdout = Vec::new();
        let err = handle_logo(&args(OutputFormat::Svg, Some(path.clone())), &mut stdout)
            .err()
            .ok_or("expected write failure")?;
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(matches!(&err, CliError::Write { path: Some(p), .. } if *p == path));
        Ok(())
    }
}
