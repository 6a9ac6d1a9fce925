//! Error type shared by CLI command handlers.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use medichat_telemetry::TelemetryError;
use thiserror::Error;

/// Exit code reported for runtime failures.
pub(crate) const EXIT_FAILURE: i32 = 3;

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

/// Failures surfaced to the user with a non-zero exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Logging could not be initialised.
    #[error("failed to initialise logging")]
    Telemetry {
        /// Underlying telemetry error.
        #[from]
        source: TelemetryError,
    },
    /// The rendered document could not be encoded.
    #[error("failed to encode logo document")]
    Encode {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// Writing the rendered document failed.
    #[error("failed to write logo document")]
    Write {
        /// Destination file; `None` for stdout.
        path: Option<PathBuf>,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl CliError {
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Telemetry { .. } | Self::Encode { .. } | Self::Write { .. } => EXIT_FAILURE,
        }
    }

    /// Message with destination context and the full source chain.
    pub(crate) fn display_message(&self) -> String {
        let mut message = self.to_string();
        if let Self::Write {
            path: Some(path), ..
        } = self
        {
            message.push_str(&format!(" to {}", path.display()));
        }
        let mut source = self.source();
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_message_includes_path_and_source() {
        let err = CliError::Write {
            path: Some(PathBuf::from("out/logo.svg")),
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert_eq!(
            err.display_message(),
            "failed to write logo document to out/logo.svg: disk full"
        );
    }

    #[test]
    fn stdout_write_error_omits_path() {
        let err = CliError::Write {
            path: None,
            source: io::Error::other("broken pipe"),
        };
        assert_eq!(
            err.display_message(),
            "failed to write logo document: broken pipe"
        );
    }

    #[test]
    fn telemetry_error_converts_and_chains() {
        let err = CliError::from(TelemetryError::UnknownLogFormat {
            value: "xml".to_string(),
        });
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert_eq!(
            err.display_message(),
            "failed to initialise logging: unknown log format"
        );
    }
}
