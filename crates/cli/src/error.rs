//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 11: I/O error (writing to stdout)
//! - 12: logger error (a global logger was already installed)

use thiserror::Error;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the greeting failed, e.g. stdout was closed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    /// The logger could not be installed.
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => 11,
            CliError::Logger(_) => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn io_error_message_includes_cause() {
        let err = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let msg = err.to_string();
        assert!(msg.contains("pipe closed"), "missing cause in: {msg}");
    }

    #[test]
    fn second_logger_install_routes_to_logger_error() {
        // The first install may or may not succeed depending on test order;
        // the second one in this process must fail.
        let _ = simple_logger::init_with_level(log::Level::Error);
        let result = simple_logger::init_with_level(log::Level::Error);
        let cli_err = CliError::from(result.unwrap_err());
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("logger"));
    }

    #[test]
    fn cli_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<CliError>();
    }
}
