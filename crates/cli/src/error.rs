//! CLI exit codes.
//!
//! Responsibilities:
//! - Define the exit codes the binary can return.
//! - Map errors returned by commands to an exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Usage errors; clap exits with code 2 on its own before any command runs.
//!
//! Invariants:
//! - Every `ClientError` maps to `GeneralError`; the log line carries the detail.

use superset_client::ClientError;

/// Exit codes for superset-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - authentication, request or response decoding failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::HttpError(_)
            | ClientError::ApiError { .. }
            | ClientError::InvalidResponse(_)
            | ClientError::Timeout(_)
            | ClientError::ConnectionRefused(_)
            | ClientError::InvalidUrl(_)
            | ClientError::InvalidRequest(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes and client errors.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a ClientError.
    fn exit_code(&self) -> ExitCode;

    /// The first `ClientError` in the error chain, if any.
    fn client_error(&self) -> Option<&ClientError>;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.client_error()
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }

    fn client_error(&self) -> Option<&ClientError> {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
    }
}
