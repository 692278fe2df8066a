//! Errors from bird invocations.

use thiserror::Error;

/// Failure of a single bird invocation.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    NonZeroExit {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("unexpected output from `{command}`: {reason}")]
    Parse { command: String, reason: String },
}
