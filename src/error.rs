//! Error types for the telemon shell.

use thiserror::Error;

/// Errors surfaced by the core state models.
///
/// Most failure modes in this application degrade silently per the shell's
/// error policy: malformed range input is discarded, plot edits on unknown
/// channels are no-ops, and collaborator failures (storage, worker process)
/// are logged and swallowed at the boundary. The assignment reducer is the
/// one place where a caller can observe a failure.
#[derive(Error, Debug)]
pub enum ShellError {
    /// An assignment edit targeted a raw channel id that is not in the
    /// catalog.
    #[error("No assignment exists for channel '{id}'")]
    ChannelNotFound { id: String },
}
