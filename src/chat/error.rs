// Chat error types
// Every way the remote endpoint can fail collapses into one user-visible outcome

use thiserror::Error;

/// The remote chat endpoint could not produce a usable reply
///
/// Variants only exist so the cause can be logged; the chat window shows the
/// same fallback message for all of them.
#[derive(Error, Debug)]
pub enum RemoteUnavailable {
    /// Connection refused, DNS failure, timeout, or a broken body stream
    #[error("transport error: {0}")]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// Body was not JSON or had no `bot` field
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Background request task ended without delivering a result
    #[error("request task dropped before replying")]
    Dropped,
}
