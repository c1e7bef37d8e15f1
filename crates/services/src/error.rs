//! Shared error types for the services crate.

use thiserror::Error;

use api::remote::RemoteError;

/// Errors emitted by the practice session controller.
///
/// The first four variants are local validation failures and never involve
/// the network; `Remote` wraps any transport or status failure from the
/// question service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("no question is currently loaded")]
    NoQuestion,

    #[error("no answer selected")]
    NoSelection,

    #[error("option {index} is out of range for {len} options")]
    InvalidOption { index: usize, len: usize },

    #[error("answer already submitted for this question")]
    AlreadySubmitted,

    #[error("no proposed answer to accept")]
    NoProposal,

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
