//! Step viewer error types

use thiserror::Error;

/// Errors returned by [`StepViewer`](super::StepViewer) operations.
///
/// Both are caller mistakes: indices should come from enumerating the same
/// catalog the viewer was built from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// Requested step lies outside `0..len`. Relative moves report the signed
    /// target, so moving back from step 0 reports `-1`.
    #[error("step index {index} is out of range (catalog has {len} step(s))")]
    IndexOutOfRange { index: i64, len: usize },

    /// A viewer needs at least one step to have one active
    #[error("cannot show an empty step catalog")]
    EmptyCatalog,
}
