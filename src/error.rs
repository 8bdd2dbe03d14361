use thiserror::Error;

use crate::{id::ElementId, selector::SelectorError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The container argument doesn't designate a live element.
    #[error("invalid layout target: {0}")]
    InvalidTarget(#[from] TargetError),
}

/// Why a [`Target`](crate::Target) couldn't be resolved to an element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The id is stale or names a text node.
    #[error("unrecognized element type ({0:?})")]
    Unrecognized(ElementId),
    #[error("selector `{0}` did not match any element")]
    NoMatch(String),
    #[error("selector `{selector}` is invalid: {source}")]
    Selector {
        selector: String,
        source: SelectorError,
    },
}
