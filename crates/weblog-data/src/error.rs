use thiserror::Error;

/// Errors from corpus generation.
///
/// Generation is a one-shot computation: any of these aborts the current
/// build, nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A weighted draw was attempted over an empty set or one whose weights
    /// sum to zero.
    #[error("cannot sample from an empty or all-zero weight distribution")]
    EmptyDistribution,

    /// A page transition points at a path that is not defined in the page
    /// catalog. This is a configuration defect, not a runtime condition.
    #[error("page transition references undefined page {0:?}")]
    MissingPageDefinition(String),
}
