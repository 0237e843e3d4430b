//! Error types for the bounding computations.

/// Errors produced by the bounding-volume constructions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BoundingError {
    /// The input point set is empty; no bounding volume exists.
    #[error("cannot bound an empty point set")]
    EmptyPointSet,
}
