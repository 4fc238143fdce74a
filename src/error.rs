//! Widget configuration errors.
//!
//! All failures here are fatal at construction time: a widget with an
//! unresolvable icon or a zero-sized dimension can never draw anything
//! sensible, so nothing is logged-and-swallowed. Draw paths themselves are
//! infallible apart from the target's own error type, which they propagate.

/// Errors produced while resolving a widget configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The icon bitmap has zero size or its data is shorter than
    /// `row_stride * height`.
    #[error("icon bitmap invalid: {0}")]
    BadIcon(&'static str),

    /// A required dimension (icon size, font height) is not positive.
    #[error("invalid dimension: {0}")]
    InvalidDimension(&'static str),
}
