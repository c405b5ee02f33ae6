use std::fmt;

/// Pattern rejected by strict registration
///
/// Returned by [`crate::router::validate_pattern`] and
/// [`crate::router::Router::try_register`]. Lenient registration through
/// [`crate::router::Router::register`] never produces this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// `""` parses to no segments and never sets a route on the root, so
    /// it could never be resolved
    Empty,
    /// A non-empty pattern must begin with `/`
    MissingLeadingSlash {
        /// The rejected pattern
        pattern: String,
    },
    /// `:` or `*` with no name after it
    EmptyParamName {
        /// The rejected pattern
        pattern: String,
        /// The offending segment
        segment: String,
    },
    /// A catch-all must be the final segment
    ///
    /// The lenient parser would drop `segment` without notice.
    SegmentAfterCatchAll {
        /// The rejected pattern
        pattern: String,
        /// The catch-all that ends the parsed pattern
        catch_all: String,
        /// The first segment that would be dropped
        segment: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => {
                write!(f, "invalid route pattern '': use '/' for the root route")
            }
            PatternError::MissingLeadingSlash { pattern } => {
                write!(f, "invalid route pattern '{pattern}': must start with '/'")
            }
            PatternError::EmptyParamName { pattern, segment } => {
                write!(
                    f,
                    "invalid route pattern '{pattern}': segment '{segment}' has no parameter name"
                )
            }
            PatternError::SegmentAfterCatchAll {
                pattern,
                catch_all,
                segment,
            } => {
                write!(
                    f,
                    "invalid route pattern '{pattern}': segment '{segment}' follows catch-all '{catch_all}', \
                    a catch-all must be the last segment"
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}
