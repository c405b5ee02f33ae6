//! Segment grammar shared by route patterns and request paths.
//!
//! A pattern such as `/assets/*filepath` is split on `/` into segments.
//! Empty pieces are dropped, so `//a///b/` and `/a/b` parse identically and
//! trailing slashes carry no meaning. Parsing stops right after the first
//! catch-all segment; whatever follows it is not part of the pattern.
//!
//! Request paths go through the same parser. A request segment that happens
//! to start with `*` therefore ends the parsed path early, exactly as it
//! would for a pattern.

use super::error::PatternError;

/// Sigil introducing a named single-segment parameter (`:id`)
pub const PARAM_SIGIL: char = ':';
/// Sigil introducing a trailing catch-all parameter (`*filepath`)
pub const CATCH_ALL_SIGIL: char = '*';

/// Kind of a raw segment, decided by its leading sigil
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Literal text, must match exactly
    Static,
    /// `:name`, matches exactly one segment
    Param,
    /// `*name`, matches every remaining segment
    CatchAll,
}

impl SegmentKind {
    /// Classify a raw segment.
    #[must_use]
    pub fn of(segment: &str) -> Self {
        if segment.starts_with(PARAM_SIGIL) {
            SegmentKind::Param
        } else if segment.starts_with(CATCH_ALL_SIGIL) {
            SegmentKind::CatchAll
        } else {
            SegmentKind::Static
        }
    }

    /// Named parameters and catch-alls accept any text at their position.
    #[must_use]
    pub fn is_wild(self) -> bool {
        !matches!(self, SegmentKind::Static)
    }
}

/// Split a pattern or request path into segments.
///
/// `""` and `"/"` both parse to no segments. As a pattern, only `"/"`
/// makes the root a route, since the root's stored pattern is the pattern
/// text and `""` leaves it empty.
///
/// # Example
///
/// ```
/// use trierouter::router::parse_pattern;
///
/// assert_eq!(parse_pattern("/hello/:name"), vec!["hello", ":name"]);
/// assert_eq!(parse_pattern("/assets/*filepath/ignored"), vec!["assets", "*filepath"]);
/// assert!(parse_pattern("/").is_empty());
/// ```
#[must_use]
pub fn parse_pattern(pattern: &str) -> Vec<&str> {
    let mut parts = Vec::with_capacity(pattern.matches('/').count() + 1);
    for item in pattern.split('/').filter(|s| !s.is_empty()) {
        parts.push(item);
        if item.starts_with(CATCH_ALL_SIGIL) {
            break;
        }
    }
    parts
}

/// Strict check for a pattern before registration.
///
/// The lenient [`parse_pattern`] accepts anything; this rejects patterns
/// whose parse would silently drop or misread part of the input.
///
/// # Errors
///
/// - [`PatternError::Empty`] for `""`, which could never be resolved
/// - [`PatternError::MissingLeadingSlash`] if the pattern does not start with `/`
/// - [`PatternError::EmptyParamName`] for a bare `:` or `*` segment
/// - [`PatternError::SegmentAfterCatchAll`] if anything follows a catch-all
pub fn validate_pattern(pattern: &str) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if !pattern.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash {
            pattern: pattern.to_string(),
        });
    }

    let mut catch_all: Option<&str> = None;
    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        if let Some(previous) = catch_all {
            return Err(PatternError::SegmentAfterCatchAll {
                pattern: pattern.to_string(),
                catch_all: previous.to_string(),
                segment: segment.to_string(),
            });
        }
        let kind = SegmentKind::of(segment);
        if kind.is_wild() && segment.len() == 1 {
            return Err(PatternError::EmptyParamName {
                pattern: pattern.to_string(),
                segment: segment.to_string(),
            });
        }
        if kind == SegmentKind::CatchAll {
            catch_all = Some(segment);
        }
    }
    Ok(())
}
