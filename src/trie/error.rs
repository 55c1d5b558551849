/// Errors raised while defining patterns or registering handlers.
///
/// All of these signal a bad registration, not a runtime condition; the
/// panicking API wrappers treat them as programming errors.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// Malformed segment: bad parameter name, bad `::` escape, empty or
    /// unbalanced regex, forbidden suffix character, misplaced `*`, or
    /// `//` inside the pattern.
    #[error("invalid pattern: {0:?}")]
    InvalidPattern(String),

    /// A parametric sibling with the same shape carries a different
    /// name, or a wildcard sibling rules the new node out.
    #[error("conflicting parametric segment: {0:?}")]
    ConflictingParametric(String),

    /// The pattern continues past a wildcard segment.
    #[error("cannot define pattern after wildcard: {0:?}")]
    DefineAfterWildcard(String),

    /// The method is already registered on this endpoint.
    #[error("{method:?} already defined on {pattern:?}")]
    DuplicateHandler { method: String, pattern: String },

    /// `handle` was called with an empty method name.
    #[error("empty method")]
    EmptyMethod,
}
