use std::collections::HashMap;

use regex::Regex;

/// Handle to a node in the trie arena.
///
/// Handles from different tries are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

pub(super) const ROOT: NodeId = NodeId(0);

#[derive(Debug)]
pub(super) struct Node<T> {
    /// Original segment text, kept for diagnostics.
    pub(super) segment: Box<str>,
    /// Full pattern string, set on the first define of this endpoint.
    pub(super) pattern: Option<Box<str>>,
    pub(super) kind: Kind,
    pub(super) endpoint: bool,
    /// Comma-space joined method names, in registration order.
    pub(super) allow: String,
    pub(super) handlers: Vec<(Box<str>, T)>,
    pub(super) parent: Option<NodeId>,
    /// Literal children, keyed by (folded) segment text.
    pub(super) children: HashMap<Box<str>, NodeId>,
    /// Parametric children in match-priority order.
    pub(super) vary_children: Vec<NodeId>,
}

/// Parametric shape of a node. The match loop dispatches on this tag.
#[derive(Debug)]
pub(super) enum Kind {
    Literal,
    NamedPlain {
        name: Box<str>,
    },
    NamedRegex {
        name: Box<str>,
        regex: Regex,
    },
    NamedSuffix {
        name: Box<str>,
        suffix: Box<str>,
    },
    NamedRegexSuffix {
        name: Box<str>,
        regex: Regex,
        suffix: Box<str>,
    },
    Wildcard {
        name: Box<str>,
    },
}

impl Kind {
    pub(super) fn named(
        name: &str,
        regex: Option<Regex>,
        suffix: Option<&str>,
        wildcard: bool,
    ) -> Self {
        let name: Box<str> = name.into();
        if wildcard {
            return Kind::Wildcard { name };
        }
        match (regex, suffix) {
            (None, None) => Kind::NamedPlain { name },
            (Some(regex), None) => Kind::NamedRegex { name, regex },
            (None, Some(suffix)) => Kind::NamedSuffix {
                name,
                suffix: suffix.into(),
            },
            (Some(regex), Some(suffix)) => Kind::NamedRegexSuffix {
                name,
                regex,
                suffix: suffix.into(),
            },
        }
    }

    pub(super) fn name(&self) -> &str {
        match self {
            Kind::Literal => "",
            Kind::NamedPlain { name }
            | Kind::NamedRegex { name, .. }
            | Kind::NamedSuffix { name, .. }
            | Kind::NamedRegexSuffix { name, .. }
            | Kind::Wildcard { name } => name,
        }
    }

    pub(super) fn suffix(&self) -> Option<&str> {
        match self {
            Kind::NamedSuffix { suffix, .. } | Kind::NamedRegexSuffix { suffix, .. } => {
                Some(suffix)
            }
            _ => None,
        }
    }

    pub(super) fn regex(&self) -> Option<&Regex> {
        match self {
            Kind::NamedRegex { regex, .. } | Kind::NamedRegexSuffix { regex, .. } => Some(regex),
            _ => None,
        }
    }

    pub(super) fn is_wildcard(&self) -> bool {
        matches!(self, Kind::Wildcard { .. })
    }
}

impl<T> Node<T> {
    pub(super) fn new(segment: &str, kind: Kind, parent: Option<NodeId>) -> Self {
        Self {
            segment: segment.into(),
            pattern: None,
            kind,
            endpoint: false,
            allow: String::new(),
            handlers: Vec::new(),
            parent,
            children: HashMap::new(),
            vary_children: Vec::new(),
        }
    }

    pub(super) fn root() -> Self {
        Self::new("", Kind::Literal, None)
    }
}
