mod core;
mod error;
mod imp;
mod node;
mod params;
mod parse;

pub use self::error::TrieError;
pub use self::node::NodeId;
pub use self::params::Params;

use self::node::Node;

/// Options for [`Trie`], fixed at construction.
///
/// `Options::default()` disables all three; [`Trie::new`] enables all
/// three.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Fold literal segments to lower case when defining and matching.
    pub ignore_case: bool,
    /// Report paths that only fail to match because of duplicated
    /// slashes, e.g. matching `/api//foo` against a defined `/api/foo`
    /// yields `fpr = "/api/foo"`.
    pub fixed_path_redirect: bool,
    /// Report paths that only fail to match because of a trailing slash,
    /// e.g. matching `/api/foo/` against a defined `/api/foo` yields
    /// `tsr = "/api/foo"`.
    pub trailing_slash_redirect: bool,
}

/// A trie that defines URL patterns and matches concrete paths.
#[derive(Debug)]
pub struct Trie<T> {
    ignore_case: bool,
    fpr: bool,
    tsr: bool,
    nodes: Vec<Node<T>>,
}

/// Result of [`Trie::match_path`].
#[derive(Debug)]
pub struct Matched {
    /// The matched endpoint, if any.
    pub node: Option<NodeId>,
    /// Captured parameters, freshly allocated per match.
    pub params: Params,
    /// Fixed-path redirect target (duplicated slashes collapsed).
    pub fpr: Option<String>,
    /// Trailing-slash redirect target.
    pub tsr: Option<String>,
}

impl Matched {
    fn none() -> Self {
        Self {
            node: None,
            params: Params::new(),
            fpr: None,
            tsr: None,
        }
    }
}
