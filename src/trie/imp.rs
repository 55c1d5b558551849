use super::node::{Node, NodeId, ROOT};
use super::{Matched, Options, Trie, TrieError};

impl<T> Trie<T> {
    /// Creates a trie with case folding and both redirect modes enabled.
    pub fn new() -> Self {
        Self::with_options(Options {
            ignore_case: true,
            fixed_path_redirect: true,
            trailing_slash_redirect: true,
        })
    }

    pub fn with_options(opts: Options) -> Self {
        Self {
            ignore_case: opts.ignore_case,
            fpr: opts.fixed_path_redirect,
            tsr: opts.trailing_slash_redirect,
            nodes: vec![Node::root()],
        }
    }

    /// Defines a pattern and returns its endpoint node.
    ///
    /// Re-defining the same pattern returns the same endpoint.
    ///
    /// # Panics
    ///
    /// Panics on a malformed pattern or a conflicting parametric
    /// definition; see [`Trie::try_define`].
    pub fn define(&mut self, pattern: &str) -> NodeId {
        match self.try_define(pattern) {
            Ok(id) => id,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn try_define(&mut self, pattern: &str) -> Result<NodeId, TrieError> {
        self.define_pattern(pattern)
    }

    /// Matches a concrete request path.
    ///
    /// # Panics
    ///
    /// Panics when `path` is empty or does not start with `/`; that is a
    /// caller contract violation, not a routing miss.
    pub fn match_path(&self, path: &str) -> Matched {
        if path.is_empty() || !path.starts_with('/') {
            panic!("path does not start with \"/\": {:?}", path);
        }
        self.match_inner(path)
    }

    /// Mounts a handler under a method name on an endpoint.
    ///
    /// # Panics
    ///
    /// Panics when the method is already registered on this endpoint.
    pub fn handle(&mut self, id: NodeId, method: &str, handler: T) {
        if let Err(e) = self.try_handle(id, method, handler) {
            panic!("{}", e);
        }
    }

    pub fn try_handle(&mut self, id: NodeId, method: &str, handler: T) -> Result<(), TrieError> {
        let node = self.node_mut(id);
        if node.handlers.iter().any(|(m, _)| &**m == method) {
            return Err(TrieError::DuplicateHandler {
                method: method.to_owned(),
                pattern: node.pattern.as_deref().unwrap_or("").to_owned(),
            });
        }
        if node.allow.is_empty() {
            node.allow.push_str(method);
        } else {
            node.allow.push_str(", ");
            node.allow.push_str(method);
        }
        node.handlers.push((method.into(), handler));
        Ok(())
    }

    pub fn get_handler(&self, id: NodeId, method: &str) -> Option<&T> {
        self.node(id)
            .handlers
            .iter()
            .find_map(|(m, h)| if &**m == method { Some(h) } else { None })
    }

    /// Comma-space joined method names registered on the endpoint, in
    /// registration order.
    pub fn allow(&self, id: NodeId) -> &str {
        &self.node(id).allow
    }

    /// The pattern that first defined this endpoint, or `""` for a node
    /// that is not an endpoint.
    pub fn pattern(&self, id: NodeId) -> &str {
        self.node(id).pattern.as_deref().unwrap_or("")
    }

    pub fn methods(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.node(id).handlers.iter().map(|(m, _)| &**m)
    }

    /// All endpoint nodes, depth first, literal children before
    /// parametric ones.
    pub fn endpoints(&self) -> impl Iterator<Item = NodeId> {
        self.collect_endpoints().into_iter()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The segment texts along the path from the root to `id`.
    pub fn segments(&self, id: NodeId) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cur = id;
        while cur != ROOT {
            let node = self.node(cur);
            out.push(&*node.segment);
            match node.parent {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}
