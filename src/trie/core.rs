use super::node::{Kind, Node, NodeId, ROOT};
use super::parse::{parse_segment, Segment};
use super::{Matched, Trie, TrieError};

use std::borrow::Cow;

use regex::Regex;
use smallvec::SmallVec;

enum Hit<'p> {
    Literal(NodeId),
    Named(NodeId, &'p str),
    Wildcard(NodeId),
}

impl<T> Trie<T> {
    pub(super) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    pub(super) fn define_pattern(&mut self, pattern: &str) -> Result<NodeId, TrieError> {
        // A query fragment may appear in definition strings; it never
        // takes part in matching.
        let path = match pattern.find('?') {
            Some(i) => &pattern[..i],
            None => pattern,
        };
        if path.contains("//") {
            return Err(TrieError::InvalidPattern(pattern.to_owned()));
        }
        let trimmed = path.strip_prefix('/').unwrap_or(path);

        let frags: SmallVec<[&str; 8]> = trimmed.split('/').collect();
        let last = frags.len() - 1;
        let mut parent = ROOT;
        for (i, &frag) in frags.iter().enumerate() {
            let child = self.insert_child(parent, frag)?;
            if i < last && self.node(child).kind.is_wildcard() {
                return Err(TrieError::DefineAfterWildcard(pattern.to_owned()));
            }
            parent = child;
        }

        let node = self.node_mut(parent);
        node.endpoint = true;
        if node.pattern.is_none() {
            node.pattern = Some(format!("/{}", trimmed).into_boxed_str());
        }
        Ok(parent)
    }

    fn insert_child(&mut self, parent: NodeId, frag: &str) -> Result<NodeId, TrieError> {
        match parse_segment(frag)? {
            Segment::Literal(text) => {
                let key = self.fold_key(text);
                if let Some(&id) = self.node(parent).children.get(key.as_ref()) {
                    return Ok(id);
                }
                let id = self.alloc(frag, Kind::Literal, parent);
                self.node_mut(parent)
                    .children
                    .insert(key.into_owned().into_boxed_str(), id);
                Ok(id)
            }
            Segment::Named {
                name,
                regex,
                suffix,
                wildcard,
            } => self.insert_vary_child(parent, frag, name, regex, suffix, wildcard),
        }
    }

    fn insert_vary_child(
        &mut self,
        parent: NodeId,
        frag: &str,
        name: &str,
        regex: Option<Regex>,
        suffix: Option<&str>,
        wildcard: bool,
    ) -> Result<NodeId, TrieError> {
        // Reconcile against existing siblings: an equal-shape sibling is
        // reused when names agree and rejected when they differ; a
        // wildcard sibling (always stored last) rules out anything that
        // is not the same wildcard.
        let siblings = self.node(parent).vary_children.clone();
        for vid in siblings {
            let kind = &self.node(vid).kind;
            if kind.is_wildcard() {
                if !wildcard || kind.name() != name {
                    return Err(TrieError::ConflictingParametric(frag.to_owned()));
                }
                return Ok(vid);
            }
            if wildcard {
                continue;
            }
            let same_shape = kind.suffix() == suffix
                && kind.regex().map(Regex::as_str) == regex.as_ref().map(Regex::as_str);
            if same_shape {
                if kind.name() != name {
                    return Err(TrieError::ConflictingParametric(frag.to_owned()));
                }
                return Ok(vid);
            }
        }

        let id = self.alloc(frag, Kind::named(name, regex, suffix, wildcard), parent);
        let mut vary = std::mem::take(&mut self.node_mut(parent).vary_children);
        vary.push(id);
        // Stable priority order: suffix-bearing first, then regex-bearing,
        // insertion order otherwise.
        let nodes = &self.nodes;
        vary.sort_by_key(|&vid| {
            let kind = &nodes[vid.0].kind;
            (kind.suffix().is_none(), kind.regex().is_none())
        });
        self.node_mut(parent).vary_children = vary;
        Ok(id)
    }

    fn alloc(&mut self, segment: &str, kind: Kind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(segment, kind, Some(parent)));
        id
    }

    fn fold_key<'s>(&self, text: &'s str) -> Cow<'s, str> {
        if self.ignore_case {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    }

    pub(super) fn match_inner(&self, path: &str) -> Matched {
        let fixed: Cow<'_, str>;
        let dirty;
        if self.fpr {
            fixed = fix_path(path);
            dirty = fixed.len() != path.len();
        } else {
            fixed = Cow::Borrowed(path);
            dirty = false;
        }
        let path = &*fixed;

        let mut res = Matched::none();
        let mut parent = ROOT;
        let mut start = 1usize;
        loop {
            let rest = &path[start..];
            let (frag, sep) = match rest.find('/') {
                Some(j) => (&rest[..j], Some(j)),
                None => (rest, None),
            };
            match self.match_child(parent, frag) {
                Some(Hit::Literal(id)) => parent = id,
                Some(Hit::Named(id, value)) => {
                    res.params.push(self.node(id).kind.name(), value);
                    parent = id;
                }
                Some(Hit::Wildcard(id)) => {
                    res.params.push(self.node(id).kind.name(), &path[start..]);
                    parent = id;
                    break;
                }
                None => {
                    // The walk only recovers when the sole leftover is a
                    // trailing slash on an endpoint.
                    if self.tsr && frag.is_empty() && sep.is_none() && self.node(parent).endpoint {
                        let target = path[..path.len() - 1].to_owned();
                        if dirty {
                            res.fpr = Some(target);
                        } else {
                            res.tsr = Some(target);
                        }
                    }
                    return res;
                }
            }
            match sep {
                Some(j) => start += j + 1,
                None => break,
            }
        }

        let end_node = self.node(parent);
        if end_node.endpoint {
            if dirty {
                res.fpr = Some(path.to_owned());
            } else {
                res.node = Some(parent);
            }
        } else if self.tsr && end_node.children.contains_key("") {
            // A sibling pattern with an extra trailing slash exists.
            let target = format!("{}/", path);
            if dirty {
                res.fpr = Some(target);
            } else {
                res.tsr = Some(target);
            }
        }
        res
    }

    fn match_child<'p>(&self, parent: NodeId, frag: &'p str) -> Option<Hit<'p>> {
        let parent = self.node(parent);
        let key = self.fold_key(frag);
        if let Some(&id) = parent.children.get(key.as_ref()) {
            return Some(Hit::Literal(id));
        }
        for &vid in &parent.vary_children {
            let kind = &self.node(vid).kind;
            if kind.is_wildcard() {
                return Some(Hit::Wildcard(vid));
            }
            // A named segment never captures empty text.
            if frag.is_empty() {
                continue;
            }
            let value = match kind.suffix() {
                Some(sfx) => {
                    if frag.len() <= sfx.len() || !frag.ends_with(sfx) {
                        continue;
                    }
                    &frag[..frag.len() - sfx.len()]
                }
                None => frag,
            };
            if let Some(re) = kind.regex() {
                if !re.is_match(value) {
                    continue;
                }
            }
            return Some(Hit::Named(vid, value));
        }
        None
    }

    pub(super) fn collect_endpoints(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.visit(ROOT, &mut out);
        out
    }

    fn visit(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let node = self.node(id);
        if node.endpoint {
            out.push(id);
        }
        // Literal children before parametric children; the literal map
        // is unordered, so fix key order for a stable listing.
        let mut literal: Vec<(&str, NodeId)> =
            node.children.iter().map(|(k, &v)| (&**k, v)).collect();
        literal.sort_by_key(|&(k, _)| k);
        for (_, child) in literal {
            self.visit(child, out);
        }
        for &vid in &node.vary_children {
            self.visit(vid, out);
        }
    }
}

/// Collapses runs of `/` into a single `/`.
fn fix_path(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }
    let mut fixed = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        fixed.push(c);
    }
    Cow::Owned(fixed)
}

#[cfg(test)]
mod tests {
    use super::fix_path;

    #[test]
    fn fix_path_collapses_runs() {
        assert_eq!(fix_path("/a/b"), "/a/b");
        assert_eq!(fix_path("//a"), "/a");
        assert_eq!(fix_path("/a//b///c//"), "/a/b/c/");
    }
}
