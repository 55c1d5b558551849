//! HTTP method multiplexing over the pattern trie.

mod dispatch;

pub use self::dispatch::Dispatch;

use crate::trie::{NodeId, Options, Trie, TrieError};

/// A trie based HTTP request router.
///
/// Handlers are opaque to the router; [`Mux::dispatch`] hands the
/// selected handler back to the caller together with the captured
/// parameters, or answers with a synthesized response (redirect, 204,
/// 405, 501) when no handler applies.
pub struct Mux<H> {
    trie: Trie<H>,
    otherwise: Option<H>,
}

macro_rules! define_method {
    ($(#[$doc:meta])* $name:ident, $method:expr) => {
        $(#[$doc])*
        pub fn $name(&mut self, pattern: &str, handler: H) {
            self.handle($method, pattern, handler)
        }
    };
}

impl<H> Mux<H> {
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            otherwise: None,
        }
    }

    pub fn with_options(opts: Options) -> Self {
        Self {
            trie: Trie::with_options(opts),
            otherwise: None,
        }
    }

    define_method!(
        /// Registers a GET route.
        get,
        "GET"
    );
    define_method!(head, "HEAD");
    define_method!(post, "POST");
    define_method!(put, "PUT");
    define_method!(patch, "PATCH");
    define_method!(delete, "DELETE");
    define_method!(options, "OPTIONS");

    /// Registers a handler for `method` on `pattern`. The method name is
    /// uppercased; non-standard methods are accepted.
    ///
    /// # Panics
    ///
    /// Panics on an empty method, a malformed pattern, or a duplicate
    /// registration of `(pattern, method)`.
    pub fn handle(&mut self, method: &str, pattern: &str, handler: H) {
        if let Err(e) = self.try_handle(method, pattern, handler) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
    }

    pub fn try_handle(
        &mut self,
        method: &str,
        pattern: &str,
        handler: H,
    ) -> Result<NodeId, TrieError> {
        if method.is_empty() {
            return Err(TrieError::EmptyMethod);
        }
        let id = self.trie.try_define(pattern)?;
        self.trie.try_handle(id, &method.to_uppercase(), handler)?;
        Ok(id)
    }

    /// Installs a fallback handler that runs when no route matches or
    /// the matched endpoint has no handler for the method.
    pub fn otherwise(&mut self, handler: H) {
        self.otherwise = Some(handler);
    }

    /// The underlying trie, for endpoint listings and diagnostics.
    pub fn trie(&self) -> &Trie<H> {
        &self.trie
    }
}

impl<H> Default for Mux<H> {
    fn default() -> Self {
        Self::new()
    }
}
