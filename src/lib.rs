//! A parameterized trie based URL path router.
//!
//! Patterns like `/api/:type/:id(^\d+$)` or `/files/:path*` are compiled
//! into a segment trie; matching a concrete path yields the endpoint, the
//! captured parameters, or a redirect fix-up for sloppy paths. [`Mux`]
//! multiplexes HTTP methods on top of the trie.

#![forbid(unsafe_code)]

pub mod mux;
pub mod trie;

pub use self::mux::{Dispatch, Mux};
pub use self::trie::{Matched, NodeId, Options, Params, Trie, TrieError};

#[cfg(feature = "hyper-service")]
pub mod hyper_service;
