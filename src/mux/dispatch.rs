use super::Mux;
use crate::trie::Params;

use http::header::{HeaderValue, ALLOW, CONTENT_TYPE, LOCATION, X_CONTENT_TYPE_OPTIONS};
use http::{Response, StatusCode};

/// Outcome of routing one request.
#[derive(Debug)]
pub enum Dispatch<'a, H> {
    /// A handler was selected; the caller invokes it with the params.
    Handler { handler: &'a H, params: Params },
    /// The router answered by itself.
    Response(Response<String>),
}

impl<H> Mux<H> {
    /// Resolves `(method, path)` to a handler or a synthesized response.
    ///
    /// Redirects are `301` for GET and `307` for any other method. A
    /// miss with no fallback is `501 Not Implemented`; a matched
    /// endpoint without the method is `204` for OPTIONS and `405`
    /// otherwise, both carrying an `Allow` header.
    ///
    /// # Panics
    ///
    /// Panics when `path` is empty or does not start with `/`.
    pub fn dispatch(&self, method: &str, path: &str) -> Dispatch<'_, H> {
        let matched = self.trie.match_path(path);

        let id = match matched.node {
            Some(id) => id,
            None => {
                if matched.fpr.is_some() || matched.tsr.is_some() {
                    let location = matched.fpr.or(matched.tsr).unwrap();
                    return Dispatch::Response(redirect(method, &location));
                }
                return match self.otherwise {
                    Some(ref h) => Dispatch::Handler {
                        handler: h,
                        params: matched.params,
                    },
                    None => Dispatch::Response(not_implemented(path)),
                };
            }
        };

        if let Some(handler) = self.trie.get_handler(id, method) {
            return Dispatch::Handler {
                handler,
                params: matched.params,
            };
        }
        if method == "OPTIONS" {
            return Dispatch::Response(no_content(self.trie.allow(id)));
        }
        match self.otherwise {
            Some(ref h) => Dispatch::Handler {
                handler: h,
                params: matched.params,
            },
            None => Dispatch::Response(method_not_allowed(method, path, self.trie.allow(id))),
        }
    }
}

fn redirect(method: &str, location: &str) -> Response<String> {
    let mut res = Response::new(String::new());
    *res.status_mut() = if method == "GET" {
        StatusCode::MOVED_PERMANENTLY
    } else {
        StatusCode::TEMPORARY_REDIRECT
    };
    if let Ok(value) = HeaderValue::from_str(location) {
        res.headers_mut().insert(LOCATION, value);
    }
    res
}

fn not_implemented(path: &str) -> Response<String> {
    plain_text(
        StatusCode::NOT_IMPLEMENTED,
        format!("\"{}\" not implemented\n", path),
    )
}

fn method_not_allowed(method: &str, path: &str, allow: &str) -> Response<String> {
    let mut res = plain_text(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("\"{}\" not allowed in \"{}\"\n", method, path),
    );
    insert_allow(&mut res, allow);
    res
}

fn no_content(allow: &str) -> Response<String> {
    let mut res = Response::new(String::new());
    *res.status_mut() = StatusCode::NO_CONTENT;
    insert_allow(&mut res, allow);
    res
}

fn plain_text(status: StatusCode, body: String) -> Response<String> {
    let mut res = Response::new(body);
    *res.status_mut() = status;
    res.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    res.headers_mut()
        .insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    res
}

fn insert_allow(res: &mut Response<String>, allow: &str) {
    if let Ok(value) = HeaderValue::from_str(allow) {
        res.headers_mut().insert(ALLOW, value);
    }
}
