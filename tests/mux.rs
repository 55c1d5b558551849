use trie_router::{Dispatch, Mux, Options};

use http::StatusCode;

fn response<H>(d: Dispatch<'_, H>) -> http::Response<String> {
    match d {
        Dispatch::Response(res) => res,
        Dispatch::Handler { .. } => panic!("expected a synthesized response"),
    }
}

fn handler<H>(d: Dispatch<'_, H>) -> (&H, trie_router::Params) {
    match d {
        Dispatch::Handler { handler, params } => (handler, params),
        Dispatch::Response(res) => panic!("expected a handler, got {:?}", res.status()),
    }
}

#[test]
fn dispatches_to_handler_with_params() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/users/:id", 1);
    mux.post("/users", 2);

    let (h, params) = handler(mux.dispatch("GET", "/users/42"));
    assert_eq!(*h, 1);
    assert_eq!(params.get("id"), Some("42"));

    let (h, params) = handler(mux.dispatch("POST", "/users"));
    assert_eq!(*h, 2);
    assert!(params.is_empty());
}

#[test]
fn method_not_allowed() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/abc", 1);

    let res = response(mux.dispatch("PUT", "/abc"));
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()["allow"], "GET");
    assert_eq!(
        res.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert_eq!(res.body(), "\"PUT\" not allowed in \"/abc\"\n");
}

#[test]
fn options_reports_allow() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/abc", 1);
    mux.put("/abc", 2);

    let res = response(mux.dispatch("OPTIONS", "/abc"));
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.headers()["allow"], "GET, PUT");
    assert_eq!(res.body(), "");
}

#[test]
fn unrouted_path_is_not_implemented() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/abc", 1);

    let res = response(mux.dispatch("GET", "/"));
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert_eq!(res.body(), "\"/\" not implemented\n");
}

#[test]
fn redirects() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/abc", 1);
    mux.get("/xyz/", 2);

    // trailing slash
    let res = response(mux.dispatch("GET", "/abc/"));
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()["location"], "/abc");

    // non-GET methods redirect with 307
    let res = response(mux.dispatch("POST", "/abc/"));
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/abc");

    // missing trailing slash
    let res = response(mux.dispatch("GET", "/xyz"));
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()["location"], "/xyz/");

    // duplicated slashes collapse to the fixed path
    let res = response(mux.dispatch("GET", "//abc"));
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()["location"], "/abc");
}

#[test]
fn redirects_disabled_by_options() {
    let mut mux: Mux<usize> = Mux::with_options(Options::default());
    mux.get("/abc", 1);

    let res = response(mux.dispatch("GET", "/abc/"));
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
}

#[test]
fn fallback_handler() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/abc", 1);
    mux.otherwise(9);

    // unrouted path
    let (h, _) = handler(mux.dispatch("GET", "/nope"));
    assert_eq!(*h, 9);

    // method miss on a routed path
    let (h, _) = handler(mux.dispatch("PUT", "/abc"));
    assert_eq!(*h, 9);

    // OPTIONS still answers by itself
    let res = response(mux.dispatch("OPTIONS", "/abc"));
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // redirects still win over the fallback
    let res = response(mux.dispatch("GET", "/abc/"));
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
}

#[test]
fn methods_are_uppercased() {
    let mut mux: Mux<usize> = Mux::new();
    mux.handle("get", "/x", 1);

    let (h, _) = handler(mux.dispatch("GET", "/x"));
    assert_eq!(*h, 1);
}

#[test]
fn rejects_empty_method() {
    let mut mux: Mux<usize> = Mux::new();
    assert!(mux.try_handle("", "/x", 1).is_err());
}

#[test]
fn rejects_duplicate_registration() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/x", 1);
    assert!(mux.try_handle("GET", "/x", 2).is_err());
    assert!(mux.try_handle("POST", "/x", 2).is_ok());
}

#[test]
fn endpoint_listing_through_mux() {
    let mut mux: Mux<usize> = Mux::new();
    mux.get("/a", 1);
    mux.get("/a/:b", 2);
    mux.post("/a/:b", 3);

    let trie = mux.trie();
    let listed: Vec<(String, String)> = trie
        .endpoints()
        .map(|id| (trie.pattern(id).to_owned(), trie.allow(id).to_owned()))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("/a".to_owned(), "GET".to_owned()),
            ("/a/:b".to_owned(), "GET, POST".to_owned()),
        ]
    );
}
