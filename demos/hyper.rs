use trie_router::{Mux, Params};

use std::convert::Infallible as Never;
use std::sync::Arc;

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response};

async fn hello(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or("world");
    Ok(Response::new(Body::from(format!("hello, {}!\n", name))))
}

async fn file(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let path = params.get("path").unwrap_or("");
    Ok(Response::new(Body::from(format!("access file: {}\n", path))))
}

async fn not_found(req: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    dbg!((req.method(), req.uri().path()));
    let res = Response::builder()
        .status(404)
        .body(Body::from("404 Not Found\n"))
        .unwrap();
    Ok(res)
}

#[tokio::main]
async fn main() {
    let mut mux = Mux::new();
    mux.route("GET", "/hello/:name", hello)
        .route("GET", "/api/v1/file/:path*", file)
        .fallback(not_found);
    let service = Arc::new(mux.into_service());

    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move {
            Ok::<_, Never>(service_fn(move |req| {
                let service = service.clone();
                async move { service.serve(req).await }
            }))
        }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("api: http://{}/api/v1/file/path/to/public/file", addr);
    println!("405: curl -X PUT http://{}/hello/world", addr);
    println!();

    server.await.unwrap();
}
