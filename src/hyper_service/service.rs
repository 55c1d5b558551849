use super::handler::{BoxHandler, Handler};
use super::{BoxError, BoxFuture, Request, Response};
use crate::mux::{Dispatch, Mux};

use std::task::{Context, Poll};

use hyper::service::Service;

/// A hyper service over a [`Mux`].
///
/// Redirects, 204/405/501 answers and `Allow` headers come from the mux;
/// only selected handlers (and the fallback) run user code.
pub struct RouterService<H = BoxHandler> {
    mux: Mux<H>,
}

impl<H> Service<Request> for RouterService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        RouterService::serve(self, req)
    }
}

impl<H> Service<Request> for &'_ RouterService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        RouterService::serve(self, req)
    }
}

impl<H> RouterService<H>
where
    H: Handler,
{
    pub fn new(mux: Mux<H>) -> Self {
        Self { mux }
    }

    /// Routes one request and returns its response future.
    pub fn serve(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        match self.mux.dispatch(req.method().as_str(), req.uri().path()) {
            Dispatch::Handler { handler, params } => Handler::call(handler, req, params),
            Dispatch::Response(res) => {
                let res = res.map(hyper::Body::from);
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

impl Mux<BoxHandler> {
    /// Registers a boxed handler, accepting plain async functions.
    pub fn route(
        &mut self,
        method: &str,
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.handle(method, pattern, Box::new(h));
        self
    }

    /// Installs a boxed fallback handler.
    pub fn fallback(&mut self, h: impl Handler + Send + Sync + 'static) -> &mut Self {
        self.otherwise(Box::new(h));
        self
    }

    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }
}
