//! Tower layer carrying the clacks response hook.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::http::{Request, Response};
use tower::{Layer, Service};

use crate::error::PluginError;
use crate::header::{TemplateField, CLACKS_HEADER_NAME, CLACKS_HEADER_VALUE};
use crate::hook;

/// Layer that appends the clacks header to every response of the wrapped
/// service.
///
/// Applying this layer to a proxy's router is the hook registration: the
/// wrapped service's response path is the response-header-read point.
#[derive(Clone, Debug)]
pub struct ClacksLayer {
    template: TemplateField,
}

impl ClacksLayer {
    /// Register the plugin: build the template field once and hand back the
    /// layer that carries it.
    ///
    /// On failure the layer is never constructed and no injection occurs;
    /// the host continues without the plugin.
    pub fn register() -> Result<Self, PluginError> {
        let template = TemplateField::clacks().map_err(|e| {
            tracing::error!(error = %e, "clacks plugin not registered");
            e
        })?;

        tracing::info!(
            header = CLACKS_HEADER_NAME,
            value = CLACKS_HEADER_VALUE,
            "registered clacks response hook"
        );
        Ok(Self { template })
    }

    /// The template field carried by this layer.
    pub fn template(&self) -> &TemplateField {
        &self.template
    }
}

impl<S> Layer<S> for ClacksLayer {
    type Service = ClacksService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClacksService {
            inner,
            template: self.template.clone(),
        }
    }
}

/// Middleware produced by [`ClacksLayer`].
#[derive(Clone, Debug)]
pub struct ClacksService<S> {
    inner: S,
    template: TemplateField,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for ClacksService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: 'static,
    ResBody: 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let template = self.template.clone();
        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.await?;
            hook::inject(&template, response.headers_mut());
            Ok(response)
        })
    }
}
