//! Blocking `tiny_http` listener driving the async router.
//!
//! `tiny_http` only offers blocking receives, so each receive runs on the
//! blocking pool with a short timeout. Between receives the loop checks the
//! shutdown signal. Each request is handled on its own tokio task, so a slow
//! upstream never holds up other clients.

use super::request::{ApiMethod, ApiRequest, ApiResponse};
use super::router::ApiRouter;
use futures::FutureExt;
use mockable::Clock;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// How long one blocking receive waits before the shutdown check.
const RECEIVE_POLL: Duration = Duration::from_millis(250);

/// Errors starting or running the listener.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind its address.
    #[error("failed to bind {address}: {message}")]
    Bind {
        /// Address that was requested.
        address: String,
        /// Reason reported by the listener.
        message: String,
    },

    /// Receiving a request failed.
    #[error("failed to receive request: {0}")]
    Receive(#[from] std::io::Error),

    /// The blocking receive task panicked or was cancelled.
    #[error("receive task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// HTTP listener bound to an address.
pub struct ApiServer<C>
where
    C: Clock + Send + Sync,
{
    listener: Arc<tiny_http::Server>,
    router: Arc<ApiRouter<C>>,
}

impl<C> ApiServer<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Binds `address` (for example `0.0.0.0:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] when the address is unavailable.
    pub fn bind(address: &str, router: Arc<ApiRouter<C>>) -> Result<Self, ServerError> {
        let listener = tiny_http::Server::http(address).map_err(|err| ServerError::Bind {
            address: address.to_owned(),
            message: err.to_string(),
        })?;
        Ok(Self {
            listener: Arc::new(listener),
            router,
        })
    }

    /// Returns the bound socket address, useful when binding port 0.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.server_addr().to_ip()
    }

    /// Serves requests until `shutdown` resolves.
    ///
    /// Requests in flight when the signal arrives are allowed to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when receiving from the listener fails.
    pub async fn serve_until<S>(self, shutdown: S) -> Result<(), ServerError>
    where
        S: Future<Output = ()>,
    {
        if let Some(address) = self.local_addr() {
            info!(%address, "server listening");
        }

        let mut shutdown = std::pin::pin!(shutdown);
        let mut in_flight = JoinSet::new();
        loop {
            while in_flight.try_join_next().is_some() {}
            if shutdown.as_mut().now_or_never().is_some() {
                info!(in_flight = in_flight.len(), "server shutting down");
                while in_flight.join_next().await.is_some() {}
                return Ok(());
            }

            let listener = Arc::clone(&self.listener);
            let received =
                tokio::task::spawn_blocking(move || listener.recv_timeout(RECEIVE_POLL)).await??;
            if let Some(request) = received {
                in_flight.spawn(respond(Arc::clone(&self.router), request));
            }
        }
    }
}

async fn respond<C>(router: Arc<ApiRouter<C>>, request: tiny_http::Request)
where
    C: Clock + Send + Sync,
{
    let api_request = ApiRequest::new(
        ApiMethod::parse(&request.method().to_string()),
        request.url(),
    );
    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = api_request.method().as_str(),
        path = api_request.path(),
    );

    async {
        let response = router.handle(&api_request).await;
        info!(status = response.status(), "request handled");
        if let Err(error) = request.respond(into_tiny_response(&response)) {
            warn!(%error, "failed to write response");
        }
    }
    .instrument(span)
    .await;
}

/// Header sent on every response.
const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

/// Extra headers answering a CORS preflight.
const PREFLIGHT_HEADERS: [(&str, &str); 2] = [
    ("Access-Control-Allow-Methods", "GET,HEAD,PUT,PATCH,POST,DELETE"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json; charset=utf-8");

/// Converts a router response into a `tiny_http` response with CORS headers.
#[must_use]
pub fn into_tiny_response(response: &ApiResponse) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let headers: Vec<(&str, &str)> = if response.body().is_some() {
        vec![ALLOW_ORIGIN, JSON_CONTENT_TYPE]
    } else {
        std::iter::once(ALLOW_ORIGIN).chain(PREFLIGHT_HEADERS).collect()
    };

    let mut tiny = tiny_http::Response::from_data(response.body_text().into_bytes())
        .with_status_code(response.status());
    for (name, value) in headers {
        if let Ok(parsed) = tiny_http::Header::from_bytes(name, value) {
            tiny.add_header(parsed);
        }
    }
    tiny
}
