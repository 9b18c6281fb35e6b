use std::future::Future;

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config;
use crate::error::FetchError;
use crate::state::contact::{ContactForm, ContactReply, ContactTransport, CONTACT_PATH};
use crate::state::content::ContentSource;

impl From<GlooError> for FetchError {
    fn from(err: GlooError) -> Self {
        match err {
            GlooError::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

/// Entry point for calls to the NOVA API.
pub struct Api;

/// A request against the API base, sent with a timeout.
pub struct RequestWrapper {
    request: Request,
    path: String,
    timeout_ms: u32,
}

impl RequestWrapper {
    fn new(path: &str, method: &str) -> Self {
        let full_url = config::api_url(path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        };

        Self {
            request,
            path: path.to_string(),
            timeout_ms: config::REQUEST_TIMEOUT_MS,
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, FetchError> {
        let body_string =
            serde_json::to_string(data).map_err(|e| FetchError::Decode(e.to_string()))?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    /// Sends the request. Gives up with [`FetchError::Timeout`] once the
    /// timeout elapses; the browser may still finish the fetch in the
    /// background but nobody is listening for it.
    pub async fn send(self) -> Result<Response, FetchError> {
        let timer = TimeoutFuture::new(self.timeout_ms);
        match within_timeout(self.request.send(), timer, self.timeout_ms).await {
            Ok(result) => Ok(result?),
            Err(e) => {
                log::warn!("Request to {} timed out after {} ms", self.path, self.timeout_ms);
                Err(e)
            }
        }
    }
}

/// Resolves to `work`'s output unless `timer` finishes first.
async fn within_timeout<F, T>(work: F, timer: T, timeout_ms: u32) -> Result<F::Output, FetchError>
where
    F: Future,
    T: Future<Output = ()>,
{
    match future::select(Box::pin(work), Box::pin(timer)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(FetchError::Timeout(timeout_ms)),
    }
}

impl Api {
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

/// Talks to the real backend over `fetch`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl ContentSource for HttpTransport {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let response = Api::get(path).send().await?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json::<serde_json::Value>().await?)
    }
}

#[async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn send_contact(&self, form: &ContactForm) -> Result<ContactReply, FetchError> {
        let response = Api::post(CONTACT_PATH).json(form)?.send().await?;
        // Rejections still carry a JSON body with `success: false`.
        Ok(response.json::<ContactReply>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn elapsed_timer_gives_timeout_error() {
        let outcome = block_on(within_timeout(
            future::pending::<u16>(),
            future::ready(()),
            10_000,
        ));
        assert_eq!(outcome, Err(FetchError::Timeout(10_000)));
    }

    #[test]
    fn finished_request_wins_over_pending_timer() {
        let outcome = block_on(within_timeout(
            future::ready(200_u16),
            future::pending::<()>(),
            10_000,
        ));
        assert_eq!(outcome, Ok(200));
    }

    #[test]
    fn transport_errors_keep_their_kind() {
        let err = FetchError::from(GlooError::GlooError("connection refused".to_string()));
        assert!(matches!(err, FetchError::Network(_)));
    }
}
