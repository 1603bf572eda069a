//! Async HTTP client with bounded retries.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::retry::{BackoffPolicy, Outcome, RetryError, RetryExecutor};

use super::classify::classify;
use super::error::{ClientConfigError, DecodeError, HttpError};

/// Knobs for [`Client::new`]. All fields are required in spirit; the
/// defaults are sensible for SDK-style traffic.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-attempt transport timeout. Must be non-zero.
    pub timeout: Duration,
    /// Backoff policy shared by every call made through the client.
    pub retries: BackoffPolicy,
    /// Headers applied to every outgoing request.
    pub headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retries: BackoffPolicy::default(),
            headers: HeaderMap::new(),
        }
    }
}

/// Resilient request client: one logical GET/POST/DELETE per call, each
/// physical attempt classified and fed through the [`RetryExecutor`].
///
/// Holds no per-call state, so a single instance can serve concurrent
/// callers; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    retry: RetryExecutor,
}

impl Client {
    /// Build a client, validating the timeout and the retry policy.
    pub fn new(config: ClientConfig) -> Result<Self, ClientConfigError> {
        if config.timeout.is_zero() {
            return Err(ClientConfigError::Timeout);
        }
        let retry = RetryExecutor::new(config.retries)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(config.headers)
            .build()?;
        Ok(Self { http, retry })
    }

    /// GET `url` and decode the JSON response body into `T`.
    pub async fn get<T>(&self, cancel: &CancellationToken, url: &Url) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        self.run(cancel, Method::GET, url, None).await
    }

    /// POST `body` as JSON to `url` and decode the response into `T`.
    ///
    /// The body is serialized once, before the first attempt; a
    /// serialization failure is a terminal decode error and no request
    /// goes out.
    pub async fn post<B, T>(
        &self,
        cancel: &CancellationToken,
        url: &Url,
        body: &B,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| HttpError::Decode {
            url: url.clone(),
            source: DecodeError::Json(e),
        })?;
        self.run(cancel, Method::POST, url, Some(payload)).await
    }

    /// DELETE `url`, discarding any response body.
    pub async fn delete(&self, cancel: &CancellationToken, url: &Url) -> Result<(), HttpError> {
        let method = Method::DELETE;
        let result = self
            .retry
            .execute(cancel, || {
                let attempt = self.attempt(&method, url, None);
                async move {
                    match attempt.await {
                        Ok(_body) => Outcome::Success(()),
                        Err(e) => classify(e),
                    }
                }
            })
            .await;
        result.map_err(strip)
    }

    /// Retry loop shared by the body-decoding operations.
    async fn run<T>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        url: &Url,
        payload: Option<Vec<u8>>,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let result = self
            .retry
            .execute(cancel, || {
                let attempt = self.attempt(&method, url, payload.as_deref());
                async move {
                    match attempt.await {
                        Ok(body) => match serde_json::from_slice(&body) {
                            Ok(value) => Outcome::Success(value),
                            Err(e) => Outcome::Fatal(HttpError::Decode {
                                url: url.clone(),
                                source: DecodeError::Json(e),
                            }),
                        },
                        Err(e) => classify(e),
                    }
                }
            })
            .await;
        result.map_err(strip)
    }

    /// One physical attempt: send, read the body, classify the result.
    ///
    /// The body is read before the status is inspected so that status
    /// errors can carry whatever diagnostics the server sent; a body that
    /// cannot be read is a decode failure regardless of status.
    async fn attempt(
        &self,
        method: &Method,
        url: &Url,
        payload: Option<&[u8]>,
    ) -> Result<Vec<u8>, HttpError> {
        debug!(%method, %url, "outgoing request");
        let started = Instant::now();

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = payload {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    %method, %url, elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e, "outgoing request failed before a response arrived"
                );
                return Err(HttpError::Transport {
                    url: url.clone(),
                    source: e,
                });
            }
        };

        let status = response.status().as_u16();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if status >= 400 {
            warn!(%method, %url, status, elapsed_ms, "outgoing request failed");
        } else {
            debug!(%method, %url, status, elapsed_ms, "outgoing request completed");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Decode {
                url: url.clone(),
                source: DecodeError::BodyRead(e),
            })?
            .to_vec();

        if status >= 400 {
            return Err(HttpError::Status {
                url: url.clone(),
                status,
                body,
            });
        }

        Ok(body)
    }
}

/// Surface the domain error; cancellation keeps its own variant so callers
/// can tell an aborted call from an exhausted one.
fn strip(err: RetryError<HttpError>) -> HttpError {
    match err {
        RetryError::Action(e) => e,
        RetryError::Cancelled => HttpError::Cancelled,
    }
}
