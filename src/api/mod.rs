//! Backend REST Client
//!
//! Async bindings to the remote API, organized by domain.

mod auth;
mod properties;

pub use auth::*;
pub use properties::*;

use std::future::Future;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use reqwest::Client;
use thiserror::Error;

use crate::config::REQUEST_TIMEOUT_MS;

/// Failure modes of a backend call. A timeout is an error, not an
/// empty result.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request timed out after {0}ms")]
    Timeout(u32),
    /// The server answered with a rejection message (e.g. bad login).
    #[error("{0}")]
    Rejected(String),
}

pub(crate) fn client() -> Client {
    Client::new()
}

/// Race a request against the configured timeout.
pub(crate) async fn with_timeout<F, T>(fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, reqwest::Error>>,
{
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    match select(Box::pin(fut), Box::pin(timeout)).await {
        Either::Left((result, _)) => result.map_err(ApiError::from),
        Either::Right(_) => Err(ApiError::Timeout(REQUEST_TIMEOUT_MS)),
    }
}
