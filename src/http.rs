//! Shared HTTP plumbing for provider clients
//!
//! Every provider call goes through [`get_json`]: one attempt, no retry, and
//! every failure tagged with the provider that caused it. Error text never
//! carries the request URL, since query strings hold provider credentials.

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{PlannerError, Provider};

const USER_AGENT: &str = concat!("TravelPlanner/", env!("CARGO_PKG_VERSION"));

/// Build a client for one provider
pub fn build_client(provider: Provider, timeout_seconds: u64) -> Result<Client, PlannerError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| PlannerError::config(format!("Failed to create {provider} HTTP client: {e}")))
}

/// Send a GET request once and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(
    provider: Provider,
    request: RequestBuilder,
) -> Result<T, PlannerError> {
    let started = Instant::now();

    let response = request
        .send()
        .await
        .map_err(|e| {
            PlannerError::upstream(provider, format!("request failed: {}", e.without_url()))
        })?;

    let status = response.status();
    debug!(
        "{} responded {} in {:.3}s",
        provider,
        status,
        started.elapsed().as_secs_f64()
    );

    if !status.is_success() {
        warn!("{} returned HTTP {}", provider, status);
        return Err(PlannerError::upstream(provider, format!("HTTP {status}")));
    }

    response.json::<T>().await.map_err(|e| {
        PlannerError::upstream(
            provider,
            format!("invalid response body: {}", e.without_url()),
        )
    })
}
