//! Outbound JSON client shared by every external adapter
//!
//! Requests are issued exactly once: a failed call is reported to the caller,
//! never retried. Providers with a published quota get a rate limiter that
//! delays the request until a slot is free. Waiting for the slot and the
//! request itself share one timeout.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = concat!("shelfcheck/", env!("CARGO_PKG_VERSION"));

pub struct RateLimitClient {
    client: Client,
    rate_limiter: Option<DirectRateLimiter>,
    provider_name: String,
    timeout: Duration,
}

impl RateLimitClient {
    /// Client for the TMDB API (~40 req/10s, we stay well below)
    pub fn for_tmdb(timeout: Duration) -> AppResult<Self> {
        Self::new("TMDB", timeout, Some(Self::create_rate_limiter(4.0, 10)))
    }

    /// Client for the UPCitemdb trial endpoint (6 req/min burst)
    pub fn for_upcitemdb(timeout: Duration) -> AppResult<Self> {
        Self::new("UPCitemdb", timeout, Some(Self::create_rate_limiter(0.1, 6)))
    }

    /// Client for a self-hosted Jellyfin server, no quota
    pub fn for_jellyfin(timeout: Duration) -> AppResult<Self> {
        Self::new("Jellyfin", timeout, None)
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let period = Duration::from_secs_f64(1.0 / requests_per_second.max(f64::MIN_POSITIVE));
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    pub fn new(
        provider_name: &str,
        timeout: Duration,
        rate_limiter: Option<DirectRateLimiter>,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            rate_limiter,
            provider_name: provider_name.to_string(),
            timeout,
        })
    }

    /// GET `url` and decode the JSON body into `T`
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let started = Instant::now();
        if let Some(limiter) = &self.rate_limiter {
            tokio::time::timeout(self.timeout, limiter.until_ready())
                .await
                .map_err(|_| {
                    log::warn!(
                        "{} request slot not free within {:?}",
                        self.provider_name,
                        self.timeout
                    );
                    AppError::RateLimitError(format!(
                        "{} request quota exhausted",
                        self.provider_name
                    ))
                })?;
        }
        let remaining = self.timeout.saturating_sub(started.elapsed());

        let endpoint = Self::redact(url);
        LogContext::api_call(&self.provider_name, &endpoint, "", None);
        let timer = TimedOperation::new(&format!("{} GET", self.provider_name));

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .timeout(remaining)
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} API request failed: {}", self.provider_name, e);
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            &endpoint,
            status.as_str(),
            Some(timer.finish()),
        );

        if status.as_u16() == 429 {
            return Err(AppError::RateLimitError(format!(
                "{} API rate limit exceeded",
                self.provider_name
            )));
        }
        if !status.is_success() {
            return Err(AppError::ApiError(format!(
                "{} API returned error: {}",
                self.provider_name, status
            )));
        }

        self.parse_response(response).await
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                Self::truncate(&response_text, 200)
            ))
        })
    }

    fn truncate(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }

    /// Strip the query string so API keys never reach the log
    fn redact(url: &str) -> String {
        url.split('?').next().unwrap_or(url).to_string()
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter
            .as_ref()
            .map_or(true, |limiter| limiter.check().is_ok())
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Append URL-encoded query parameters to `base`
pub fn build_url(base: &str, params: &[(&str, &str)]) -> String {
    let mut url = base.to_string();
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 && !base.contains('?') { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}
