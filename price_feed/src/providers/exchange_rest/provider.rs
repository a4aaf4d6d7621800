use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    models::sample::PricePoint,
    providers::{
        PriceSource,
        errors::{SourceError, SourceInitError},
        exchange_rest::response::HistoryResponse,
    },
};

/// Upstream calls are bounded by this timeout; there is no retry, a failed
/// attempt surfaces to the caller as-is.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the exchange's price-history API.
///
/// Authenticates every request with a bearer token installed as a default
/// header, so individual calls carry no credential handling.
pub struct ExchangeRestProvider {
    client: Client,
    base_url: Url,
    _token: SecretString,
}

impl ExchangeRestProvider {
    /// Creates a new exchange REST provider.
    ///
    /// `base_url` is the API root (e.g. `http://20.244.56.144/evaluation-service`);
    /// `token` is the bearer credential issued for it.
    pub fn new(base_url: &str, token: SecretString) -> Result<Self, SourceInitError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceInitError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let mut auth_value =
            header::HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
        auth_value.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth_value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            _token: token,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::Api("upstream base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl PriceSource for ExchangeRestProvider {
    async fn price_history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<Vec<PricePoint>, SourceError> {
        let url = self.endpoint(&["stocks", ticker])?;
        let response = self
            .client
            .get(url)
            .query(&[("minutes", window_minutes)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(SourceError::Api(format!("{status}: {body}")));
        }

        let history = response.json::<HistoryResponse>().await?;
        Ok(history.into_points())
    }

    async fn list_tickers(&self) -> Result<serde_json::Value, SourceError> {
        let url = self.endpoint(&["stocks"])?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(SourceError::Api(format!("{status}: {body}")));
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}
