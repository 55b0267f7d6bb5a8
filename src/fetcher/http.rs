// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the `OpenWeatherMap` current weather API.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{Error, FetchError, RemoteError};
use crate::fetcher::TemperatureSource;
use crate::fetcher::response::{ErrorBody, WeatherResponse};
use crate::types::{ApiKey, City};

// ============================================================================
// OpenWeatherConfig - Connection parameters
// ============================================================================

/// Configuration for the weather service client.
///
/// # Examples
///
/// ```
/// use weather_temp::fetcher::OpenWeatherConfig;
/// use std::time::Duration;
///
/// let config = OpenWeatherConfig::new()
///     .with_base_url("http://localhost:8080/")
///     .with_timeout(Duration::from_secs(3));
/// assert_eq!(config.base_url(), "http://localhost:8080");
/// ```
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    base_url: String,
    timeout: Duration,
}

impl OpenWeatherConfig {
    /// Default service endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openweathermap.org";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Unit system requested from the service. Temperatures come back in °C.
    pub const UNITS: &'static str = "metric";

    /// Creates a configuration pointing at the public service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the service endpoint. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the service endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `OpenWeatherClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<OpenWeatherClient, FetchError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError::Client(e.without_url().to_string()))?;

        Ok(OpenWeatherClient {
            base_url: self.base_url,
            timeout: self.timeout,
            client,
        })
    }
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// OpenWeatherClient
// ============================================================================

/// Looks up the current temperature of a city.
///
/// Every lookup is a single `GET /data/2.5/weather` request; nothing is
/// retried or cached.
///
/// # Examples
///
/// ```no_run
/// use weather_temp::fetcher::{OpenWeatherClient, TemperatureSource};
/// use weather_temp::types::{ApiKey, City};
///
/// # async fn example() -> weather_temp::Result<()> {
/// let client = OpenWeatherClient::new()?;
/// let key = ApiKey::new("0123456789abcdef")?;
/// let celsius = client.current_temperature(&key, &City::new("Paris")?).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl OpenWeatherClient {
    /// Creates a client for the public service with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, FetchError> {
        OpenWeatherConfig::new().into_client()
    }

    /// Returns the service endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request URL. The result contains the key and must never be
    /// logged.
    fn build_url(&self, api_key: &ApiKey, city: &City) -> String {
        format!(
            "{}/data/2.5/weather?q={}&units={}&appid={}",
            self.base_url,
            urlencoding::encode(city.as_str()),
            OpenWeatherConfig::UNITS,
            urlencoding::encode(api_key.expose())
        )
    }

    #[allow(clippy::cast_possible_truncation)]
    fn request_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout.as_millis() as u64)
        } else {
            err.into()
        }
    }
}

impl TemperatureSource for OpenWeatherClient {
    async fn current_temperature(&self, api_key: &ApiKey, city: &City) -> Result<f64, Error> {
        let url = self.build_url(api_key, city);

        tracing::debug!(city = %city, base_url = %self.base_url, "Requesting current weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received weather response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(RemoteError::Unauthorized.into());
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;

        if !status.is_success() {
            let message = ErrorBody::message_from(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let temperature = WeatherResponse::parse(&body)?.temperature()?;
        Ok(temperature)
    }
}
