// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Current weather response parsing.

use serde::Deserialize;

use crate::error::ParseError;

/// Body of a current weather response.
///
/// Only `main.temp` is modelled; everything else in the body is ignored.
///
/// # Examples
///
/// ```
/// use weather_temp::fetcher::WeatherResponse;
///
/// let json = r#"{"name": "Paris", "main": {"temp": 21.5, "humidity": 40}, "cod": 200}"#;
/// let response = WeatherResponse::parse(json).unwrap();
/// assert_eq!(response.temperature().unwrap(), 21.5);
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WeatherResponse {
    /// Main readings block.
    #[serde(default)]
    pub main: Option<MainReadings>,
}

/// The `main` block of a weather response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MainReadings {
    /// Current temperature in the requested unit system.
    #[serde(default)]
    pub temp: Option<f64>,
}

impl WeatherResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON or a field has the
    /// wrong type.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Returns the current temperature (`main.temp`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the `main` block or its
    /// temperature is absent.
    pub fn temperature(&self) -> Result<f64, ParseError> {
        self.main
            .as_ref()
            .ok_or_else(|| ParseError::MissingField("main".to_string()))?
            .temp
            .ok_or_else(|| ParseError::MissingField("main.temp".to_string()))
    }
}

/// Error body returned alongside non-success statuses.
#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

impl ErrorBody {
    /// Extracts the service's error message, if the body carries one.
    pub(crate) fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}
