// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Idempotent temperature reconciliation.
//!
//! A run fetches the current temperature, reads the stored one and rewrites
//! the state file only when they differ. Comparison is exact `f64` equality
//! on the fetched value and the value parsed back from the file; no rounding
//! or tolerance is applied.
//!
//! # Examples
//!
//! ```no_run
//! use weather_temp::fetcher::OpenWeatherClient;
//! use weather_temp::reconcile::Reconciler;
//! use weather_temp::store::StateFile;
//! use weather_temp::types::{ApiKey, City};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reconciler = Reconciler::new(OpenWeatherClient::new()?);
//! let result = reconciler
//!     .reconcile(
//!         &ApiKey::new("0123456789abcdef")?,
//!         &City::new("Paris")?,
//!         &StateFile::new("/tmp/paris_temperature"),
//!     )
//!     .await?;
//! println!("{}", result.message);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::error::Error;
use crate::fetcher::TemperatureSource;
use crate::store::StateFile;
use crate::types::{ApiKey, City};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileResult {
    /// Whether the state file was (re)written.
    pub changed: bool,
    /// Value read from the state file, if it held one.
    pub original_value: Option<f64>,
    /// Freshly fetched value.
    pub new_value: f64,
    /// Human-readable summary.
    pub message: String,
}

impl ReconcileResult {
    fn updated(original_value: Option<f64>, new_value: f64) -> Self {
        Self {
            changed: true,
            original_value,
            new_value,
            message: format!("Temperature updated to {new_value}°C."),
        }
    }

    fn unchanged(value: f64) -> Self {
        Self {
            changed: false,
            original_value: Some(value),
            new_value: value,
            message: "Temperature unchanged.".to_string(),
        }
    }
}

/// A failed run, with whatever result fields were known when it stopped.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ReconcileFailure {
    /// What went wrong.
    #[source]
    pub error: Error,
    /// Value read from the state file, if the run got that far.
    pub original_value: Option<f64>,
    /// Fetched value, if the fetch succeeded.
    pub new_value: Option<f64>,
}

impl ReconcileFailure {
    fn fetch_failed(error: Error) -> Self {
        Self {
            error,
            original_value: None,
            new_value: None,
        }
    }
}

/// Runs the fetch, compare and conditional write sequence.
#[derive(Debug, Clone)]
pub struct Reconciler<S> {
    source: S,
}

impl<S: TemperatureSource> Reconciler<S> {
    /// Creates a reconciler fetching from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the temperature source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Brings `state` in line with the current temperature of `city`.
    ///
    /// The file is written only when it held no readable value or a value
    /// different from the fetched one.
    ///
    /// # Errors
    ///
    /// Returns a [`ReconcileFailure`] if the fetch fails, if the state file
    /// exists but cannot be read, or if the write fails. Fetch and read
    /// failures leave the state file untouched.
    pub async fn reconcile(
        &self,
        api_key: &ApiKey,
        city: &City,
        state: &StateFile,
    ) -> Result<ReconcileResult, ReconcileFailure> {
        let new_value = self
            .source
            .current_temperature(api_key, city)
            .await
            .map_err(ReconcileFailure::fetch_failed)?;

        let original_value = state.read_prior().map_err(|e| ReconcileFailure {
            error: e.into(),
            original_value: None,
            new_value: Some(new_value),
        })?;

        let unchanged = original_value == Some(new_value);

        let result = if unchanged {
            ReconcileResult::unchanged(new_value)
        } else {
            state
                .write_prior(new_value)
                .map_err(|e| ReconcileFailure {
                    error: e.into(),
                    original_value,
                    new_value: Some(new_value),
                })?;
            ReconcileResult::updated(original_value, new_value)
        };

        tracing::info!(
            city = %city,
            path = %state.path().display(),
            changed = result.changed,
            "{}",
            result.message
        );

        Ok(result)
    }
}
