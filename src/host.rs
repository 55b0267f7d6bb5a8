// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binary module protocol.
//!
//! The configuration-management host hands the module a JSON document of
//! parameters and expects a single JSON object back on stdout. This module
//! validates those parameters, runs a [`Reconciler`] and renders its outcome
//! into the host's result format.
//!
//! Parameters:
//!
//! | Key        | Alias        | Required | Meaning                          |
//! |------------|--------------|----------|----------------------------------|
//! | `api_key`  | `credential` | yes      | Weather service key (never echoed) |
//! | `city`     | `identifier` | yes      | City to look up                  |
//! | `filepath` | `path`       | yes      | State file                       |
//! | `endpoint` |              | no       | Service base URL override        |
//! | `timeout`  |              | no       | Request timeout in seconds       |
//!
//! Host-internal keys such as `_ansible_check_mode` are ignored.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ParseError, ValueError};
use crate::fetcher::{OpenWeatherConfig, TemperatureSource};
use crate::reconcile::{ReconcileFailure, ReconcileResult, Reconciler};
use crate::store::StateFile;
use crate::types::{ApiKey, City};

/// Raw module parameters as sent by the host.
#[derive(Deserialize)]
pub struct ModuleArgs {
    /// Weather service key.
    #[serde(alias = "credential")]
    pub api_key: String,
    /// City to look up.
    #[serde(alias = "identifier")]
    pub city: String,
    /// State file path.
    #[serde(alias = "path")]
    pub filepath: PathBuf,
    /// Service base URL override.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout: Option<u64>,
}

// Hand-written so the key never reaches a log line.
impl std::fmt::Debug for ModuleArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleArgs")
            .field("api_key", &"***")
            .field("city", &self.city)
            .field("filepath", &self.filepath)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ModuleArgs {
    /// Parses the host's parameter document.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the document is not valid JSON or a
    /// required key is missing.
    pub fn from_json(document: &str) -> Result<Self, ParseError> {
        serde_json::from_str(document).map_err(Into::into)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if a required string is empty or the timeout
    /// is zero.
    pub fn validate(self) -> Result<Invocation, Error> {
        let mut config = OpenWeatherConfig::new();
        if let Some(endpoint) = self.endpoint {
            config = config.with_base_url(endpoint);
        }
        match self.timeout {
            Some(0) => return Err(ValueError::Zero { field: "timeout" }.into()),
            Some(secs) => config = config.with_timeout(Duration::from_secs(secs)),
            None => {}
        }

        Ok(Invocation {
            api_key: ApiKey::new(self.api_key)?,
            city: City::new(&self.city)?,
            state: StateFile::new(self.filepath),
            config,
        })
    }
}

/// Validated parameters for one run.
#[derive(Debug)]
pub struct Invocation {
    /// Weather service key.
    pub api_key: ApiKey,
    /// City to look up.
    pub city: City,
    /// State file.
    pub state: StateFile,
    /// Client configuration.
    pub config: OpenWeatherConfig,
}

impl Invocation {
    /// Runs the check against the configured weather service.
    pub async fn run(self) -> ModuleOutput {
        match self.config.clone().into_client() {
            Ok(client) => self.run_with(&Reconciler::new(client)).await,
            Err(e) => ModuleOutput::failed(&ReconcileFailure {
                error: e.into(),
                original_value: None,
                new_value: None,
            }),
        }
    }

    /// Runs the check with an arbitrary temperature source.
    pub async fn run_with<S: TemperatureSource>(&self, reconciler: &Reconciler<S>) -> ModuleOutput {
        match reconciler
            .reconcile(&self.api_key, &self.city, &self.state)
            .await
        {
            Ok(result) => ModuleOutput::Ok(result),
            Err(failure) => ModuleOutput::failed(&failure),
        }
    }
}

/// Failure report in the host's format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    /// Always `true`.
    pub failed: bool,
    /// Error message.
    pub msg: String,
    /// Always `false`: a failed run never reports a change.
    pub changed: bool,
    /// Value read from the state file, if the run got that far.
    pub original_value: Option<f64>,
    /// Fetched value, if the fetch succeeded.
    pub new_value: Option<f64>,
}

/// What the module prints on stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleOutput {
    /// The run completed.
    Ok(ReconcileResult),
    /// The run failed.
    Failed(FailureReport),
}

impl ModuleOutput {
    /// Builds a failure report from a failed run.
    #[must_use]
    pub fn failed(failure: &ReconcileFailure) -> Self {
        Self::Failed(FailureReport {
            failed: true,
            msg: failure.to_string(),
            changed: false,
            original_value: failure.original_value,
            new_value: failure.new_value,
        })
    }

    /// Builds a failure report for a problem found before the run started,
    /// such as unreadable or invalid parameters.
    #[must_use]
    pub fn rejected(reason: impl std::fmt::Display) -> Self {
        Self::Failed(FailureReport {
            failed: true,
            msg: reason.to_string(),
            changed: false,
            original_value: None,
            new_value: None,
        })
    }

    /// Returns whether this output reports a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Renders the output as the JSON document the host reads.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"failed": true, "msg": "cannot render module output: {e}"}}"#)
        })
    }
}
