// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Current temperature lookup.
//!
//! [`TemperatureSource`] is the seam between the reconciliation logic and the
//! outside world. [`OpenWeatherClient`] implements it against the
//! `OpenWeatherMap` API; tests substitute their own implementations.

mod http;
mod response;

pub use http::{OpenWeatherClient, OpenWeatherConfig};
pub use response::{MainReadings, WeatherResponse};

use crate::error::Error;
use crate::types::{ApiKey, City};

/// Something that can report the current temperature of a city.
#[allow(async_fn_in_trait)]
pub trait TemperatureSource {
    /// Returns the current temperature of `city` in degrees Celsius.
    ///
    /// # Errors
    ///
    /// - `Error::Fetch` if the request cannot be completed
    /// - `Error::Remote` if the service answers with a non-success status
    /// - `Error::Parse` if the answer carries no usable temperature
    async fn current_temperature(&self, api_key: &ApiKey, city: &City) -> Result<f64, Error>;
}
