// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! City name used as the lookup subject.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// Name of the city whose temperature is looked up.
///
/// Surrounding whitespace is trimmed; the remaining name must not be empty.
/// The weather service accepts plain names (`"Paris"`) as well as qualified
/// ones (`"Paris,FR"`), so no further validation is done here.
///
/// # Examples
///
/// ```
/// use weather_temp::types::City;
///
/// let city = City::new("  Paris,FR ").unwrap();
/// assert_eq!(city.as_str(), "Paris,FR");
///
/// assert!(City::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Creates a city name.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Empty` if the name is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValueError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValueError::Empty { field: "city" });
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the city name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for City {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
