// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! API key for the weather service.

use std::fmt;

use crate::error::ValueError;

/// Secret key authorizing requests to the weather service.
///
/// The key is masked in both `Debug` and `Display` output and the type does
/// not implement `Serialize`, so it cannot leak into logs or module results
/// by accident. The raw value is only reachable through [`expose`](Self::expose).
///
/// # Examples
///
/// ```
/// use weather_temp::types::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef").unwrap();
/// assert_eq!(format!("{key:?}"), "ApiKey(***)");
/// assert_eq!(key.to_string(), "***");
///
/// assert!(ApiKey::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates an API key.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Empty` if the key is empty or whitespace only.
    pub fn new(key: impl Into<String>) -> Result<Self, ValueError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValueError::Empty { field: "api_key" });
        }
        Ok(Self(key))
    }

    /// Returns the raw key for use in the outgoing request.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_keeps_raw_value() {
        let key = ApiKey::new("secret-key").unwrap();
        assert_eq!(key.expose(), "secret-key");
    }

    #[test]
    fn api_key_rejects_empty() {
        assert_eq!(
            ApiKey::new(""),
            Err(ValueError::Empty { field: "api_key" })
        );
        assert!(ApiKey::new("\t\n").is_err());
    }

    #[test]
    fn api_key_is_masked() {
        let key = ApiKey::new("secret-key").unwrap();
        assert!(!format!("{key:?}").contains("secret"));
        assert!(!format!("{key}").contains("secret"));
        assert!(!format!("{:#?}", Some(&key)).contains("secret"));
    }
}
