// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `weather_temp` - an idempotent temperature check.
//!
//! Each run fetches the current temperature of a city, compares it with the
//! value stored in a state file and rewrites the file only when the two
//! differ. The outcome reports whether anything changed, which is what a
//! configuration-management host needs to decide between "ok" and "changed".
//!
//! # Components
//!
//! - [`fetcher`]: current temperature lookup behind the
//!   [`TemperatureSource`] trait
//! - [`store`]: the state file
//! - [`reconcile`]: fetch, compare, conditional write
//! - [`host`]: parameter parsing and result rendering for the binary module
//!
//! # Quick Start
//!
//! ```no_run
//! use weather_temp::{ApiKey, City, OpenWeatherClient, Reconciler, StateFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reconciler = Reconciler::new(OpenWeatherClient::new()?);
//!
//!     let result = reconciler
//!         .reconcile(
//!             &ApiKey::new("0123456789abcdef")?,
//!             &City::new("Paris")?,
//!             &StateFile::new("/var/lib/weather/paris"),
//!         )
//!         .await?;
//!
//!     if result.changed {
//!         println!("{}", result.message);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Secrets
//!
//! The API key is never logged, serialized or included in an error message.

pub mod error;
pub mod fetcher;
pub mod host;
pub mod reconcile;
pub mod store;
pub mod types;

pub use error::{
    Error, FetchError, ParseError, ReadError, RemoteError, Result, ValueError, WriteError,
};
pub use fetcher::{OpenWeatherClient, OpenWeatherConfig, TemperatureSource};
pub use reconcile::{ReconcileFailure, ReconcileResult, Reconciler};
pub use store::StateFile;
pub use types::{ApiKey, City};
