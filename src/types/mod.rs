// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated invocation inputs.
//!
//! # Types
//!
//! - [`ApiKey`] - Secret key for the weather service, masked when printed
//! - [`City`] - Non-empty city name to look up

mod api_key;
mod city;

pub use api_key::ApiKey;
pub use city::City;
