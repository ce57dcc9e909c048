// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client library for the ClearBlade IoT Core device manager API.
//!
//! The device manager API exposes device registries and the devices they
//! contain. Applications create a [DeviceManager][client::DeviceManager]
//! client once, and then use it to make requests:
//!
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use cloud_iot_v1::client::DeviceManager;
//! use cloud_iot_v1::path::registry_path;
//! let client = DeviceManager::builder().build().await?;
//! client
//!     .delete_device_registry()
//!     .set_name(registry_path("my-project", "us-central1", "my-registry"))
//!     .send()
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! By default the client loads its credentials from the file named by the
//! `CLEARBLADE_CONFIGURATION` environment variable. See [credentials] for
//! details.

/// The request builders returned by the [DeviceManager][client::DeviceManager] methods.
pub mod builder;

/// Types to configure and create clients.
pub mod client_builder;

pub mod client;

/// Service account credentials for the device manager API.
pub mod credentials;

/// The core error types returned by this crate.
pub mod error;

/// The messages and enums used by the device manager API.
pub mod model;

/// Helpers to format resource names.
pub mod path;

/// Traits to mock the clients in this library.
///
/// Application developers may need to mock the clients in this library to test
/// how their application works with different (and sometimes hard to trigger)
/// responses from the service. This module contains the traits that define the
/// client behavior.
pub mod stub;

pub(crate) mod tracing;
pub(crate) mod transport;

pub use client_builder::Error as ClientBuilderError;
pub use error::Error;

/// The result type returned by the requests in this crate.
pub type Result<T> = std::result::Result<T, Error>;
