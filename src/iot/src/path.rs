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

//! The inputs are used verbatim: no validation and no escaping. The service
//! is responsible for rejecting malformed names.

/// Formats the name of a location, the parent of device registries.
///
/// ```
/// # use cloud_iot_v1::path::location_path;
/// assert_eq!(
///     location_path("my-project", "us-central1"),
///     "projects/my-project/locations/us-central1"
/// );
/// ```
pub fn location_path(project: &str, region: &str) -> String {
    format!("projects/{project}/locations/{region}")
}

/// Formats the name of a device registry.
///
/// ```
/// # use cloud_iot_v1::path::registry_path;
/// assert_eq!(
///     registry_path("my-project", "us-central1", "my-registry"),
///     "projects/my-project/locations/us-central1/registries/my-registry"
/// );
/// ```
pub fn registry_path(project: &str, region: &str, registry: &str) -> String {
    format!("projects/{project}/locations/{region}/registries/{registry}")
}

/// Formats the name of a device.
pub fn device_path(project: &str, region: &str, registry: &str, device: &str) -> String {
    format!("projects/{project}/locations/{region}/registries/{registry}/devices/{device}")
}
