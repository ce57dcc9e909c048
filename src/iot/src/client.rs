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

//! Contains the DeviceManager client and related types.

use crate::builder::device_manager;
use crate::client_builder::ClientBuilder;
use std::sync::Arc;

/// Implements a client for the ClearBlade IoT Core device manager API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use cloud_iot_v1::client::DeviceManager;
/// let client = DeviceManager::builder().build().await?;
/// // use `client` to make requests to the device manager API.
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `DeviceManager` use the `with_*` methods in the type returned
/// by [builder()][DeviceManager::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the `url` in the service
///   account key file.
/// * [with_credentials()]: by default this client loads the service account
///   key named by the `CLEARBLADE_CONFIGURATION` environment variable.
///
/// # Pooling and Cloning
///
/// `DeviceManager` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `DeviceManager` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// # Service Description
///
/// Resources are named as follows:
///
/// - Registries: `projects/{project}/locations/{region}/registries/{registry}`
/// - Devices: `projects/{project}/locations/{region}/registries/{registry}/devices/{device}`
///
/// The [path][crate::path] module has helpers to format these names.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct DeviceManager {
    inner: Arc<dyn crate::stub::DeviceManager>,
}

impl DeviceManager {
    /// Returns a builder for [DeviceManager].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use cloud_iot_v1::client::DeviceManager;
    /// let client = DeviceManager::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::DeviceManager + 'static,
    {
        Self::from_stub_arc(Arc::new(stub))
    }

    pub(crate) fn from_stub_arc(inner: Arc<dyn crate::stub::DeviceManager>) -> Self {
        Self { inner }
    }

    /// Deletes a device registry configuration.
    ///
    /// # Example
    /// ```no_run
    /// # use cloud_iot_v1::client::DeviceManager;
    /// async fn example(client: &DeviceManager) -> cloud_iot_v1::Result<()> {
    ///     client
    ///         .delete_device_registry()
    ///         .set_name("projects/my-project/locations/us-central1/registries/my-registry")
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_device_registry(&self) -> device_manager::DeleteDeviceRegistry {
        device_manager::DeleteDeviceRegistry::new(self.inner.clone())
    }

    /// Gets a device registry configuration.
    pub fn get_device_registry(&self) -> device_manager::GetDeviceRegistry {
        device_manager::GetDeviceRegistry::new(self.inner.clone())
    }

    /// Lists device registries.
    ///
    /// Each call returns a single page; use the `next_page_token` in the
    /// response to request the following page.
    pub fn list_device_registries(&self) -> device_manager::ListDeviceRegistries {
        device_manager::ListDeviceRegistries::new(self.inner.clone())
    }

    /// Creates a device in a device registry.
    ///
    /// # Example
    /// ```no_run
    /// # use cloud_iot_v1::client::DeviceManager;
    /// # use cloud_iot_v1::model::{Device, GatewayConfig, GatewayType};
    /// async fn example(client: &DeviceManager) -> cloud_iot_v1::Result<()> {
    ///     let device = client
    ///         .create_device()
    ///         .set_parent("projects/my-project/locations/us-central1/registries/my-registry")
    ///         .set_device(
    ///             Device::new()
    ///                 .set_id("my-device")
    ///                 .set_gateway_config(GatewayConfig::new().set_gateway_type(GatewayType::NonGateway)),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("created {}", device.name);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_device(&self) -> device_manager::CreateDevice {
        device_manager::CreateDevice::new(self.inner.clone())
    }

    /// Deletes a device.
    pub fn delete_device(&self) -> device_manager::DeleteDevice {
        device_manager::DeleteDevice::new(self.inner.clone())
    }

    /// Gets details about a device.
    pub fn get_device(&self) -> device_manager::GetDevice {
        device_manager::GetDevice::new(self.inner.clone())
    }

    /// List devices in a device registry.
    pub fn list_devices(&self) -> device_manager::ListDevices {
        device_manager::ListDevices::new(self.inner.clone())
    }
}
