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

use crate::Result;
use crate::model;

/// Implements a [DeviceManager](super::stub::DeviceManager) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DeviceManager<T>
where
    T: super::stub::DeviceManager + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DeviceManager<T>
where
    T: super::stub::DeviceManager + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl<T> super::stub::DeviceManager for DeviceManager<T>
where
    T: super::stub::DeviceManager + std::fmt::Debug + Send + Sync,
{
    #[::tracing::instrument(level = "info", skip(self), ret, err)]
    async fn delete_device_registry(
        &self,
        req: model::DeleteDeviceRegistryRequest,
    ) -> Result<model::Empty> {
        self.inner.delete_device_registry(req).await
    }

    #[::tracing::instrument(level = "info", skip(self), ret, err)]
    async fn get_device_registry(
        &self,
        req: model::GetDeviceRegistryRequest,
    ) -> Result<model::DeviceRegistry> {
        self.inner.get_device_registry(req).await
    }

    #[::tracing::instrument(level = "info", skip(self), ret, err)]
    async fn list_device_registries(
        &self,
        req: model::ListDeviceRegistriesRequest,
    ) -> Result<model::ListDeviceRegistriesResponse> {
        self.inner.list_device_registries(req).await
    }

    #[::tracing::instrument(level = "info", skip(self), ret, err)]
    async fn create_device(&self, req: model::CreateDeviceRequest) -> Result<model::Device> {
        self.inner.create_device(req).await
    }

    #[::tracing::instrument(level = "info", skip(self), ret, err)]
    async fn delete_device(&self, req: model::DeleteDeviceRequest) -> Result<model::Empty> {
        self.inner.delete_device(req).await
    }

    #[::tracing::instrument(level = "info", skip(self), ret, err)]
    async fn get_device(&self, req: model::GetDeviceRequest) -> Result<model::Device> {
        self.inner.get_device(req).await
    }

    #[::tracing::instrument(level = "info", skip(self), ret, err)]
    async fn list_devices(
        &self,
        req: model::ListDevicesRequest,
    ) -> Result<model::ListDevicesResponse> {
        self.inner.list_devices(req).await
    }
}
