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

/// Defines the trait used to implement [crate::client::DeviceManager].
///
/// Application developers may need to implement this trait to mock
/// `client::DeviceManager`. In other use-cases, application developers only
/// use `client::DeviceManager` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[async_trait::async_trait]
pub trait DeviceManager: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::DeviceManager::delete_device_registry].
    async fn delete_device_registry(
        &self,
        _req: model::DeleteDeviceRegistryRequest,
    ) -> Result<model::Empty> {
        Err(unimplemented("delete_device_registry"))
    }

    /// Implements [crate::client::DeviceManager::get_device_registry].
    async fn get_device_registry(
        &self,
        _req: model::GetDeviceRegistryRequest,
    ) -> Result<model::DeviceRegistry> {
        Err(unimplemented("get_device_registry"))
    }

    /// Implements [crate::client::DeviceManager::list_device_registries].
    async fn list_device_registries(
        &self,
        _req: model::ListDeviceRegistriesRequest,
    ) -> Result<model::ListDeviceRegistriesResponse> {
        Err(unimplemented("list_device_registries"))
    }

    /// Implements [crate::client::DeviceManager::create_device].
    async fn create_device(&self, _req: model::CreateDeviceRequest) -> Result<model::Device> {
        Err(unimplemented("create_device"))
    }

    /// Implements [crate::client::DeviceManager::delete_device].
    async fn delete_device(&self, _req: model::DeleteDeviceRequest) -> Result<model::Empty> {
        Err(unimplemented("delete_device"))
    }

    /// Implements [crate::client::DeviceManager::get_device].
    async fn get_device(&self, _req: model::GetDeviceRequest) -> Result<model::Device> {
        Err(unimplemented("get_device"))
    }

    /// Implements [crate::client::DeviceManager::list_devices].
    async fn list_devices(
        &self,
        _req: model::ListDevicesRequest,
    ) -> Result<model::ListDevicesResponse> {
        Err(unimplemented("list_devices"))
    }
}

fn unimplemented(method: &str) -> crate::Error {
    crate::Error::other(format!("{method}() is not implemented by this stub"))
}
