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

pub mod device_manager {
    use crate::Result;
    use crate::model;
    use std::sync::Arc;

    type Stub = Arc<dyn crate::stub::DeviceManager>;

    /// The request builder for [DeviceManager::delete_device_registry][crate::client::DeviceManager::delete_device_registry] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloud_iot_v1::builder::device_manager::DeleteDeviceRegistry;
    /// # async fn sample() -> cloud_iot_v1::Result<()> {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteDeviceRegistry {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteDeviceRegistry {
        stub: Stub,
        request: model::DeleteDeviceRegistryRequest,
    }

    impl DeleteDeviceRegistry {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: model::DeleteDeviceRegistryRequest::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::DeleteDeviceRegistryRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sends the request.
        ///
        /// The request is sent once: there is no retry loop and no timeout.
        pub async fn send(self) -> Result<model::Empty> {
            self.stub.delete_device_registry(self.request).await
        }

        /// Sets the value of [name][model::DeleteDeviceRegistryRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.request.name = v.into();
            self
        }
    }

    /// The request builder for [DeviceManager::get_device_registry][crate::client::DeviceManager::get_device_registry] calls.
    #[derive(Clone, Debug)]
    pub struct GetDeviceRegistry {
        stub: Stub,
        request: model::GetDeviceRegistryRequest,
    }

    impl GetDeviceRegistry {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: model::GetDeviceRegistryRequest::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetDeviceRegistryRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::DeviceRegistry> {
            self.stub.get_device_registry(self.request).await
        }

        /// Sets the value of [name][model::GetDeviceRegistryRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.request.name = v.into();
            self
        }
    }

    /// The request builder for [DeviceManager::list_device_registries][crate::client::DeviceManager::list_device_registries] calls.
    #[derive(Clone, Debug)]
    pub struct ListDeviceRegistries {
        stub: Stub,
        request: model::ListDeviceRegistriesRequest,
    }

    impl ListDeviceRegistries {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: model::ListDeviceRegistriesRequest::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ListDeviceRegistriesRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sends the request, returning a single page of results.
        pub async fn send(self) -> Result<model::ListDeviceRegistriesResponse> {
            self.stub.list_device_registries(self.request).await
        }

        /// Sets the value of [parent][model::ListDeviceRegistriesRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][model::ListDeviceRegistriesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::ListDeviceRegistriesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.request.page_token = v.into();
            self
        }
    }

    /// The request builder for [DeviceManager::create_device][crate::client::DeviceManager::create_device] calls.
    #[derive(Clone, Debug)]
    pub struct CreateDevice {
        stub: Stub,
        request: model::CreateDeviceRequest,
    }

    impl CreateDevice {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: model::CreateDeviceRequest::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::CreateDeviceRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Device> {
            self.stub.create_device(self.request).await
        }

        /// Sets the value of [parent][model::CreateDeviceRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.request.parent = v.into();
            self
        }

        /// Sets the value of [device][model::CreateDeviceRequest::device].
        ///
        /// This is a **required** field for requests.
        pub fn set_device<T: Into<model::Device>>(mut self, v: T) -> Self {
            self.request.device = Some(v.into());
            self
        }
    }

    /// The request builder for [DeviceManager::delete_device][crate::client::DeviceManager::delete_device] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteDevice {
        stub: Stub,
        request: model::DeleteDeviceRequest,
    }

    impl DeleteDevice {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: model::DeleteDeviceRequest::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::DeleteDeviceRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Empty> {
            self.stub.delete_device(self.request).await
        }

        /// Sets the value of [name][model::DeleteDeviceRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.request.name = v.into();
            self
        }
    }

    /// The request builder for [DeviceManager::get_device][crate::client::DeviceManager::get_device] calls.
    #[derive(Clone, Debug)]
    pub struct GetDevice {
        stub: Stub,
        request: model::GetDeviceRequest,
    }

    impl GetDevice {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: model::GetDeviceRequest::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetDeviceRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Device> {
            self.stub.get_device(self.request).await
        }

        /// Sets the value of [name][model::GetDeviceRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.request.name = v.into();
            self
        }
    }

    /// The request builder for [DeviceManager::list_devices][crate::client::DeviceManager::list_devices] calls.
    #[derive(Clone, Debug)]
    pub struct ListDevices {
        stub: Stub,
        request: model::ListDevicesRequest,
    }

    impl ListDevices {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: model::ListDevicesRequest::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ListDevicesRequest>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sends the request, returning a single page of results.
        pub async fn send(self) -> Result<model::ListDevicesResponse> {
            self.stub.list_devices(self.request).await
        }

        /// Sets the value of [parent][model::ListDevicesRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][model::ListDevicesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::ListDevicesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.request.page_token = v.into();
            self
        }
    }
}
