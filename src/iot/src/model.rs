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

use std::collections::HashMap;

/// A generic empty message, returned by the delete requests.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Empty {}

/// A container for a group of devices.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeviceRegistry {
    /// The identifier of this device registry. For example, `myRegistry`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The resource path name. For example,
    /// `projects/example-project/locations/us-central1/registries/my-registry`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The configuration for notification of telemetry events received from
    /// the device.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event_notification_configs: Vec<EventNotificationConfig>,

    /// The configuration for notification of new states received from the
    /// device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_notification_config: Option<StateNotificationConfig>,

    /// The MQTT configuration for this device registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mqtt_config: Option<MqttConfig>,

    /// The DeviceService (HTTP) configuration for this device registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpConfig>,

    /// The default logging verbosity for activity from devices in this
    /// registry.
    pub log_level: LogLevel,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][DeviceRegistry::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][DeviceRegistry::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [event_notification_configs][DeviceRegistry::event_notification_configs].
    pub fn set_event_notification_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<EventNotificationConfig>,
    {
        self.event_notification_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [state_notification_config][DeviceRegistry::state_notification_config].
    pub fn set_state_notification_config<T: Into<StateNotificationConfig>>(mut self, v: T) -> Self {
        self.state_notification_config = Some(v.into());
        self
    }

    /// Sets the value of [mqtt_config][DeviceRegistry::mqtt_config].
    pub fn set_mqtt_config<T: Into<MqttConfig>>(mut self, v: T) -> Self {
        self.mqtt_config = Some(v.into());
        self
    }

    /// Sets the value of [http_config][DeviceRegistry::http_config].
    pub fn set_http_config<T: Into<HttpConfig>>(mut self, v: T) -> Self {
        self.http_config = Some(v.into());
        self
    }

    /// Sets the value of [log_level][DeviceRegistry::log_level].
    pub fn set_log_level<T: Into<LogLevel>>(mut self, v: T) -> Self {
        self.log_level = v.into();
        self
    }
}

/// The configuration for forwarding telemetry events.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventNotificationConfig {
    /// If the subfolder name matches this string exactly, this configuration
    /// will be used.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subfolder_matches: String,

    /// A Cloud Pub/Sub topic name. For example,
    /// `projects/myProject/topics/deviceEvents`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pubsub_topic_name: String,
}

impl EventNotificationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pubsub_topic_name][EventNotificationConfig::pubsub_topic_name].
    pub fn set_pubsub_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.pubsub_topic_name = v.into();
        self
    }

    /// Sets the value of [subfolder_matches][EventNotificationConfig::subfolder_matches].
    pub fn set_subfolder_matches<T: Into<String>>(mut self, v: T) -> Self {
        self.subfolder_matches = v.into();
        self
    }
}

/// The configuration for notification of new states received from the device.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StateNotificationConfig {
    /// A Cloud Pub/Sub topic name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pubsub_topic_name: String,
}

impl StateNotificationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pubsub_topic_name][StateNotificationConfig::pubsub_topic_name].
    pub fn set_pubsub_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.pubsub_topic_name = v.into();
        self
    }
}

/// The configuration of MQTT for a device registry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MqttConfig {
    /// If enabled, allows connections using the MQTT protocol.
    pub mqtt_enabled_state: MqttState,
}

impl MqttConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [mqtt_enabled_state][MqttConfig::mqtt_enabled_state].
    pub fn set_mqtt_enabled_state<T: Into<MqttState>>(mut self, v: T) -> Self {
        self.mqtt_enabled_state = v.into();
        self
    }
}

/// The configuration of the HTTP bridge for a device registry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpConfig {
    /// If enabled, allows devices to use DeviceService via the HTTP protocol.
    pub http_enabled_state: HttpState,
}

impl HttpConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [http_enabled_state][HttpConfig::http_enabled_state].
    pub fn set_http_enabled_state<T: Into<HttpState>>(mut self, v: T) -> Self {
        self.http_enabled_state = v.into();
        self
    }
}

/// The device resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Device {
    /// The user-defined device identifier. The device ID must be unique
    /// within a device registry.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The resource path name. For example,
    /// `projects/p1/locations/us-central1/registries/registry0/devices/dev0`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// A server-defined unique numeric ID for the device.
    ///
    /// The service encodes this 64-bit value as a string.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub num_id: String,

    /// If a device is blocked, connections or requests from this device will
    /// fail.
    pub blocked: bool,

    /// The last time an MQTT `PINGREQ` was received, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_heartbeat_time: Option<String>,

    /// The last time a telemetry event was received, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_time: Option<String>,

    /// The last time a state event was received, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_state_time: Option<String>,

    /// The logging verbosity for device activity.
    pub log_level: LogLevel,

    /// The metadata key-value pairs assigned to the device.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    /// Gateway-related configuration and state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_config: Option<GatewayConfig>,
}

impl Device {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Device::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Device::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [num_id][Device::num_id].
    pub fn set_num_id<T: Into<String>>(mut self, v: T) -> Self {
        self.num_id = v.into();
        self
    }

    /// Sets the value of [blocked][Device::blocked].
    pub fn set_blocked<T: Into<bool>>(mut self, v: T) -> Self {
        self.blocked = v.into();
        self
    }

    /// Sets the value of [log_level][Device::log_level].
    pub fn set_log_level<T: Into<LogLevel>>(mut self, v: T) -> Self {
        self.log_level = v.into();
        self
    }

    /// Sets the value of [metadata][Device::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [gateway_config][Device::gateway_config].
    pub fn set_gateway_config<T: Into<GatewayConfig>>(mut self, v: T) -> Self {
        self.gateway_config = Some(v.into());
        self
    }
}

/// Gateway-related configuration and state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Indicates whether the device is a gateway.
    pub gateway_type: GatewayType,

    /// The ID of the gateway the device accessed most recently.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_accessed_gateway_id: String,
}

impl GatewayConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_type][GatewayConfig::gateway_type].
    pub fn set_gateway_type<T: Into<GatewayType>>(mut self, v: T) -> Self {
        self.gateway_type = v.into();
        self
    }
}

/// Indicates whether an MQTT connection is enabled or disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum MqttState {
    /// Enables a MQTT connection.
    MqttEnabled,
    /// Disables a MQTT connection.
    MqttDisabled,
    /// No MQTT state specified. If not specified, MQTT will be enabled by default.
    #[default]
    #[serde(other)]
    MqttStateUnspecified,
}

/// Indicates whether DeviceService (HTTP) is enabled or disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum HttpState {
    /// Enables DeviceService (HTTP) service for the registry.
    HttpEnabled,
    /// Disables DeviceService (HTTP) service for the registry.
    HttpDisabled,
    /// No HTTP state specified. If not specified, DeviceService will be
    /// enabled by default.
    #[default]
    #[serde(other)]
    HttpStateUnspecified,
}

/// The logging verbosity for device activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum LogLevel {
    /// Disables logging.
    None,
    /// Error events will be logged.
    Error,
    /// Informational events will be logged, such as connections and
    /// disconnections.
    Info,
    /// All events will be logged.
    Debug,
    /// No logging specified. If not specified, logging will be disabled.
    #[default]
    #[serde(other)]
    LogLevelUnspecified,
}

/// Gateway type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum GatewayType {
    /// The device is a gateway.
    Gateway,
    /// The device is not a gateway.
    NonGateway,
    /// If unspecified, the device is considered a non-gateway device.
    #[default]
    #[serde(other)]
    GatewayTypeUnspecified,
}

/// Request for `DeleteDeviceRegistry`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDeviceRegistryRequest {
    /// The name of the device registry. For example,
    /// `projects/example-project/locations/us-central1/registries/my-registry`.
    pub name: String,
}

impl DeleteDeviceRegistryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeleteDeviceRegistryRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request for `GetDeviceRegistry`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDeviceRegistryRequest {
    /// The name of the device registry.
    pub name: String,
}

impl GetDeviceRegistryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetDeviceRegistryRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request for `ListDeviceRegistries`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDeviceRegistriesRequest {
    /// The project and cloud region path. For example,
    /// `projects/example-project/locations/us-central1`.
    pub parent: String,

    /// The maximum number of registries to return in the response. Zero
    /// means the service default.
    pub page_size: i32,

    /// The value returned by the last `ListDeviceRegistriesResponse`.
    pub page_token: String,
}

impl ListDeviceRegistriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListDeviceRegistriesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListDeviceRegistriesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListDeviceRegistriesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Response for `ListDeviceRegistries`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDeviceRegistriesResponse {
    /// The registries that matched the query.
    pub device_registries: Vec<DeviceRegistry>,

    /// If not empty, indicates that there may be more registries that match
    /// the request; this value should be passed in a new request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListDeviceRegistriesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [device_registries][ListDeviceRegistriesResponse::device_registries].
    pub fn set_device_registries<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DeviceRegistry>,
    {
        self.device_registries = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListDeviceRegistriesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// Request for `CreateDevice`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDeviceRequest {
    /// The name of the device registry where this device should be created.
    /// For example,
    /// `projects/example-project/locations/us-central1/registries/my-registry`.
    pub parent: String,

    /// The device registration details. The field `name` must be empty. The
    /// server generates `name` from the device registry `id` and the
    /// `parent` field.
    pub device: Option<Device>,
}

impl CreateDeviceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][CreateDeviceRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [device][CreateDeviceRequest::device].
    pub fn set_device<T: Into<Device>>(mut self, v: T) -> Self {
        self.device = Some(v.into());
        self
    }
}

/// Request for `DeleteDevice`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDeviceRequest {
    /// The name of the device. For example,
    /// `projects/p0/locations/us-central1/registries/registry0/devices/device0`.
    pub name: String,
}

impl DeleteDeviceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeleteDeviceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request for `GetDevice`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDeviceRequest {
    /// The name of the device.
    pub name: String,
}

impl GetDeviceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetDeviceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request for `ListDevices`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDevicesRequest {
    /// The device registry path. For example,
    /// `projects/my-project/locations/us-central1/registries/my-registry`.
    pub parent: String,

    /// The maximum number of devices to return in the response.
    pub page_size: i32,

    /// The value returned by the last `ListDevicesResponse`.
    pub page_token: String,
}

impl ListDevicesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListDevicesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListDevicesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListDevicesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Response for `ListDevices`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDevicesResponse {
    /// The devices that match the request.
    pub devices: Vec<Device>,

    /// If not empty, indicates that there may be more devices that match the
    /// request; this value should be passed in a new `ListDevicesRequest`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListDevicesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [devices][ListDevicesResponse::devices].
    pub fn set_devices<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Device>,
    {
        self.devices = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListDevicesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}
