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
use crate::client_builder::{self, ClientConfig};
use crate::credentials::Credentials;
use crate::error::{Error, HttpError};
use crate::model;
use http::HeaderName;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

const USER_TOKEN_HEADER: HeaderName = HeaderName::from_static("clearblade-usertoken");
const REGISTRIES: &str = "cloudiot";
const DEVICES: &str = "cloudiot_devices";
const USER_AGENT: &str = concat!("cloud-iot-rust/", env!("CARGO_PKG_VERSION"));

/// Implements [DeviceManager](super::stub::DeviceManager) using a [reqwest::Client].
#[derive(Clone, Debug)]
pub struct DeviceManager {
    inner: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

/// The credentials the service issues for device operations in one registry.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryCredentials {
    system_key: String,
    service_account_token: String,
    #[serde(default)]
    url: String,
}

impl DeviceManager {
    pub fn new(config: &ClientConfig, credentials: Credentials) -> client_builder::Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .unwrap_or(credentials.url())
            .trim_end_matches('/')
            .to_string();
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(client_builder::Error::transport)?;
        Ok(Self {
            inner,
            endpoint,
            credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn webhook(endpoint: &str, system_key: &str, service: &str) -> String {
        format!("{endpoint}/api/v/4/webhook/execute/{system_key}/{service}")
    }

    fn registries(&self, method: Method) -> RequestBuilder {
        let url = Self::webhook(&self.endpoint, self.credentials.system_key(), REGISTRIES);
        self.inner
            .request(method, url)
            .header(USER_TOKEN_HEADER, self.credentials.token())
    }

    /// Device operations use the per-registry credentials.
    async fn devices(&self, method: Method, registry: &str) -> Result<RequestBuilder> {
        let credentials = self.registry_credentials(registry).await?;
        let endpoint = match credentials.url.trim_end_matches('/') {
            "" => self.endpoint.as_str(),
            url => url,
        };
        let url = Self::webhook(endpoint, &credentials.system_key, DEVICES);
        Ok(self
            .inner
            .request(method, url)
            .header(USER_TOKEN_HEADER, credentials.service_account_token))
    }

    async fn registry_credentials(&self, registry: &str) -> Result<RegistryCredentials> {
        let (project, region, registry_id) = registry_components(registry).ok_or_else(|| {
            Error::other(format!(
                "cannot find the project, region and registry in {registry:?}"
            ))
        })?;
        let url = format!(
            "{}/api/v/1/code/{}/getRegistryCredentials",
            self.endpoint,
            self.credentials.system_key()
        );
        let builder = self
            .inner
            .post(url)
            .header(USER_TOKEN_HEADER, self.credentials.token())
            .json(&serde_json::json!({
                "project": project,
                "region": region,
                "registry": registry_id,
            }));
        execute(builder).await.map_err(|e| match e.kind() {
            crate::error::ErrorKind::Service => Error::authentication(e),
            _ => e,
        })
    }
}

#[async_trait::async_trait]
impl super::stub::DeviceManager for DeviceManager {
    async fn delete_device_registry(
        &self,
        req: model::DeleteDeviceRegistryRequest,
    ) -> Result<model::Empty> {
        let builder = self
            .registries(Method::DELETE)
            .query(&[("name", req.name.as_str())]);
        execute(builder).await
    }

    async fn get_device_registry(
        &self,
        req: model::GetDeviceRegistryRequest,
    ) -> Result<model::DeviceRegistry> {
        let builder = self
            .registries(Method::GET)
            .query(&[("name", req.name.as_str())]);
        execute(builder).await
    }

    async fn list_device_registries(
        &self,
        req: model::ListDeviceRegistriesRequest,
    ) -> Result<model::ListDeviceRegistriesResponse> {
        let builder = self
            .registries(Method::GET)
            .query(&[("parent", req.parent.as_str())]);
        let builder = paging(builder, req.page_size, &req.page_token);
        execute(builder).await
    }

    async fn create_device(&self, req: model::CreateDeviceRequest) -> Result<model::Device> {
        let device = req.device.unwrap_or_default();
        let builder = self
            .devices(Method::POST, &req.parent)
            .await?
            .query(&[("parent", req.parent.as_str())])
            .json(&device);
        execute(builder).await
    }

    async fn delete_device(&self, req: model::DeleteDeviceRequest) -> Result<model::Empty> {
        let builder = self
            .devices(Method::DELETE, &req.name)
            .await?
            .query(&[("name", req.name.as_str())]);
        execute(builder).await
    }

    async fn get_device(&self, req: model::GetDeviceRequest) -> Result<model::Device> {
        let builder = self
            .devices(Method::GET, &req.name)
            .await?
            .query(&[("name", req.name.as_str())]);
        execute(builder).await
    }

    async fn list_devices(
        &self,
        req: model::ListDevicesRequest,
    ) -> Result<model::ListDevicesResponse> {
        let builder = self
            .devices(Method::GET, &req.parent)
            .await?
            .query(&[("parent", req.parent.as_str())]);
        let builder = paging(builder, req.page_size, &req.page_token);
        execute(builder).await
    }
}

fn paging(builder: RequestBuilder, page_size: i32, page_token: &str) -> RequestBuilder {
    let builder = if page_size > 0 {
        builder.query(&[("pageSize", page_size)])
    } else {
        builder
    };
    if page_token.is_empty() {
        builder
    } else {
        builder.query(&[("pageToken", page_token)])
    }
}

/// Returns the project, region and registry id in a registry or device name.
fn registry_components(name: &str) -> Option<(&str, &str, &str)> {
    let mut segments = name.split('/');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (
            Some("projects"),
            Some(project),
            Some("locations"),
            Some(region),
            Some("registries"),
            Some(registry),
        ) => Some((project, region, registry)),
        _ => None,
    }
}

async fn execute<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let response = builder.send().await.map_err(Error::io)?;
    if !response.status().is_success() {
        return Err(to_http_error(response).await);
    }
    let body = response.bytes().await.map_err(Error::io)?;
    // Deletes may return an empty body instead of `{}`.
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        bytes::Bytes::from_static(b"{}")
    } else {
        body
    };
    serde_json::from_slice::<T>(&body).map_err(Error::serde)
}

async fn to_http_error(response: reqwest::Response) -> Error {
    let status_code = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
        .collect::<HashMap<_, _>>();
    let payload = match response.bytes().await {
        Ok(b) if !b.is_empty() => Some(b),
        Ok(_) => None,
        Err(e) => return Error::io(e),
    };
    Error::service(HttpError::new(status_code, headers, payload))
}
