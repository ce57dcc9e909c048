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

//! Registry and device operations on top of the `cloud-iot-v1` client.
//!
//! Each function receives a constructed [DeviceManager] client, formats the
//! resource name, and sends one request (one per page for list operations).
//! Errors from the client are returned unchanged.

pub mod args;

use args::{Args, Operation};
use cloud_iot_v1::Result;
use cloud_iot_v1::client::DeviceManager;
use cloud_iot_v1::model::{Device, DeviceRegistry, Empty, GatewayConfig, GatewayType, LogLevel};
use cloud_iot_v1::path;

/// Deletes the registry `registry_id` in `project` and `region`.
///
/// The resource name is formatted before the client is used. The request is
/// sent once, and the service acknowledgement or error is returned as-is.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// use cloud_iot_v1::client::DeviceManager;
/// let client = DeviceManager::builder().build().await?;
/// iot_samples::delete_registry(&client, "PROJECT-NAME", "us-central1", "REGISTRY-NAME").await?;
/// # Ok(()) }
/// ```
pub async fn delete_registry(
    client: &DeviceManager,
    project: &str,
    region: &str,
    registry_id: &str,
) -> Result<Empty> {
    let name = path::registry_path(project, region, registry_id);
    println!("name: {name}");
    tracing::info!(%name, "deleting registry");
    let response = client
        .delete_device_registry()
        .set_name(&name)
        .send()
        .await?;
    println!("Deleted registry: {registry_id}");
    Ok(response)
}

/// Lists all the registries in `project` and `region`.
pub async fn list_registries(
    client: &DeviceManager,
    project: &str,
    region: &str,
) -> Result<Vec<DeviceRegistry>> {
    let parent = path::location_path(project, region);
    let mut registries = Vec::new();
    let mut page_token = String::new();
    loop {
        tracing::debug!(%parent, %page_token, "listing registries");
        let page = client
            .list_device_registries()
            .set_parent(&parent)
            .set_page_token(page_token)
            .send()
            .await?;
        for r in &page.device_registries {
            println!("{} {}", r.id, r.name);
        }
        registries.extend(page.device_registries);
        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }
    Ok(registries)
}

/// Fetches and prints one registry.
pub async fn get_registry(
    client: &DeviceManager,
    project: &str,
    region: &str,
    registry_id: &str,
) -> Result<DeviceRegistry> {
    let name = path::registry_path(project, region, registry_id);
    let registry = client.get_device_registry().set_name(name).send().await?;
    println!("Get registry {}:", registry.id);
    println!("name: {}", registry.name);
    if let Some(c) = &registry.mqtt_config {
        println!("MQTT config: {:?}", c.mqtt_enabled_state);
    }
    if let Some(c) = &registry.http_config {
        println!("HTTP config: {:?}", c.http_enabled_state);
    }
    println!("Event topics:");
    for c in &registry.event_notification_configs {
        println!("  {}", c.pubsub_topic_name);
    }
    println!("State topic:");
    if let Some(c) = &registry.state_notification_config {
        println!("  {}", c.pubsub_topic_name);
    }
    Ok(registry)
}

/// Lists all the devices in a registry.
pub async fn list_devices(
    client: &DeviceManager,
    project: &str,
    region: &str,
    registry_id: &str,
) -> Result<Vec<Device>> {
    let parent = path::registry_path(project, region, registry_id);
    println!("Showing devices for registry {registry_id}:");
    let mut devices = Vec::new();
    let mut page_token = String::new();
    loop {
        let page = client
            .list_devices()
            .set_parent(&parent)
            .set_page_token(page_token)
            .send()
            .await?;
        for d in &page.devices {
            let gateway_type = d
                .gateway_config
                .as_ref()
                .map(|c| c.gateway_type)
                .unwrap_or_default();
            println!("{} {} {gateway_type:?}", d.id, d.num_id);
        }
        devices.extend(page.devices);
        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }
    Ok(devices)
}

/// Fetches and prints one device.
pub async fn get_device(
    client: &DeviceManager,
    project: &str,
    region: &str,
    registry_id: &str,
    device_id: &str,
) -> Result<Device> {
    let name = path::device_path(project, region, registry_id, device_id);
    let device = client.get_device().set_name(name).send().await?;
    println!("{device:#?}");
    println!(
        "Get device {device_id}: {} {} {}",
        device.id, device.num_id, device.name
    );
    Ok(device)
}

/// Creates a device in a registry.
///
/// The device is created as a non-gateway device, logging errors only.
pub async fn create_device(
    client: &DeviceManager,
    project: &str,
    region: &str,
    registry_id: &str,
    device_id: &str,
) -> Result<Device> {
    let parent = path::registry_path(project, region, registry_id);
    let device = Device::new()
        .set_id(device_id)
        .set_gateway_config(GatewayConfig::new().set_gateway_type(GatewayType::NonGateway))
        .set_log_level(LogLevel::Error);
    tracing::info!(%parent, device_id, "creating device");
    let device = client
        .create_device()
        .set_parent(parent)
        .set_device(device)
        .send()
        .await?;
    println!("{device:#?}");
    println!(
        "Created device {device_id}: {} {} {}",
        device.id, device.num_id, device.name
    );
    Ok(device)
}

/// Deletes one device, returning the acknowledgement unchanged.
pub async fn delete_device(
    client: &DeviceManager,
    project: &str,
    region: &str,
    registry_id: &str,
    device_id: &str,
) -> Result<Empty> {
    let name = path::device_path(project, region, registry_id, device_id);
    tracing::info!(%name, "deleting device");
    let response = client.delete_device().set_name(name).send().await?;
    println!("Deleted device {device_id}");
    Ok(response)
}

/// Runs the operation selected by the `cb-iot` arguments.
///
/// Operations with `--device` act on that device, the others act on the
/// registry or, for `list`, on every registry in the region.
pub async fn run(client: &DeviceManager, args: &Args) -> anyhow::Result<()> {
    let (project, region) = (args.project.as_str(), args.region.as_str());
    let registry = args.registry.as_deref().unwrap_or_default();
    match (args.operation, args.device.as_deref()) {
        (Operation::List, _) => {
            let registries = list_registries(client, project, region).await?;
            tracing::info!("found {} registries", registries.len());
        }
        (Operation::DeviceList, _) => {
            let devices = list_devices(client, project, region, registry).await?;
            tracing::info!("found {} devices in {registry}", devices.len());
        }
        (Operation::Get, None) => {
            get_registry(client, project, region, registry).await?;
        }
        (Operation::Delete, None) => {
            delete_registry(client, project, region, registry).await?;
        }
        (Operation::Create, None) => {
            anyhow::bail!("the Create operation requires --device")
        }
        (Operation::Get, Some(device)) => {
            get_device(client, project, region, registry, device).await?;
        }
        (Operation::Delete, Some(device)) => {
            delete_device(client, project, region, registry, device).await?;
        }
        (Operation::Create, Some(device)) => {
            create_device(client, project, region, registry, device).await?;
        }
    }
    Ok(())
}

/// Installs a `fmt` subscriber writing to stderr.
///
/// The subscriber is active until the returned guard is dropped.
pub fn enable_tracing(verbose: bool) -> tracing::dispatcher::DefaultGuard {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
