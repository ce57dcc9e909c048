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

//! Tests for the invoker functions using a mocked client.

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cloud_iot_v1 as iot;
    use iot::client::DeviceManager;
    use iot::error::{ErrorKind, HttpError};
    use iot::model;
    use iot_samples::args::Args;
    use mockall::Sequence;
    use std::collections::HashMap;

    mockall::mock! {
        #[derive(Debug)]
        DeviceManager {}
        #[async_trait::async_trait]
        impl iot::stub::DeviceManager for DeviceManager {
            async fn delete_device_registry(&self, req: model::DeleteDeviceRegistryRequest) -> iot::Result<model::Empty>;
            async fn get_device_registry(&self, req: model::GetDeviceRegistryRequest) -> iot::Result<model::DeviceRegistry>;
            async fn list_device_registries(&self, req: model::ListDeviceRegistriesRequest) -> iot::Result<model::ListDeviceRegistriesResponse>;
            async fn create_device(&self, req: model::CreateDeviceRequest) -> iot::Result<model::Device>;
            async fn delete_device(&self, req: model::DeleteDeviceRequest) -> iot::Result<model::Empty>;
            async fn get_device(&self, req: model::GetDeviceRequest) -> iot::Result<model::Device>;
            async fn list_devices(&self, req: model::ListDevicesRequest) -> iot::Result<model::ListDevicesResponse>;
        }
    }

    const REGISTRY_NAME: &str =
        "projects/PROJECT-NAME/locations/us-central1/registries/REGISTRY-NAME";

    #[derive(Debug, PartialEq)]
    struct Sentinel(u32);
    impl std::fmt::Display for Sentinel {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sentinel {}", self.0)
        }
    }
    impl std::error::Error for Sentinel {}

    #[tokio::test]
    async fn delete_registry_success() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device_registry()
            .times(1)
            .withf(|r| r.name == REGISTRY_NAME)
            .return_once(|_| Ok(model::Empty::default()));
        let client = DeviceManager::from_stub(mock);

        let got = iot_samples::delete_registry(
            &client,
            "PROJECT-NAME",
            "us-central1",
            "REGISTRY-NAME",
        )
        .await?;
        assert_eq!(got, model::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn delete_registry_forwards_service_error() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device_registry()
            .times(1)
            .return_once(|_| {
                Err(iot::Error::service(HttpError::new(
                    404,
                    HashMap::new(),
                    Some(bytes::Bytes::from_static(b"registry not found")),
                )))
            });
        let client = DeviceManager::from_stub(mock);

        let err = iot_samples::delete_registry(&client, "p", "r", "missing")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.http_status_code(), Some(404));
        assert!(err.to_string().contains("registry not found"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn delete_registry_forwards_error_unchanged() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device_registry()
            .times(1)
            .return_once(|_| Err(iot::Error::other(Sentinel(42))));
        let client = DeviceManager::from_stub(mock);

        let err = iot_samples::delete_registry(&client, "p", "r", "reg")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.as_inner::<Sentinel>(), Some(&Sentinel(42)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_registry_does_not_escape() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device_registry()
            .times(1)
            .withf(|r| r.name == "projects/my project/locations/eu%2F1/registries/reg?x=1")
            .return_once(|_| Ok(model::Empty::default()));
        let client = DeviceManager::from_stub(mock);

        iot_samples::delete_registry(&client, "my project", "eu%2F1", "reg?x=1").await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_registries_follows_pages() -> anyhow::Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockDeviceManager::new();
        mock.expect_list_device_registries()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r| r.parent == "projects/p/locations/r" && r.page_token.is_empty())
            .return_once(|_| {
                Ok(model::ListDeviceRegistriesResponse::new()
                    .set_device_registries([
                        model::DeviceRegistry::new().set_id("a"),
                        model::DeviceRegistry::new().set_id("b"),
                    ])
                    .set_next_page_token("page-2"))
            });
        mock.expect_list_device_registries()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r| r.parent == "projects/p/locations/r" && r.page_token == "page-2")
            .return_once(|_| {
                Ok(model::ListDeviceRegistriesResponse::new()
                    .set_device_registries([model::DeviceRegistry::new().set_id("c")]))
            });
        let client = DeviceManager::from_stub(mock);

        let got = iot_samples::list_registries(&client, "p", "r").await?;
        let ids = got.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_registries_stops_on_error() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_list_device_registries()
            .times(1)
            .return_once(|_| Err(iot::Error::io("connection reset")));
        let client = DeviceManager::from_stub(mock);

        let err = iot_samples::list_registries(&client, "p", "r")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        Ok(())
    }

    #[tokio::test]
    async fn get_registry() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_get_device_registry()
            .times(1)
            .withf(|r| r.name == "projects/p/locations/r/registries/reg")
            .return_once(|r| {
                let mqtt = model::MqttConfig::new()
                    .set_mqtt_enabled_state(model::MqttState::MqttEnabled);
                Ok(model::DeviceRegistry::new()
                    .set_id("reg")
                    .set_name(r.name)
                    .set_mqtt_config(mqtt))
            });
        let client = DeviceManager::from_stub(mock);

        let got = iot_samples::get_registry(&client, "p", "r", "reg").await?;
        assert_eq!(got.id, "reg");
        assert_eq!(got.name, "projects/p/locations/r/registries/reg");
        Ok(())
    }

    #[tokio::test]
    async fn list_devices_follows_pages() -> anyhow::Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockDeviceManager::new();
        mock.expect_list_devices()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r| {
                r.parent == "projects/p/locations/r/registries/reg" && r.page_token.is_empty()
            })
            .return_once(|_| {
                let gateway =
                    model::GatewayConfig::new().set_gateway_type(model::GatewayType::Gateway);
                let device = model::Device::new()
                    .set_id("d1")
                    .set_num_id("1")
                    .set_gateway_config(gateway);
                Ok(model::ListDevicesResponse::new()
                    .set_devices([device])
                    .set_next_page_token("next"))
            });
        mock.expect_list_devices()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r| r.page_token == "next")
            .return_once(|_| {
                Ok(model::ListDevicesResponse::new()
                    .set_devices([model::Device::new().set_id("d2").set_num_id("2")]))
            });
        let client = DeviceManager::from_stub(mock);

        let got = iot_samples::list_devices(&client, "p", "r", "reg").await?;
        let ids = got.iter().map(|d| d.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["d1", "d2"]);
        let gateway_types = got
            .iter()
            .map(|d| d.gateway_config.as_ref().map(|c| c.gateway_type))
            .collect::<Vec<_>>();
        assert_eq!(gateway_types, vec![Some(model::GatewayType::Gateway), None]);
        Ok(())
    }

    #[tokio::test]
    async fn get_device() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_get_device()
            .times(1)
            .withf(|r| r.name == "projects/p/locations/r/registries/reg/devices/dev")
            .return_once(|_| Ok(model::Device::new().set_id("dev").set_num_id("123")));
        let client = DeviceManager::from_stub(mock);

        let got = iot_samples::get_device(&client, "p", "r", "reg", "dev").await?;
        assert_eq!(got.num_id, "123");
        Ok(())
    }

    #[tokio::test]
    async fn delete_device() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device()
            .times(1)
            .withf(|r| r.name == "projects/p/locations/r/registries/reg/devices/dev")
            .return_once(|_| Ok(model::Empty::default()));
        mock.expect_delete_device_registry().never();
        let client = DeviceManager::from_stub(mock);

        let got = iot_samples::delete_device(&client, "p", "r", "reg", "dev").await?;
        assert_eq!(got, model::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn create_device() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_create_device()
            .times(1)
            .withf(|r| {
                let Some(device) = &r.device else {
                    return false;
                };
                r.parent == "projects/p/locations/r/registries/reg"
                    && device.id == "dev"
                    && device.log_level == model::LogLevel::Error
                    && device
                        .gateway_config
                        .as_ref()
                        .is_some_and(|c| c.gateway_type == model::GatewayType::NonGateway)
            })
            .return_once(|r| {
                let device = r.device.unwrap_or_default();
                Ok(device
                    .set_name("projects/p/locations/r/registries/reg/devices/dev")
                    .set_num_id("456"))
            });
        let client = DeviceManager::from_stub(mock);

        let got = iot_samples::create_device(&client, "p", "r", "reg", "dev").await?;
        assert_eq!(got.id, "dev");
        assert_eq!(got.num_id, "456");
        Ok(())
    }

    #[tokio::test]
    async fn create_device_forwards_error() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_create_device()
            .times(1)
            .return_once(|_| {
                Err(iot::Error::service(HttpError::new(
                    409,
                    HashMap::new(),
                    Some(bytes::Bytes::from_static(b"device already exists")),
                )))
            });
        let client = DeviceManager::from_stub(mock);

        let err = iot_samples::create_device(&client, "p", "r", "reg", "dev")
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(409));
        Ok(())
    }

    #[tokio::test]
    async fn run_list() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_list_device_registries()
            .times(1)
            .withf(|r| r.parent == "projects/p/locations/us-central1")
            .return_once(|_| Ok(model::ListDeviceRegistriesResponse::default()));
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "list"])?;
        iot_samples::run(&client, &args).await?;
        Ok(())
    }

    #[tokio::test]
    async fn run_device_list() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_list_devices()
            .times(1)
            .withf(|r| r.parent == "projects/p/locations/us-central1/registries/reg")
            .return_once(|_| Ok(model::ListDevicesResponse::default()));
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "device-list"])?;
        iot_samples::run(&client, &args).await?;
        Ok(())
    }

    #[tokio::test]
    async fn run_get_registry() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_get_device_registry()
            .times(1)
            .withf(|r| r.name == "projects/p/locations/us-central1/registries/reg")
            .return_once(|_| Ok(model::DeviceRegistry::new().set_id("reg")));
        mock.expect_get_device().never();
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "get"])?;
        iot_samples::run(&client, &args).await?;
        Ok(())
    }

    #[tokio::test]
    async fn run_delete_registry() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device_registry()
            .times(1)
            .withf(|r| r.name == "projects/p/locations/us-central1/registries/reg")
            .return_once(|_| Ok(model::Empty::default()));
        mock.expect_delete_device().never();
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "delete"])?;
        iot_samples::run(&client, &args).await?;
        Ok(())
    }

    #[tokio::test]
    async fn run_get_device() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_get_device()
            .times(1)
            .withf(|r| r.name == "projects/p/locations/us-central1/registries/reg/devices/dev")
            .return_once(|_| Ok(model::Device::new().set_id("dev")));
        mock.expect_get_device_registry().never();
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "-d", "dev", "get"])?;
        iot_samples::run(&client, &args).await?;
        Ok(())
    }

    #[tokio::test]
    async fn run_delete_device() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device()
            .times(1)
            .withf(|r| r.name == "projects/p/locations/us-central1/registries/reg/devices/d1")
            .return_once(|_| Ok(model::Empty::default()));
        mock.expect_delete_device_registry().never();
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "-d", "d1", "delete"])?;
        iot_samples::run(&client, &args).await?;
        Ok(())
    }

    #[tokio::test]
    async fn run_create_device() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_create_device()
            .times(1)
            .withf(|r| {
                r.parent == "projects/p/locations/us-central1/registries/reg"
                    && r.device.as_ref().is_some_and(|d| d.id == "d1")
            })
            .return_once(|_| Ok(model::Device::new().set_id("d1")));
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "-d", "d1", "create"])?;
        iot_samples::run(&client, &args).await?;
        Ok(())
    }

    #[tokio::test]
    async fn run_create_without_device() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_create_device().never();
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "create"])?;
        let got = iot_samples::run(&client, &args).await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn run_forwards_errors() -> anyhow::Result<()> {
        let mut mock = MockDeviceManager::new();
        mock.expect_delete_device_registry()
            .times(1)
            .return_once(|_| Err(iot::Error::other(Sentinel(7))));
        let client = DeviceManager::from_stub(mock);

        let args = Args::try_parse_from(["program", "-p", "p", "-g", "reg", "delete"])?;
        let err = iot_samples::run(&client, &args).await.unwrap_err();
        let inner = err.downcast_ref::<iot::Error>();
        assert_eq!(
            inner.and_then(|e| e.as_inner::<Sentinel>()),
            Some(&Sentinel(7))
        );
        Ok(())
    }
}
