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

//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. Applications obtain a builder using
//! [DeviceManager::builder()][crate::client::DeviceManager::builder].
//!
//! ## Example: create a client with the default configuration.
//!
//! ```no_run
//! # use cloud_iot_v1::client::DeviceManager;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = DeviceManager::builder().build().await?;
//! # Ok(()) }
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```no_run
//! # use cloud_iot_v1::client::DeviceManager;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = DeviceManager::builder()
//!     .with_endpoint("https://iot-sandbox.clearblade.com")
//!     .build()
//!     .await?;
//! # Ok(()) }
//! ```

use crate::client::DeviceManager;
use crate::credentials::{Builder as CredentialsBuilder, Credentials};
use std::path::PathBuf;
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use cloud_iot_v1::client::DeviceManager;
/// use cloud_iot_v1::ClientBuilderError;
/// # async fn sample() -> Result<(), ClientBuilderError> {
/// let client = match DeviceManager::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("cannot load the service account key: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok(()) }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    pub(crate) fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    pub(crate) fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The configuration collected by a [ClientBuilder].
#[derive(Clone, Debug, Default)]
pub(crate) struct ClientConfig {
    pub endpoint: Option<String>,
    pub credentials: Option<Credentials>,
    pub credentials_file: Option<PathBuf>,
    pub tracing: bool,
}

impl ClientConfig {
    /// Explicit credentials win over an explicit file, which wins over the
    /// environment.
    pub(crate) fn resolve_credentials(&self) -> Result<Credentials> {
        if let Some(c) = &self.credentials {
            return Ok(c.clone());
        }
        let builder = self
            .credentials_file
            .iter()
            .fold(CredentialsBuilder::default(), |b, p| b.with_path(p));
        builder.build().map_err(Error::cred)
    }
}

/// A builder for [DeviceManager].
///
/// ```no_run
/// # use cloud_iot_v1::client::DeviceManager;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = DeviceManager::builder()
///     .with_credentials_file("/var/secrets/clearblade.json")
///     .with_tracing()
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a new client.
    ///
    /// Fails if the credentials cannot be loaded or the HTTP client cannot be
    /// initialized. No requests are sent to the service.
    pub async fn build(self) -> Result<DeviceManager> {
        let credentials = self.config.resolve_credentials()?;
        let transport = crate::transport::DeviceManager::new(&self.config, credentials)?;
        tracing::debug!(
            endpoint = transport.endpoint(),
            tracing = self.config.tracing,
            "created DeviceManager client"
        );
        if self.config.tracing {
            let stub = crate::tracing::DeviceManager::new(transport);
            return Ok(DeviceManager::from_stub_arc(Arc::new(stub)));
        }
        Ok(DeviceManager::from_stub_arc(Arc::new(transport)))
    }

    /// Sets the endpoint.
    ///
    /// By default the client uses the `url` field in the service account key.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client library can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// By default the client loads the service account key named by the
    /// `CLEARBLADE_CONFIGURATION` environment variable.
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.credentials = Some(v.into());
        self
    }

    /// Load the service account key from `path`.
    pub fn with_credentials_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.credentials_file = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::CLEARBLADE_CONFIGURATION;
    use scoped_env::ScopedEnv;
    use serial_test::{parallel, serial};
    use std::io::Write;

    #[tokio::test]
    #[serial]
    async fn missing_default_credentials() {
        let _e = ScopedEnv::remove(CLEARBLADE_CONFIGURATION);
        let got = ClientBuilder::new().build().await;
        let err = got.expect_err("build should fail without credentials");
        assert!(err.is_default_credentials(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");
    }

    #[tokio::test]
    #[parallel]
    async fn bad_credentials_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let got = ClientBuilder::new()
            .with_credentials_file(dir.path().join("missing.json"))
            .build()
            .await;
        let err = got.expect_err("build should fail with a missing file");
        assert!(err.is_default_credentials(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[parallel]
    async fn explicit_credentials() -> anyhow::Result<()> {
        let _client = ClientBuilder::new()
            .with_credentials(Credentials::new("key", "token", "https://iot.example.com"))
            .with_tracing()
            .build()
            .await?;
        Ok(())
    }

    #[test]
    #[parallel]
    fn explicit_credentials_win() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(br#"{"systemKey": "from-file", "token": "t", "url": "https://x"}"#)?;
        let config = ClientConfig {
            credentials: Some(Credentials::new("explicit", "t", "https://y")),
            credentials_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.resolve_credentials()?.system_key(), "explicit");

        let config = ClientConfig {
            credentials_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.resolve_credentials()?.system_key(), "from-file");
        Ok(())
    }
}
