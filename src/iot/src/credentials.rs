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

//! The device manager API authenticates requests using a service account
//! key file. The key file is a JSON object like:
//!
//! ```json
//! {
//!   "systemKey": "aabbccdd00112233",
//!   "token": "secret-token",
//!   "url": "https://iot-sandbox.clearblade.com",
//!   "project": "my-project"
//! }
//! ```
//!
//! By default the clients find this file using the
//! [CLEARBLADE_CONFIGURATION] environment variable.

use std::path::{Path, PathBuf};

/// The environment variable naming the default service account key file.
pub const CLEARBLADE_CONFIGURATION: &str = "CLEARBLADE_CONFIGURATION";

/// Represents an error creating or loading [Credentials].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("the CLEARBLADE_CONFIGURATION environment variable is not set")]
    MissingConfiguration,
    #[error("cannot read the service account key file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse the service account key file {path:?}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("the service account key is missing the `{0}` field")]
    MissingField(&'static str),
}

/// The service account credentials used to authenticate requests.
#[derive(Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    system_key: String,
    token: String,
    url: String,
    #[serde(default)]
    project: String,
}

impl Credentials {
    /// Creates credentials from their components.
    ///
    /// ```
    /// # use cloud_iot_v1::credentials::Credentials;
    /// let credentials = Credentials::new("system-key", "token", "https://iot.example.com/");
    /// assert_eq!(credentials.url(), "https://iot.example.com");
    /// ```
    pub fn new<S, T, U>(system_key: S, token: T, url: U) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            system_key: system_key.into(),
            token: token.into(),
            url: url.into(),
            project: String::new(),
        }
    }

    /// Sets the project associated with these credentials.
    pub fn with_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    /// The system key of the service account.
    pub fn system_key(&self) -> &str {
        &self.system_key
    }

    /// The token sent in the `ClearBlade-UserToken` header.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The service URL, without any trailing `/`.
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// The project in the key file, empty if not present.
    pub fn project(&self) -> &str {
        &self.project
    }

    fn validate(self) -> Result<Self, CredentialsError> {
        if self.system_key.is_empty() {
            return Err(CredentialsError::MissingField("systemKey"));
        }
        if self.token.is_empty() {
            return Err(CredentialsError::MissingField("token"));
        }
        if self.url.is_empty() {
            return Err(CredentialsError::MissingField("url"));
        }
        Ok(self)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("system_key", &self.system_key)
            .field("token", &"[censored]")
            .field("url", &self.url)
            .field("project", &self.project)
            .finish()
    }
}

/// Loads [Credentials] from a service account key file.
///
/// ```no_run
/// # use cloud_iot_v1::credentials::Builder;
/// # fn sample() -> anyhow::Result<()> {
/// let credentials = Builder::default()
///     .with_path("/var/secrets/clearblade.json")
///     .build()?;
/// println!("using system key {}", credentials.system_key());
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder {
    path: Option<PathBuf>,
}

impl Builder {
    /// Loads the key from `path` instead of the [CLEARBLADE_CONFIGURATION]
    /// environment variable.
    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Reads and parses the service account key file.
    pub fn build(self) -> Result<Credentials, CredentialsError> {
        let path = match self.path {
            Some(p) => p,
            None => std::env::var_os(CLEARBLADE_CONFIGURATION)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .ok_or(CredentialsError::MissingConfiguration)?,
        };
        from_file(&path)
    }
}

fn from_file(path: &Path) -> Result<Credentials, CredentialsError> {
    let contents = std::fs::read(path).map_err(|source| CredentialsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let credentials = serde_json::from_slice::<Credentials>(&contents).map_err(|source| {
        CredentialsError::Serde {
            path: path.to_path_buf(),
            source,
        }
    })?;
    credentials.validate()
}
