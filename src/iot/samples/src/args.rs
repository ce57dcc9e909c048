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

//! Command-line arguments for the `delete-registry` and `cb-iot` programs.

use anyhow::bail;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Deletes a single device registry.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct DeleteRegistryArgs {
    /// The project that owns the registry.
    pub project: String,

    /// The region hosting the registry, for example `us-central1`.
    pub region: String,

    /// The registry id.
    pub registry: String,

    /// Override the service endpoint.
    ///
    /// By default the `url` in the service account key is used.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// The service account key file.
    ///
    /// By default the file named by `CLEARBLADE_CONFIGURATION` is used.
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Log each request and its result to stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// The operations supported by `cb-iot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// List the registries in the region.
    List,
    /// Get a registry, or a device if `--device` is set.
    Get,
    /// Delete a registry, or a device if `--device` is set.
    Delete,
    /// Create the device named by `--device`.
    Create,
    /// List the devices in a registry.
    DeviceList,
}

/// Manage ClearBlade IoT Core registries and devices.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The project id.
    #[arg(short, long)]
    pub project: String,

    /// The region hosting the registries.
    #[arg(short, long, default_value = "us-central1")]
    pub region: String,

    /// The registry id.
    #[arg(short = 'g', long)]
    pub registry: Option<String>,

    /// The device id.
    #[arg(short, long)]
    pub device: Option<String>,

    /// The service account key file.
    ///
    /// By default the file named by `CLEARBLADE_CONFIGURATION` is used.
    #[arg(short, long)]
    pub credentials: Option<PathBuf>,

    /// Log each request and its result to stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// The operation to run.
    #[arg(value_enum)]
    pub operation: Operation,
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.project.is_empty() {
            bail!("the project must be non-empty")
        }
        if self.region.is_empty() {
            bail!("the region must be non-empty")
        }
        match self.operation {
            Operation::List => {}
            Operation::DeviceList if self.device.is_some() => {
                bail!("device-list does not accept --device")
            }
            Operation::Create if self.device.is_none() => {
                bail!("the Create operation requires --device")
            }
            Operation::DeviceList | Operation::Get | Operation::Delete | Operation::Create => {
                if self.registry.as_deref().is_none_or(str::is_empty) {
                    bail!("the {:?} operation requires --registry", self.operation)
                }
            }
        }
        if self.device.as_deref() == Some("") {
            bail!("the device must be non-empty when set")
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn delete_registry_args() -> anyhow::Result<()> {
        let args = DeleteRegistryArgs::try_parse_from([
            "program",
            "PROJECT-NAME",
            "us-central1",
            "REGISTRY-NAME",
        ])?;
        assert_eq!(args.project, "PROJECT-NAME");
        assert_eq!(args.region, "us-central1");
        assert_eq!(args.registry, "REGISTRY-NAME");
        assert!(args.endpoint.is_none(), "{args:?}");
        assert!(args.credentials.is_none(), "{args:?}");
        Ok(())
    }

    #[test]
    fn delete_registry_args_missing() {
        let got = DeleteRegistryArgs::try_parse_from(["program", "PROJECT-NAME", "us-central1"]);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["program", "--project=p", "list"])?;
        assert_eq!(args.region, "us-central1");
        assert_eq!(args.operation, Operation::List);
        assert!(!args.verbose);
        args.validate()?;
        Ok(())
    }

    #[test_case(&["program", "--project=p", "list"], Operation::List)]
    #[test_case(&["program", "-p", "p", "-g", "r", "get"], Operation::Get)]
    #[test_case(&["program", "-p", "p", "-g", "r", "-d", "d", "get"], Operation::Get)]
    #[test_case(&["program", "-p", "p", "-g", "r", "delete"], Operation::Delete)]
    #[test_case(&["program", "-p", "p", "-g", "r", "-d", "d", "delete"], Operation::Delete)]
    #[test_case(&["program", "-p", "p", "-g", "r", "device-list"], Operation::DeviceList)]
    #[test_case(&["program", "-p", "p", "-g", "r", "-d", "d", "create"], Operation::Create)]
    fn validate_success(input: &[&str], want: Operation) -> anyhow::Result<()> {
        let args = Args::try_parse_from(input)?;
        assert_eq!(args.operation, want);
        let got = args.validate();
        assert!(got.is_ok(), "{got:?} {args:?}");
        Ok(())
    }

    #[test_case(&["program", "--project=", "list"])]
    #[test_case(&["program", "--project=p", "--region=", "list"])]
    #[test_case(&["program", "--project=p", "get"])]
    #[test_case(&["program", "--project=p", "delete"])]
    #[test_case(&["program", "--project=p", "--registry=", "delete"])]
    #[test_case(&["program", "--project=p", "device-list"])]
    #[test_case(&["program", "--project=p", "--registry=r", "--device=d", "device-list"])]
    #[test_case(&["program", "--project=p", "--registry=r", "--device=", "get"])]
    #[test_case(&["program", "--project=p", "--registry=r", "create"])]
    #[test_case(&["program", "--project=p", "--device=d", "create"])]
    fn validate(input: &[&str]) -> anyhow::Result<()> {
        let args = Args::try_parse_from(input)?;
        let got = args.validate();
        assert!(got.is_err(), "{got:?} {args:?}");
        Ok(())
    }

    #[test_case(&["program", "list"]; "missing project")]
    #[test_case(&["program", "--project=p"]; "missing operation")]
    #[test_case(&["program", "--project=p", "update"]; "unknown operation")]
    fn parse_errors(input: &[&str]) {
        let got = Args::try_parse_from(input);
        assert!(got.is_err(), "{got:?}");
    }
}
