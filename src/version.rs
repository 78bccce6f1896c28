// Copyright (c) The quick-allure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution of the Go version recorded in suite properties.

use std::process::Command;

/// A source for the Go version stamped into each suite's `go.version`
/// property.
///
/// The serializer consults the provider only when no non-empty override is
/// configured on the options, so embedders and tests can substitute a fixed
/// value for the ambient toolchain.
pub trait VersionProvider {
    /// Returns the Go version string, e.g. `go1.21.5`.
    fn go_version(&self) -> String;
}

/// The default provider: asks the `go` binary on the search path.
#[derive(Copy, Clone, Debug, Default)]
pub struct GoToolchain;

impl VersionProvider for GoToolchain {
    fn go_version(&self) -> String {
        match Command::new("go").args(["env", "GOVERSION"]).output() {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout).trim().to_owned();
                if !version.is_empty() {
                    return version;
                }
                log::warn!("`go env GOVERSION` produced no output");
            }
            Ok(output) => {
                log::warn!("`go env GOVERSION` exited with {}", output.status);
            }
            Err(error) => {
                log::warn!("failed to run `go env GOVERSION`: {error}");
            }
        }
        "unknown".to_owned()
    }
}
