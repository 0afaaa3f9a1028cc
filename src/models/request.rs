// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{ResolverError, Result};
use crate::models::platform::{Architecture, OperatingSystem, Platform};
use crate::models::vendor::VendorSpec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Major Java language version, e.g. 8, 11, 17, 21
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct JavaVersion(u32);

impl JavaVersion {
    pub fn new(major: u32) -> Result<Self> {
        if major == 0 {
            return Err(ResolverError::InvalidRequest(
                "Java language version must be a positive integer".to_string(),
            ));
        }
        Ok(Self(major))
    }

    pub fn major(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for JavaVersion {
    type Error = ResolverError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<JavaVersion> for u32 {
    fn from(version: JavaVersion) -> Self {
        version.0
    }
}

impl FromStr for JavaVersion {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // Legacy "1.8" style maps to 8
        let major = trimmed.strip_prefix("1.").unwrap_or(trimmed);
        let value = major.parse::<u32>().map_err(|_| {
            ResolverError::InvalidRequest(format!("Invalid Java language version: {s}"))
        })?;
        Self::new(value)
    }
}

impl std::fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// JVM execution engine requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JvmImplementation {
    /// Whatever engine the vendor ships by default
    #[default]
    VendorSpecific,
    /// The OpenJ9 engine
    AlternateRuntime,
}

impl FromStr for JvmImplementation {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "vendor_specific" | "" => Ok(JvmImplementation::VendorSpecific),
            "alternate_runtime" | "j9" | "openj9" => Ok(JvmImplementation::AlternateRuntime),
            _ => Err(ResolverError::InvalidRequest(format!(
                "Unknown JVM implementation: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for JvmImplementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let implementation = match self {
            JvmImplementation::VendorSpecific => "vendor_specific",
            JvmImplementation::AlternateRuntime => "j9",
        };
        write!(f, "{implementation}")
    }
}

/// Everything a host knows about the toolchain it wants provisioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainRequest {
    pub version: JavaVersion,
    pub vendor: VendorSpec,
    pub implementation: JvmImplementation,
    /// Decided by the host; older hosts that cannot express it pass false
    pub native_image_capable: bool,
    pub platform: Platform,
}

impl ToolchainRequest {
    pub fn new(version: JavaVersion, platform: Platform) -> Self {
        Self {
            version,
            vendor: VendorSpec::Any,
            implementation: JvmImplementation::VendorSpecific,
            native_image_capable: false,
            platform,
        }
    }

    pub fn vendor(mut self, vendor: VendorSpec) -> Self {
        self.vendor = vendor;
        self
    }

    pub fn implementation(mut self, implementation: JvmImplementation) -> Self {
        self.implementation = implementation;
        self
    }

    pub fn native_image_capable(mut self, native_image_capable: bool) -> Self {
        self.native_image_capable = native_image_capable;
        self
    }

    pub fn operating_system(&self) -> OperatingSystem {
        self.platform.operating_system
    }

    pub fn architecture(&self) -> Architecture {
        self.platform.architecture
    }
}
