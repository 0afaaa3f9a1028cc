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
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// CPU architecture of the machine running the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    #[serde(rename = "x86_64")]
    X86_64,
    Aarch64,
}

impl FromStr for Architecture {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "x86" | "i386" | "i686" | "x32" => Ok(Architecture::X86),
            "x86_64" | "x64" | "amd64" => Ok(Architecture::X86_64),
            "aarch64" | "arm64" => Ok(Architecture::Aarch64),
            _ => Err(ResolverError::InvalidRequest(format!(
                "Unknown architecture: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arch = match self {
            Architecture::X86 => "x86",
            Architecture::X86_64 => "x86_64",
            Architecture::Aarch64 => "aarch64",
        };
        write!(f, "{arch}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Linux,
    Unix,
    Windows,
    MacOS,
    Solaris,
    FreeBsd,
}

impl OperatingSystem {
    /// Value of the catalog's `operating_system` parameter.
    ///
    /// The catalog has no Unix or FreeBSD builds, so both are approximated as linux.
    pub fn api_value(&self) -> &'static str {
        match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Unix => "linux",
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOS => "macos",
            OperatingSystem::Solaris => "solaris",
            OperatingSystem::FreeBsd => "linux",
        }
    }
}

impl FromStr for OperatingSystem {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(OperatingSystem::Linux),
            "unix" => Ok(OperatingSystem::Unix),
            "windows" | "win" => Ok(OperatingSystem::Windows),
            "macos" | "mac" | "mac_os" | "darwin" | "osx" => Ok(OperatingSystem::MacOS),
            "solaris" => Ok(OperatingSystem::Solaris),
            "freebsd" | "free_bsd" => Ok(OperatingSystem::FreeBsd),
            _ => Err(ResolverError::InvalidRequest(format!(
                "Unknown operating system: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let os = match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Unix => "unix",
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOS => "macos",
            OperatingSystem::Solaris => "solaris",
            OperatingSystem::FreeBsd => "freebsd",
        };
        write!(f, "{os}")
    }
}

/// Operating system and architecture of the build machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub operating_system: OperatingSystem,
    pub architecture: Architecture,
}

impl Platform {
    pub fn new(operating_system: OperatingSystem, architecture: Architecture) -> Self {
        Self {
            operating_system,
            architecture,
        }
    }

    /// Apple Silicon can run x86_64 JDKs through Rosetta
    pub fn supports_x86_64_emulation(&self) -> bool {
        self.operating_system == OperatingSystem::MacOS
            && self.architecture == Architecture::Aarch64
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.operating_system, self.architecture)
    }
}
