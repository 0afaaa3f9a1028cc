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

//! Detection of the platform the build is running on.
//!
//! Hosts that carry their own platform model pass it in the
//! [`ToolchainRequest`](crate::models::request::ToolchainRequest) directly;
//! this module is for hosts that don't.

use crate::error::{ResolverError, Result};
use crate::models::platform::{Architecture, OperatingSystem, Platform};
use std::sync::OnceLock;

static CACHED_PLATFORM: OnceLock<Option<Platform>> = OnceLock::new();

/// Get the current platform, detected once per process.
///
/// # Example
///
/// ```
/// use foojay_resolver::platform::current_platform;
///
/// if let Ok(platform) = current_platform() {
///     println!("Resolving toolchains for {platform}");
/// }
/// ```
pub fn current_platform() -> Result<Platform> {
    let detected =
        *CACHED_PLATFORM.get_or_init(|| detect(std::env::consts::OS, std::env::consts::ARCH).ok());
    detected.ok_or_else(|| {
        ResolverError::InvalidRequest(format!(
            "Unsupported platform: {}/{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ))
    })
}

/// Map Rust target names (`std::env::consts::{OS, ARCH}`) to a platform
pub fn detect(os: &str, arch: &str) -> Result<Platform> {
    Ok(Platform::new(operating_system(os)?, architecture(arch)?))
}

fn operating_system(os: &str) -> Result<OperatingSystem> {
    match os {
        "linux" | "android" => Ok(OperatingSystem::Linux),
        "macos" => Ok(OperatingSystem::MacOS),
        "windows" => Ok(OperatingSystem::Windows),
        "solaris" | "illumos" => Ok(OperatingSystem::Solaris),
        "freebsd" => Ok(OperatingSystem::FreeBsd),
        "openbsd" | "netbsd" | "dragonfly" => Ok(OperatingSystem::Unix),
        _ => Err(ResolverError::InvalidRequest(format!(
            "Unsupported operating system: {os}"
        ))),
    }
}

fn architecture(arch: &str) -> Result<Architecture> {
    match arch {
        "x86_64" => Ok(Architecture::X86_64),
        "x86" => Ok(Architecture::X86),
        "aarch64" => Ok(Architecture::Aarch64),
        _ => Err(ResolverError::InvalidRequest(format!(
            "Unsupported architecture: {arch}"
        ))),
    }
}
