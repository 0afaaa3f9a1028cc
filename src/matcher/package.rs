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

//! Picking the one package of a catalog query the host can install.

use crate::api::models::Package;
use crate::models::platform::{Architecture, OperatingSystem};
use log::{debug, trace};

pub const ARCHITECTURES_32_BIT: &[&str] = &["x32", "i386", "x86"];
pub const ARCHITECTURES_64_BIT: &[&str] = &["x64", "x86_64", "amd64", "ia64"];
pub const ARCHITECTURES_ARM_64_BIT: &[&str] = &["aarch64", "arm64"];

/// Archive formats the host knows how to unpack
pub const HANDLED_ARCHIVE_TYPES: &[&str] = &["tar", "tar.gz", "tgz", "zip"];

/// Select the best package for `architecture`.
///
/// Packages are ranked by package type, then libc type, both ascending, so a
/// glibc JDK beats a musl JDK which beats any JRE. Equal packages keep their
/// catalog order.
pub fn match_package(packages: &[Package], architecture: Architecture) -> Option<&Package> {
    let selected = packages
        .iter()
        .filter(|p| is_architecture_compatible(p, architecture))
        .filter(|p| has_handled_archive_type(p))
        .min_by(|a, b| {
            (a.package_type.as_str(), a.lib_c_type.as_str())
                .cmp(&(b.package_type.as_str(), b.lib_c_type.as_str()))
        });

    match selected {
        Some(package) => {
            debug!(
                "Selected {} {} package ({}, {}) for {architecture}",
                package.distribution, package.distribution_version, package.package_type,
                package.archive_type
            );
            trace!("Download link: {}", package.links.pkg_download_redirect);
        }
        None => debug!(
            "None of {} package(s) is usable on {architecture}",
            packages.len()
        ),
    }
    selected
}

pub fn is_architecture_compatible(package: &Package, architecture: Architecture) -> bool {
    let arch = package.architecture.as_str();
    match architecture {
        Architecture::X86 => ARCHITECTURES_32_BIT.contains(&arch),
        Architecture::X86_64 => ARCHITECTURES_64_BIT.contains(&arch),
        // Apple Silicon runs x86_64 builds through Rosetta
        Architecture::Aarch64 => {
            ARCHITECTURES_ARM_64_BIT.contains(&arch)
                || (package.operating_system == OperatingSystem::MacOS.api_value()
                    && ARCHITECTURES_64_BIT.contains(&arch))
        }
    }
}

pub fn has_handled_archive_type(package: &Package) -> bool {
    HANDLED_ARCHIVE_TYPES.contains(&package.archive_type.as_str())
}
