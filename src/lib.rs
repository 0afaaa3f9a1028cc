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

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod platform;
pub mod resolver;
pub mod service;
#[cfg(test)]
pub mod test;
pub mod user_agent;

pub use api::{CatalogApi, Distribution, FoojayClient, Package};
pub use config::ResolverConfig;
pub use error::{ResolverError, Result};
pub use models::{
    Architecture, JavaVersion, JvmImplementation, KnownVendor, OperatingSystem, Platform,
    ToolchainRequest, VendorSpec,
};
pub use resolver::{FoojayToolchainResolver, ToolchainResolver};
pub use service::{DistributionCache, FoojayService};
