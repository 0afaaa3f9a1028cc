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

use crate::api::client::{CatalogApi, FoojayClient};
use crate::config::ResolverConfig;
use crate::error::{Result, format_error_chain};
use crate::models::request::ToolchainRequest;
use crate::service::FoojayService;
use log::{debug, warn};
use url::Url;

/// Entry point for build tools provisioning Java toolchains
pub trait ToolchainResolver {
    /// Download link for the requested toolchain, `None` when nothing matches
    fn resolve(&self, request: &ToolchainRequest) -> Result<Option<Url>>;
}

/// Resolves toolchains from the foojay.io catalog.
///
/// Logs a single warning when a request fails or finds nothing. Failures
/// are still returned to the caller.
pub struct FoojayToolchainResolver<A: CatalogApi = FoojayClient> {
    service: FoojayService<A>,
}

impl FoojayToolchainResolver<FoojayClient> {
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(FoojayService::new(FoojayClient::from_config(config))))
    }
}

impl<A: CatalogApi> FoojayToolchainResolver<A> {
    pub fn new(service: FoojayService<A>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &FoojayService<A> {
        &self.service
    }
}

impl Default for FoojayToolchainResolver<FoojayClient> {
    fn default() -> Self {
        Self::new(FoojayService::new(FoojayClient::new()))
    }
}

impl<A: CatalogApi> ToolchainResolver for FoojayToolchainResolver<A> {
    fn resolve(&self, request: &ToolchainRequest) -> Result<Option<Url>> {
        debug!(
            "Resolving Java {} (vendor: {}, implementation: {}, native image: {}) for {}",
            request.version,
            request.vendor,
            request.implementation,
            request.native_image_capable,
            request.platform
        );

        match self.service.find_matching_download_uri(request) {
            Ok(Some(uri)) => {
                debug!("Resolved toolchain download: {uri}");
                Ok(Some(uri))
            }
            Ok(None) => {
                warn!(
                    "No matching Java toolchain found for Java {} (vendor: {}, implementation: {}) on {}",
                    request.version, request.vendor, request.implementation, request.platform
                );
                Ok(None)
            }
            Err(e) => {
                warn!(
                    "Failed to resolve Java toolchain for Java {}:\n{}",
                    request.version,
                    format_error_chain(&e)
                );
                Err(e)
            }
        }
    }
}
