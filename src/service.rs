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

use crate::api::client::CatalogApi;
use crate::api::models::{Distribution, Package, parse_distributions, parse_packages};
use crate::api::query::{DistributionQuery, PackageQuery};
use crate::error::Result;
use crate::matcher::{match_distributions, match_package};
use crate::models::platform::{Architecture, OperatingSystem};
use crate::models::request::{JavaVersion, ToolchainRequest};
use log::{debug, info, trace};
use std::sync::{Arc, RwLock};
use url::Url;

/// In-memory copy of the catalog's distribution list.
///
/// Only ever holds a completely parsed list. Entries never expire; use
/// [`DistributionCache::invalidate`] to force a refetch.
#[derive(Debug, Default)]
pub struct DistributionCache {
    distributions: RwLock<Option<Arc<Vec<Distribution>>>>,
}

impl DistributionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<Vec<Distribution>>> {
        self.distributions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the cached list; concurrent stores of equal lists are harmless
    pub fn store(&self, distributions: Vec<Distribution>) -> Arc<Vec<Distribution>> {
        let distributions = Arc::new(distributions);
        *self
            .distributions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::clone(&distributions));
        distributions
    }

    pub fn invalidate(&self) {
        *self
            .distributions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    pub fn is_populated(&self) -> bool {
        self.get().is_some()
    }
}

/// Resolves toolchain requests against the catalog
pub struct FoojayService<A: CatalogApi> {
    api: A,
    cache: DistributionCache,
}

impl<A: CatalogApi> FoojayService<A> {
    pub fn new(api: A) -> Self {
        Self::with_cache(api, DistributionCache::new())
    }

    pub fn with_cache(api: A, cache: DistributionCache) -> Self {
        Self { api, cache }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cache(&self) -> &DistributionCache {
        &self.cache
    }

    /// Cached distribution list, fetched on first use
    pub fn distributions(&self) -> Result<Arc<Vec<Distribution>>> {
        if let Some(distributions) = self.cache.get() {
            trace!("Using {} cached distributions", distributions.len());
            return Ok(distributions);
        }
        self.refresh_distributions()
    }

    /// Fetch the distribution list again, replacing the cached one on success
    pub fn refresh_distributions(&self) -> Result<Arc<Vec<Distribution>>> {
        let params = DistributionQuery::new()
            .include_versions(true)
            .include_synonyms(true)
            .to_params();
        let body = self.api.fetch_distributions(&params)?;
        let distributions = parse_distributions(&body)?;
        info!("Fetched {} distributions from catalog", distributions.len());
        Ok(self.cache.store(distributions))
    }

    pub fn invalidate_cache(&self) {
        debug!("Invalidating distribution cache");
        self.cache.invalidate();
    }

    /// Candidate distributions for the request, in lookup order
    pub fn find_matching_distributions(
        &self,
        request: &ToolchainRequest,
    ) -> Result<Vec<Distribution>> {
        let distributions = self.distributions()?;
        Ok(self
            .match_request(&distributions, request)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Query the packages of one distribution and pick the best for `architecture`
    pub fn find_matching_package(
        &self,
        api_parameter: &str,
        version: JavaVersion,
        operating_system: OperatingSystem,
        architecture: Architecture,
    ) -> Result<Option<Package>> {
        let params = PackageQuery::new()
            .version(version.to_string())
            .distribution(api_parameter)
            .operating_system(operating_system.api_value())
            .latest("available")
            .directly_downloadable(true)
            .to_params();
        trace!("Package query parameters: {params:?}");

        let body = self.api.fetch_packages(&params)?;
        let packages = parse_packages(&body)?;
        Ok(match_package(&packages, architecture).cloned())
    }

    /// Download link of the first package satisfying the request.
    ///
    /// Distributions are tried in matcher order and the first one offering a
    /// usable package wins. On Apple Silicon the whole lookup is repeated once
    /// for x86_64 when no native package exists.
    pub fn find_matching_download_uri(&self, request: &ToolchainRequest) -> Result<Option<Url>> {
        let distributions = self.distributions()?;
        let candidates = self.match_request(&distributions, request);
        if candidates.is_empty() {
            debug!(
                "No distribution matches vendor {} ({})",
                request.vendor, request.implementation
            );
            return Ok(None);
        }

        if let Some(uri) = self.first_download_uri(&candidates, request, request.architecture())? {
            return Ok(Some(uri));
        }

        if request.platform.supports_x86_64_emulation() {
            debug!("No native {} package found, trying x86_64", request.platform);
            return self.first_download_uri(&candidates, request, Architecture::X86_64);
        }

        Ok(None)
    }

    fn match_request<'a>(
        &self,
        distributions: &'a [Distribution],
        request: &ToolchainRequest,
    ) -> Vec<&'a Distribution> {
        let candidates = match_distributions(
            distributions,
            &request.vendor,
            request.implementation,
            request.version,
            request.native_image_capable,
        );
        debug!(
            "Candidate distributions: {:?}",
            candidates.iter().map(|d| d.name.as_str()).collect::<Vec<_>>()
        );
        candidates
    }

    fn first_download_uri(
        &self,
        candidates: &[&Distribution],
        request: &ToolchainRequest,
        architecture: Architecture,
    ) -> Result<Option<Url>> {
        for distribution in candidates {
            let package = self.find_matching_package(
                &distribution.api_parameter,
                request.version,
                request.operating_system(),
                architecture,
            )?;
            if let Some(package) = package {
                debug!(
                    "Resolved Java {} from {} for {}",
                    request.version, distribution.name, request.platform
                );
                return Ok(Some(package.links.pkg_download_redirect));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
