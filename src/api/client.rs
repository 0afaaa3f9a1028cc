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

use crate::config::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, ResolverConfig};
use crate::error::{ResolverError, Result};
use crate::user_agent;
use attohttpc::Session;
use log::{debug, trace};
use std::time::Duration;
use url::Url;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(20);
const DISTRIBUTIONS_ENDPOINT: &str = "distributions";
const PACKAGES_ENDPOINT: &str = "packages";

/// The two catalog endpoints the resolver depends on.
///
/// Implementations return the raw response body; parsing happens in
/// [`crate::api::models`]. No retries are performed.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogApi {
    fn fetch_distributions(&self, params: &[(String, String)]) -> Result<String>;
    fn fetch_packages(&self, params: &[(String, String)]) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct FoojayClient {
    pub(crate) session: Session,
    pub(crate) base_url: String,
    pub(crate) api_version: String,
}

impl FoojayClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::catalog_client());
        session.header("Content-Type", "application/json");
        session.connect_timeout(DEFAULT_CONNECT_TIMEOUT);
        session.read_timeout(DEFAULT_READ_TIMEOUT);
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new()
            .with_base_url(config.base_url.clone())
            .with_api_version(config.api_version.clone())
            .with_timeouts(config.connect_timeout(), config.read_timeout())
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_version(mut self, api_version: String) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.session.connect_timeout(connect);
        self.session.read_timeout(read);
        self
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str, params: &[(String, String)]) -> Result<Url> {
        let endpoint = format!("{}/{}/{endpoint}", self.base_url, self.api_version);
        Url::parse_with_params(&endpoint, params).map_err(|e| {
            ResolverError::InvalidConfig(format!("Invalid catalog URL '{endpoint}': {e}"))
        })
    }

    fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<String> {
        let url = self.endpoint_url(endpoint, params)?;
        debug!("API Request: {url}");

        // The connection is released when the response is dropped, on every path
        let response = self.session.get(url.as_str()).send().map_err(|e| {
            ResolverError::CatalogUnavailable(format!(
                "Network error connecting to foojay.io API {}: {e}",
                self.api_version
            ))
        })?;

        if !response.is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            debug!("API request to {endpoint} failed with HTTP {status}");
            trace!("Error body: {body}");
            return Err(ResolverError::CatalogStatus { status, body });
        }

        let body = response.text().map_err(|e| {
            ResolverError::CatalogUnavailable(format!("Failed to read response body: {e}"))
        })?;
        trace!("Received {} bytes from {endpoint}", body.len());
        Ok(body)
    }
}

impl CatalogApi for FoojayClient {
    fn fetch_distributions(&self, params: &[(String, String)]) -> Result<String> {
        self.get(DISTRIBUTIONS_ENDPOINT, params)
    }

    fn fetch_packages(&self, params: &[(String, String)]) -> Result<String> {
        self.get(PACKAGES_ENDPOINT, params)
    }
}

impl Default for FoojayClient {
    fn default() -> Self {
        Self::new()
    }
}
