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

/// Ordered query string parameters
pub type QueryParams = Vec<(String, String)>;

/// Distributions whose api_parameter starts with this prefix are queried by `version`,
/// every other distribution by `jdk_version`.
const VERSION_KEY_PREFIX: &str = "graalvm_community";

#[derive(Debug, Clone, Default)]
pub struct DistributionQuery {
    pub include_versions: Option<bool>,
    pub include_synonyms: Option<bool>,
}

impl DistributionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_versions(mut self, include_versions: bool) -> Self {
        self.include_versions = Some(include_versions);
        self
    }

    pub fn include_synonyms(mut self, include_synonyms: bool) -> Self {
        self.include_synonyms = Some(include_synonyms);
        self
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(include_versions) = self.include_versions {
            params.push(("include_versions".to_string(), include_versions.to_string()));
        }
        if let Some(include_synonyms) = self.include_synonyms {
            params.push(("include_synonyms".to_string(), include_synonyms.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageQuery {
    pub version: Option<String>,
    pub distribution: Option<String>,
    pub operating_system: Option<String>,
    pub latest: Option<String>,
    pub directly_downloadable: Option<bool>,
}

impl PackageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn distribution(mut self, distribution: impl Into<String>) -> Self {
        self.distribution = Some(distribution.into());
        self
    }

    pub fn operating_system(mut self, operating_system: impl Into<String>) -> Self {
        self.operating_system = Some(operating_system.into());
        self
    }

    pub fn latest(mut self, latest: impl Into<String>) -> Self {
        self.latest = Some(latest.into());
        self
    }

    pub fn directly_downloadable(mut self, directly_downloadable: bool) -> Self {
        self.directly_downloadable = Some(directly_downloadable);
        self
    }

    /// Name of the version parameter the catalog expects for this query's distribution
    pub fn version_key(&self) -> &'static str {
        match self.distribution {
            Some(ref distribution) if distribution.starts_with(VERSION_KEY_PREFIX) => "version",
            _ => "jdk_version",
        }
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(ref version) = self.version {
            params.push((self.version_key().to_string(), version.clone()));
        }
        if let Some(ref distribution) = self.distribution {
            params.push(("distro".to_string(), distribution.clone()));
        }
        if let Some(ref operating_system) = self.operating_system {
            params.push(("operating_system".to_string(), operating_system.clone()));
        }
        if let Some(ref latest) = self.latest {
            params.push(("latest".to_string(), latest.clone()));
        }
        if let Some(directly_downloadable) = self.directly_downloadable {
            params.push((
                "directly_downloadable".to_string(),
                directly_downloadable.to_string(),
            ));
        }
        params
    }
}
