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
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// A distribution entry of the `distributions` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Display name, e.g. "Temurin", "Oracle OpenJDK", "GraalVM CE 17"
    pub name: String,
    /// Path-safe identifier used as `distro` when querying packages
    pub api_parameter: String,
    pub maintained: bool,
    pub build_of_openjdk: bool,
    /// Native-image capable builds
    pub build_of_graalvm: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_uri: Option<String>,
    pub synonyms: Vec<String>,
    pub versions: Vec<String>,
}

/// A package entry of the `packages` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub archive_type: String,
    /// `api_parameter` of the owning distribution
    pub distribution: String,
    pub jdk_version: u32,
    pub distribution_version: String,
    pub operating_system: String,
    pub architecture: String,
    pub package_type: String,
    pub lib_c_type: String,
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub pkg_download_redirect: Url,
    #[serde(default)]
    pub pkg_info_uri: Option<Url>,
}

/// API v3.0 wraps every list response in a `result` field
#[derive(Debug, Serialize, Deserialize)]
struct CatalogResponse<T> {
    result: Vec<T>,
}

pub fn parse_distributions(json: &str) -> Result<Vec<Distribution>> {
    parse_result(json, "distributions")
}

pub fn parse_packages(json: &str) -> Result<Vec<Package>> {
    parse_result(json, "packages")
}

/// Serialize records into the catalog's `{"result": [...]}` envelope
pub fn to_catalog_json<T: Serialize>(items: &[T]) -> Result<String> {
    #[derive(Serialize)]
    struct Envelope<'a, T> {
        result: &'a [T],
    }

    Ok(serde_json::to_string(&Envelope { result: items })?)
}

fn parse_result<T: DeserializeOwned>(json: &str, endpoint: &str) -> Result<Vec<T>> {
    match serde_json::from_str::<CatalogResponse<T>>(json) {
        Ok(response) => {
            debug!("Parsed {} {endpoint} entries", response.result.len());
            Ok(response.result)
        }
        Err(e) => {
            debug!("Failed to parse {endpoint} response: {e}");
            trace!("Response body: {json}");
            Err(ResolverError::InvalidCatalogData(format!(
                "Failed to parse {endpoint} response: {e}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISTRIBUTIONS_JSON: &str = r#"{
  "result":
  [{
  "name":"ZuluPrime",
  "api_parameter":"zulu_prime",
  "maintained":true,
  "available":true,
  "build_of_openjdk":true,
  "build_of_graalvm":false,
  "official_uri":"https://www.azul.com/products/prime/stream-download/",
  "synonyms": [
    "zing",
    "ZING",
    "zuluprime",
    "ZuluPrime"
  ],
  "versions": [
    "21.0.1+12",
    "17.0.9+8"
  ]
},
{
  "name":"GraalVM Community",
  "api_parameter":"graalvm_community",
  "maintained":true,
  "available":true,
  "build_of_openjdk":false,
  "build_of_graalvm":true,
  "synonyms": [],
  "versions": []
}],
  "message":""
}"#;

    const PACKAGES_JSON: &str = r#"{
  "result":[
  {
    "id":"4b5ba9b8a46a0aa3cb5bd1c37dcd7ab6",
    "archive_type":"tar.gz",
    "distribution":"temurin",
    "major_version":11,
    "java_version":"11.0.21+9",
    "distribution_version":"11.0.21",
    "jdk_version":11,
    "latest_build_available":true,
    "release_status":"ga",
    "term_of_support":"lts",
    "operating_system":"linux",
    "lib_c_type":"glibc",
    "architecture":"x64",
    "fpu":"unknown",
    "package_type":"jdk",
    "javafx_bundled":false,
    "directly_downloadable":true,
    "filename":"OpenJDK11U-jdk_x64_linux_hotspot_11.0.21_9.tar.gz",
    "links":{
      "pkg_info_uri":"https://api.foojay.io/disco/v3.0/ids/4b5ba9b8a46a0aa3cb5bd1c37dcd7ab6",
      "pkg_download_redirect":"https://api.foojay.io/disco/v3.0/ids/4b5ba9b8a46a0aa3cb5bd1c37dcd7ab6/redirect"
    },
    "free_use_in_production":true,
    "tck_tested":"unknown",
    "size":192805618
  }],
  "message":""
}"#;

    #[test]
    fn test_parse_distributions_api_response() {
        let distributions = parse_distributions(DISTRIBUTIONS_JSON).unwrap();
        assert_eq!(distributions.len(), 2);

        let zulu_prime = &distributions[0];
        assert_eq!(zulu_prime.name, "ZuluPrime");
        assert_eq!(zulu_prime.api_parameter, "zulu_prime");
        assert!(zulu_prime.maintained);
        assert!(zulu_prime.build_of_openjdk);
        assert!(!zulu_prime.build_of_graalvm);
        assert_eq!(zulu_prime.synonyms.len(), 4);
        assert_eq!(zulu_prime.versions, vec!["21.0.1+12", "17.0.9+8"]);

        let graal = &distributions[1];
        assert!(graal.build_of_graalvm);
        assert_eq!(graal.official_uri, None);
    }

    #[test]
    fn test_parse_packages_api_response() {
        let packages = parse_packages(PACKAGES_JSON).unwrap();
        assert_eq!(packages.len(), 1);

        let package = &packages[0];
        assert_eq!(package.archive_type, "tar.gz");
        assert_eq!(package.distribution, "temurin");
        assert_eq!(package.jdk_version, 11);
        assert_eq!(package.distribution_version, "11.0.21");
        assert_eq!(package.architecture, "x64");
        assert_eq!(package.lib_c_type, "glibc");
        assert_eq!(
            package.links.pkg_download_redirect.as_str(),
            "https://api.foojay.io/disco/v3.0/ids/4b5ba9b8a46a0aa3cb5bd1c37dcd7ab6/redirect"
        );
        assert!(package.links.pkg_info_uri.is_some());
    }

    #[test]
    fn test_missing_result_field_is_parse_error() {
        let result = parse_distributions(r#"{"message":"oops"}"#);
        assert!(matches!(result, Err(ResolverError::InvalidCatalogData(_))));
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let json = r#"{"result":[{"name":"Temurin","maintained":true,
            "build_of_openjdk":true,"build_of_graalvm":false,"synonyms":[],"versions":[]}]}"#;
        let err = parse_distributions(json).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("api_parameter"));
    }

    #[test]
    fn test_relative_download_uri_is_parse_error() {
        let json = PACKAGES_JSON.replace(
            "https://api.foojay.io/disco/v3.0/ids/4b5ba9b8a46a0aa3cb5bd1c37dcd7ab6/redirect",
            "/ids/4b5ba9b8a46a0aa3cb5bd1c37dcd7ab6/redirect",
        );
        assert!(parse_packages(&json).unwrap_err().is_parse());
    }

    #[test]
    fn test_non_integer_version_is_parse_error() {
        let json = PACKAGES_JSON.replace("\"jdk_version\":11", "\"jdk_version\":\"11\"");
        assert!(parse_packages(&json).is_err());
    }

    #[test]
    fn test_not_json_is_parse_error() {
        assert!(parse_packages("<html>Bad Gateway</html>").unwrap_err().is_parse());
    }

    #[test]
    fn test_distributions_survive_catalog_round_trip() {
        let distributions = parse_distributions(DISTRIBUTIONS_JSON).unwrap();
        let json = to_catalog_json(&distributions).unwrap();
        assert_eq!(parse_distributions(&json).unwrap(), distributions);
    }
}
