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

/// Catalog responses shaped like the live foojay.io Disco API v3.0
use serde_json::{Value, json};

/// One `distributions` entry
#[allow(dead_code)]
pub fn distribution_json(name: &str, api_parameter: &str, graalvm: bool, synonyms: &[&str]) -> Value {
    json!({
        "name": name,
        "api_parameter": api_parameter,
        "maintained": true,
        "available": true,
        "build_of_openjdk": !graalvm,
        "build_of_graalvm": graalvm,
        "official_uri": format!("https://example.com/{api_parameter}"),
        "synonyms": synonyms,
        "versions": ["21.0.1+12", "17.0.9+9", "11.0.21+9"]
    })
}

/// A small catalog in live catalog order
#[allow(dead_code)]
pub fn distributions_body() -> String {
    json!({
        "result": [
            distribution_json("ZuluPrime", "zulu_prime", false, &["zing", "zuluprime"]),
            distribution_json("Zulu", "zulu", false, &["zulu", "ZULU"]),
            distribution_json("Semeru", "semeru", false, &["semeru", "ibm_semeru"]),
            distribution_json("GraalVM Community", "graalvm_community", true, &["graalvm_community"]),
            distribution_json("GraalVM CE 17", "graalvm_ce17", true, &["graalvm_ce17"]),
            distribution_json("Temurin", "temurin", false, &["temurin", "adoptium"]),
            distribution_json("AOJ OpenJ9", "aoj_openj9", false, &["aoj_openj9"]),
        ],
        "message": ""
    })
    .to_string()
}

/// One `packages` entry; the id determines the download link
#[allow(dead_code)]
#[allow(clippy::too_many_arguments)]
pub fn package_json(
    id: &str,
    distribution: &str,
    jdk_version: u32,
    operating_system: &str,
    architecture: &str,
    archive_type: &str,
    package_type: &str,
    lib_c_type: &str,
) -> Value {
    json!({
        "id": id,
        "archive_type": archive_type,
        "distribution": distribution,
        "major_version": jdk_version,
        "java_version": format!("{jdk_version}.0.21+9"),
        "distribution_version": format!("{jdk_version}.0.21"),
        "jdk_version": jdk_version,
        "latest_build_available": true,
        "release_status": "ga",
        "operating_system": operating_system,
        "lib_c_type": lib_c_type,
        "architecture": architecture,
        "package_type": package_type,
        "javafx_bundled": false,
        "directly_downloadable": archive_type != "msi",
        "filename": format!("{distribution}-{jdk_version}-{architecture}.{archive_type}"),
        "links": {
            "pkg_info_uri": format!("https://api.foojay.io/disco/v3.0/ids/{id}"),
            "pkg_download_redirect": download_uri(id)
        },
        "free_use_in_production": true,
        "size": 192805618
    })
}

#[allow(dead_code)]
pub fn packages_body(packages: Vec<Value>) -> String {
    json!({ "result": packages, "message": "" }).to_string()
}

#[allow(dead_code)]
pub fn download_uri(id: &str) -> String {
    format!("https://api.foojay.io/disco/v3.0/ids/{id}/redirect")
}
