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

//! Narrowing the catalog's distribution list down to the distributions a
//! toolchain request may be served from.
//!
//! The result is ordered: packages are looked up per distribution in this
//! order and the first distribution with a matching package wins.

use crate::api::models::Distribution;
use crate::models::request::{JavaVersion, JvmImplementation};
use crate::models::vendor::{KnownVendor, VendorSpec};
use log::debug;

/// Exact catalog display name of each known vendor's preferred distribution
pub const VENDOR_ALIASES: &[(KnownVendor, &str)] = &[
    (KnownVendor::Adoptium, "Temurin"),
    (KnownVendor::AdoptOpenJdk, "AOJ"),
    (KnownVendor::Amazon, "Corretto"),
    (KnownVendor::Azul, "Zulu"),
    (KnownVendor::BellSoft, "Liberica"),
    (KnownVendor::Ibm, "Semeru"),
    (KnownVendor::IbmSemeru, "Semeru"),
    (KnownVendor::Oracle, "Oracle OpenJDK"),
    (KnownVendor::Sap, "SAP Machine"),
];

/// Distributions shipping the OpenJ9 engine, the only candidates for alternate runtime requests
pub const ALTERNATE_RUNTIME_ALIASES: &[(KnownVendor, &str)] = &[
    (KnownVendor::Ibm, "Semeru"),
    (KnownVendor::AdoptOpenJdk, "AOJ OpenJ9"),
    (KnownVendor::IbmSemeru, "Semeru"),
];

/// Distributions tried first when no vendor is requested; all others keep catalog order
pub const DISTRIBUTION_ORDER_OF_PREFERENCE: &[&str] = &["Temurin", "AOJ"];

/// Old community GraalVM releases carry the Java version in their name, e.g. "GraalVM CE 17"
const GRAALVM_CE_PREFIX: &str = "GraalVM CE";

/// Matches "GraalVM Community" and "GraalVM CE n" but not Oracle GraalVM
const GRAALVM_COMMUNITY_FRAGMENT: &str = "GraalVM C";

/// Select the distributions matching `vendor` and `implementation`.
///
/// `version` is only used to drop "GraalVM CE n" entries built for another
/// Java version; no general version filtering happens here.
pub fn match_distributions<'a>(
    distributions: &'a [Distribution],
    vendor: &VendorSpec,
    implementation: JvmImplementation,
    version: JavaVersion,
    native_image_capable: bool,
) -> Vec<&'a Distribution> {
    let candidates: Vec<&Distribution> = distributions
        .iter()
        .filter(|d| !native_image_capable || d.build_of_graalvm)
        .collect();

    if implementation == JvmImplementation::AlternateRuntime {
        return match_alternate_runtime(candidates, vendor);
    }

    let graalvm_family = matches!(
        vendor,
        VendorSpec::Any | VendorSpec::Named(KnownVendor::GraalVm)
    );
    if !graalvm_family {
        return match_vendor(candidates, vendor);
    }

    let candidates: Vec<&Distribution> = candidates
        .into_iter()
        .filter(|d| graalvm_ce_version_matches(&d.name, version))
        .collect();

    if *vendor == VendorSpec::Any {
        return preferred_first(candidates);
    }

    match_names_and_synonyms(
        candidates,
        &VendorSpec::matching(GRAALVM_COMMUNITY_FRAGMENT),
    )
}

/// Distinct alias targets in declaration order
pub fn preference_order(aliases: &[(KnownVendor, &'static str)]) -> Vec<&'static str> {
    let mut order: Vec<&'static str> = Vec::new();
    for (_, name) in aliases {
        if !order.contains(name) {
            order.push(*name);
        }
    }
    order
}

fn alias_for(aliases: &[(KnownVendor, &'static str)], vendor: &VendorSpec) -> Option<&'static str> {
    match vendor {
        VendorSpec::Named(known) => aliases
            .iter()
            .find(|(candidate, _)| candidate == known)
            .map(|(_, name)| *name),
        _ => None,
    }
}

fn match_alternate_runtime<'a>(
    candidates: Vec<&'a Distribution>,
    vendor: &VendorSpec,
) -> Vec<&'a Distribution> {
    match vendor {
        VendorSpec::Any => {
            let order = preference_order(ALTERNATE_RUNTIME_ALIASES);
            let mut matched: Vec<&Distribution> = candidates
                .into_iter()
                .filter(|d| order.iter().any(|name| *name == d.name))
                .collect();
            matched.sort_by_key(|d| order.iter().position(|name| *name == d.name));
            matched
        }
        _ => match alias_for(ALTERNATE_RUNTIME_ALIASES, vendor) {
            Some(alias) => candidates.into_iter().filter(|d| d.name == alias).collect(),
            None => {
                debug!("No alternate runtime distribution known for vendor {vendor}");
                Vec::new()
            }
        },
    }
}

fn match_vendor<'a>(candidates: Vec<&'a Distribution>, vendor: &VendorSpec) -> Vec<&'a Distribution> {
    if let Some(alias) = alias_for(VENDOR_ALIASES, vendor) {
        if let Some(distribution) = candidates.iter().find(|d| d.name == alias) {
            debug!("Vendor {vendor} matched distribution '{alias}' by alias");
            return vec![*distribution];
        }
    }

    match_names_and_synonyms(candidates, vendor)
}

fn match_names_and_synonyms<'a>(
    candidates: Vec<&'a Distribution>,
    vendor: &VendorSpec,
) -> Vec<&'a Distribution> {
    let matched: Vec<&Distribution> = candidates
        .into_iter()
        .filter(|d| vendor.matches(&d.name) || d.synonyms.iter().any(|s| vendor.matches(s)))
        .collect();
    debug!(
        "Vendor {vendor} matched {} distribution(s) by name or synonym",
        matched.len()
    );
    matched
}

/// Preferred distributions first, catalog order otherwise
fn preferred_first(mut candidates: Vec<&Distribution>) -> Vec<&Distribution> {
    let order = DISTRIBUTION_ORDER_OF_PREFERENCE;
    candidates.sort_by_key(|d| {
        order
            .iter()
            .position(|name| *name == d.name)
            .unwrap_or(order.len())
    });
    candidates
}

fn graalvm_ce_version_matches(name: &str, version: JavaVersion) -> bool {
    match name.strip_prefix(GRAALVM_CE_PREFIX) {
        Some(rest) => rest.trim().parse::<u32>() == Ok(version.major()),
        None => true,
    }
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod tests;
