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
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vendors the build tool knows by identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownVendor {
    Adoptium,
    AdoptOpenJdk,
    Amazon,
    Apple,
    Azul,
    BellSoft,
    GraalVm,
    HewlettPackard,
    Ibm,
    /// Older identifier for IBM, kept so hosts still sending it resolve the same way
    IbmSemeru,
    JetBrains,
    Microsoft,
    Oracle,
    Sap,
    Tencent,
}

impl KnownVendor {
    /// Classification order. IbmSemeru is absent: it classifies as Ibm.
    const CLASSIFICATION_ORDER: [KnownVendor; 14] = [
        KnownVendor::Adoptium,
        KnownVendor::AdoptOpenJdk,
        KnownVendor::Amazon,
        KnownVendor::Apple,
        KnownVendor::Azul,
        KnownVendor::BellSoft,
        KnownVendor::GraalVm,
        KnownVendor::HewlettPackard,
        KnownVendor::Ibm,
        KnownVendor::JetBrains,
        KnownVendor::Microsoft,
        KnownVendor::Oracle,
        KnownVendor::Sap,
        KnownVendor::Tencent,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            KnownVendor::Adoptium => "adoptium",
            KnownVendor::AdoptOpenJdk => "adoptopenjdk",
            KnownVendor::Amazon => "amazon",
            KnownVendor::Apple => "apple",
            KnownVendor::Azul => "azul",
            KnownVendor::BellSoft => "bellsoft",
            KnownVendor::GraalVm => "graal_vm",
            KnownVendor::HewlettPackard => "hewlett_packard",
            KnownVendor::Ibm => "ibm",
            KnownVendor::IbmSemeru => "ibm_semeru",
            KnownVendor::JetBrains => "jetbrains",
            KnownVendor::Microsoft => "microsoft",
            KnownVendor::Oracle => "oracle",
            KnownVendor::Sap => "sap",
            KnownVendor::Tencent => "tencent",
        }
    }

    /// Lowercase fragments that identify this vendor inside free vendor text
    fn indicators(&self) -> &'static [&'static str] {
        match self {
            KnownVendor::Adoptium => &["temurin", "adoptium", "eclipse foundation"],
            KnownVendor::AdoptOpenJdk => &["aoj", "adoptopenjdk"],
            KnownVendor::Amazon => &["corretto", "amazon"],
            KnownVendor::Apple => &["apple"],
            KnownVendor::Azul => &["zulu", "azul"],
            KnownVendor::BellSoft => &["liberica", "bellsoft"],
            KnownVendor::GraalVm => &["graalvm"],
            KnownVendor::HewlettPackard => &["hewlett-packard", "hp-ux"],
            KnownVendor::Ibm | KnownVendor::IbmSemeru => {
                &["ibm", "semeru", "international business machines"]
            }
            KnownVendor::JetBrains => &["jetbrains"],
            KnownVendor::Microsoft => &["microsoft"],
            KnownVendor::Oracle => &["oracle"],
            KnownVendor::Sap => &["sapmachine", "sap machine", "sap se"],
            KnownVendor::Tencent => &["kona", "tencent"],
        }
    }

    /// The vendor an identifier is treated as when matching
    fn canonical(&self) -> KnownVendor {
        match self {
            KnownVendor::IbmSemeru => KnownVendor::Ibm,
            other => *other,
        }
    }

    /// Classify free vendor text (a distribution name or synonym).
    ///
    /// The first vendor in classification order whose indicator occurs in
    /// the lowercased text wins.
    pub fn classify(raw: &str) -> Option<KnownVendor> {
        let lowered = raw.to_lowercase();
        Self::CLASSIFICATION_ORDER
            .iter()
            .copied()
            .find(|vendor| vendor.indicators().iter().any(|i| lowered.contains(i)))
    }
}

impl FromStr for KnownVendor {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "adoptium" => Ok(KnownVendor::Adoptium),
            "adoptopenjdk" => Ok(KnownVendor::AdoptOpenJdk),
            "amazon" => Ok(KnownVendor::Amazon),
            "apple" => Ok(KnownVendor::Apple),
            "azul" => Ok(KnownVendor::Azul),
            "bellsoft" => Ok(KnownVendor::BellSoft),
            "graalvm" => Ok(KnownVendor::GraalVm),
            "hewlettpackard" => Ok(KnownVendor::HewlettPackard),
            "ibm" => Ok(KnownVendor::Ibm),
            "ibmsemeru" => Ok(KnownVendor::IbmSemeru),
            "jetbrains" => Ok(KnownVendor::JetBrains),
            "microsoft" => Ok(KnownVendor::Microsoft),
            "oracle" => Ok(KnownVendor::Oracle),
            "sap" => Ok(KnownVendor::Sap),
            "tencent" => Ok(KnownVendor::Tencent),
            _ => Err(ResolverError::InvalidRequest(format!("Unknown vendor: {s}"))),
        }
    }
}

impl std::fmt::Display for KnownVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Vendor preference of a toolchain request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VendorSpec {
    /// No preference
    #[default]
    Any,
    /// One of the well-known vendors
    Named(KnownVendor),
    /// Case-insensitive substring of a distribution name or synonym
    FreeText(String),
}

impl VendorSpec {
    pub fn matching(pattern: impl Into<String>) -> Self {
        VendorSpec::FreeText(pattern.into())
    }

    /// Whether the given vendor text satisfies this preference
    pub fn matches(&self, text: &str) -> bool {
        match self {
            VendorSpec::Any => true,
            VendorSpec::Named(vendor) => KnownVendor::classify(text) == Some(vendor.canonical()),
            VendorSpec::FreeText(pattern) => {
                text.to_lowercase().contains(&pattern.to_lowercase())
            }
        }
    }
}

impl FromStr for VendorSpec {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(VendorSpec::Any);
        }
        Ok(match KnownVendor::from_str(trimmed) {
            Ok(vendor) => VendorSpec::Named(vendor),
            Err(_) => VendorSpec::FreeText(trimmed.to_string()),
        })
    }
}

impl std::fmt::Display for VendorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorSpec::Any => write!(f, "any"),
            VendorSpec::Named(vendor) => write!(f, "{vendor}"),
            VendorSpec::FreeText(pattern) => write!(f, "matching('{pattern}')"),
        }
    }
}
