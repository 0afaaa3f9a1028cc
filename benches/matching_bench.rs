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

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use foojay_resolver::api::{Distribution, Links, Package};
use foojay_resolver::matcher::{match_distributions, match_package};
use foojay_resolver::{Architecture, JavaVersion, JvmImplementation, KnownVendor, VendorSpec};
use url::Url;

const CATALOG: &[(&str, bool)] = &[
    ("ZuluPrime", false),
    ("Zulu", false),
    ("Trava", false),
    ("Semeru certified", false),
    ("Semeru", false),
    ("SAP Machine", false),
    ("Red Hat", false),
    ("Oracle OpenJDK", false),
    ("Oracle", false),
    ("OpenLogic", false),
    ("Microsoft", false),
    ("Mandrel", true),
    ("Liberica Native", true),
    ("Liberica", false),
    ("Kona", false),
    ("JetBrains", false),
    ("GraalVM Community", true),
    ("GraalVM CE 17", true),
    ("GraalVM CE 11", true),
    ("GraalVM", true),
    ("Gluon GraalVM", true),
    ("Dragonwell", false),
    ("Debian", false),
    ("Corretto", false),
    ("Bisheng", false),
    ("Temurin", false),
    ("AOJ OpenJ9", false),
    ("AOJ", false),
];

fn catalog() -> Vec<Distribution> {
    CATALOG
        .iter()
        .map(|(name, graalvm)| Distribution {
            name: name.to_string(),
            api_parameter: name.to_lowercase().replace(' ', "_"),
            maintained: true,
            build_of_openjdk: !graalvm,
            build_of_graalvm: *graalvm,
            official_uri: None,
            synonyms: vec![name.to_lowercase(), name.to_uppercase()],
            versions: vec!["21.0.1".to_string(), "17.0.9".to_string()],
        })
        .collect()
}

fn packages() -> Vec<Package> {
    let mut packages = Vec::new();
    for (i, (os, arch, archive_type, package_type, lib_c_type)) in [
        ("linux", "x64", "tar.gz", "jre", "glibc"),
        ("linux", "x64", "deb", "jdk", "glibc"),
        ("linux", "aarch64", "tar.gz", "jdk", "glibc"),
        ("linux", "x64", "tar.gz", "jdk", "musl"),
        ("linux", "x64", "rpm", "jdk", "glibc"),
        ("linux", "x64", "tar.gz", "jdk", "glibc"),
        ("linux", "i386", "tar.gz", "jdk", "glibc"),
    ]
    .into_iter()
    .cycle()
    .take(70)
    .enumerate()
    {
        let redirect = format!("https://api.foojay.io/disco/v3.0/ids/{i}/redirect");
        packages.push(Package {
            archive_type: archive_type.to_string(),
            distribution: "temurin".to_string(),
            jdk_version: 21,
            distribution_version: "21.0.1".to_string(),
            operating_system: os.to_string(),
            architecture: arch.to_string(),
            package_type: package_type.to_string(),
            lib_c_type: lib_c_type.to_string(),
            links: Links {
                pkg_download_redirect: Url::parse(&redirect).unwrap(),
                pkg_info_uri: None,
            },
        });
    }
    packages
}

pub fn bench_distribution_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution_matching");
    let distributions = catalog();
    let version = JavaVersion::new(17).unwrap();

    let vendors = vec![
        ("any", VendorSpec::Any),
        ("alias", VendorSpec::Named(KnownVendor::Adoptium)),
        ("fuzzy", VendorSpec::Named(KnownVendor::Microsoft)),
        ("graalvm", VendorSpec::Named(KnownVendor::GraalVm)),
        ("free_text", VendorSpec::matching("zulu")),
    ];

    for (name, vendor) in &vendors {
        group.bench_with_input(BenchmarkId::new("vendor_specific", name), vendor, |b, v| {
            b.iter(|| {
                match_distributions(
                    black_box(&distributions),
                    v,
                    JvmImplementation::VendorSpecific,
                    version,
                    false,
                )
            })
        });
    }

    group.bench_function("alternate_runtime_any", |b| {
        b.iter(|| {
            match_distributions(
                black_box(&distributions),
                &VendorSpec::Any,
                JvmImplementation::AlternateRuntime,
                version,
                false,
            )
        })
    });

    group.bench_function("native_image_any", |b| {
        b.iter(|| {
            match_distributions(
                black_box(&distributions),
                &VendorSpec::Any,
                JvmImplementation::VendorSpecific,
                version,
                true,
            )
        })
    });

    group.finish();
}

pub fn bench_package_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("package_matching");
    let packages = packages();

    for arch in [Architecture::X86_64, Architecture::Aarch64, Architecture::X86] {
        group.bench_with_input(
            BenchmarkId::new("match_package", arch.to_string()),
            &arch,
            |b, a| b.iter(|| match_package(black_box(&packages), *a)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_distribution_matching, bench_package_matching);
criterion_main!(benches);
