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

mod context;
mod format;

pub use context::ErrorContext;
pub use format::format_error_chain;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Failed to reach the foojay.io catalog: {0}")]
    CatalogUnavailable(String),

    #[error("Requesting the foojay.io catalog failed with HTTP {status}: {body}")]
    CatalogStatus { status: u16, body: String },

    #[error("Invalid catalog response: {0}")]
    InvalidCatalogData(String),

    #[error("Invalid toolchain request: {0}")]
    InvalidRequest(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ResolverError {
    /// Connection failures, timeouts and non-2xx responses
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ResolverError::CatalogUnavailable(_) | ResolverError::CatalogStatus { .. }
        )
    }

    /// Malformed or incomplete catalog data
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ResolverError::InvalidCatalogData(_) | ResolverError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;
