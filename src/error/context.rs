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

use crate::error::ResolverError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a ResolverError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a ResolverError) -> Self {
        let (suggestion, details) = match error {
            ResolverError::CatalogUnavailable(msg) => {
                let suggestion = Some(
                    "Check your internet connection and proxy settings, then run the build again."
                        .to_string(),
                );
                let details = Some(format!("Connection failure: {msg}"));
                (suggestion, details)
            }
            ResolverError::CatalogStatus { status, body } => {
                let suggestion = match status {
                    429 => Some(
                        "The catalog is rate limiting requests. Wait a moment before retrying."
                            .to_string(),
                    ),
                    500..=599 => Some(
                        "The foojay.io catalog reported a server error. Try again later."
                            .to_string(),
                    ),
                    404 => Some(
                        "The catalog endpoint was not found. Check the configured base URL and \
                         API version."
                            .to_string(),
                    ),
                    _ => None,
                };
                let details = if body.trim().is_empty() {
                    None
                } else {
                    Some(format!("Catalog response: {}", body.trim()))
                };
                (suggestion, details)
            }
            ResolverError::InvalidCatalogData(msg) => {
                let suggestion = Some(
                    "The catalog returned data in an unexpected shape. The API may have changed; \
                     check for a newer resolver release."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            ResolverError::InvalidRequest(msg) => {
                let suggestion = Some(
                    "Request a positive Java language version (e.g. 17) on a supported platform."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            ResolverError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Check the resolver configuration file and FOOJAY_RESOLVER_* environment \
                     variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            ResolverError::Json(e) => {
                let details = Some(format!("JSON error at line {}: {e}", e.line()));
                (None, details)
            }
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}

impl fmt::Display for ErrorContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
