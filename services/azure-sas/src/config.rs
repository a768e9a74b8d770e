// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use reqmw_core::utils::Redact;
use reqmw_core::{Context, ReadPreference, Result};

use crate::constants::*;

/// Config carries the preferences the SAS middleware is built from.
///
/// Both values are read once from the `ManagedInstalls` domain and kept for
/// the life of the process.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `shared_access_signature` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - preference: `SharedAccessSignature`
    ///
    /// The value is a query string fragment such as `?sp=r&se=...&sig=...`
    /// and is appended verbatim.
    pub shared_access_signature: Option<String>,
    /// `azure_endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - preference: `AzureEndpoint`
    ///
    /// Falls back to [`DEFAULT_AZURE_ENDPOINT`] when unset or empty.
    pub azure_endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "shared_access_signature",
                &Redact::from(&self.shared_access_signature),
            )
            .field("azure_endpoint", &self.azure_endpoint)
            .finish()
    }
}

impl Config {
    /// Set the shared access signature.
    pub fn with_shared_access_signature(mut self, sas: impl Into<String>) -> Self {
        self.shared_access_signature = Some(sas.into());
        self
    }

    /// Set the azure endpoint.
    pub fn with_azure_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.azure_endpoint = Some(endpoint.into());
        self
    }

    /// Load config from the preference store.
    ///
    /// Fields that are already set are kept. Errors from the store are not
    /// recovered here: a store that cannot be read makes the whole load fail.
    pub async fn load(mut self, ctx: &Context, provider: &dyn ReadPreference) -> Result<Self> {
        if self.shared_access_signature.is_none() {
            self.shared_access_signature = provider
                .read_preference(ctx, BUNDLE_ID, SHARED_ACCESS_SIGNATURE)
                .await?;
        }

        if self.azure_endpoint.is_none() {
            self.azure_endpoint = provider
                .read_preference(ctx, BUNDLE_ID, AZURE_ENDPOINT)
                .await?;
        }

        if self.shared_access_signature.is_none() {
            log::warn!(
                "preference {BUNDLE_ID}.{SHARED_ACCESS_SIGNATURE} is not set, requests will not be signed"
            );
        }
        log::debug!("loaded config: {self:?}");

        Ok(self)
    }

    /// The endpoint request URLs are matched against.
    pub fn endpoint(&self) -> &str {
        match self.azure_endpoint.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_AZURE_ENDPOINT,
        }
    }

    /// The suffix appended to matching URLs, empty when unset.
    pub fn signature(&self) -> &str {
        self.shared_access_signature.as_deref().unwrap_or_default()
    }
}
