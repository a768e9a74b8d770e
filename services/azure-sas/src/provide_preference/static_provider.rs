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

use async_trait::async_trait;
use reqmw_core::{Context, ReadPreference, Result};
use std::collections::HashMap;

use crate::constants::{AZURE_ENDPOINT, BUNDLE_ID, SHARED_ACCESS_SIGNATURE};

/// StaticPreferenceProvider serves preferences from a fixed map.
///
/// Values only answer lookups in the provider's own domain.
#[derive(Clone, Debug)]
pub struct StaticPreferenceProvider {
    domain: String,
    values: HashMap<String, String>,
}

impl Default for StaticPreferenceProvider {
    fn default() -> Self {
        Self::new(BUNDLE_ID)
    }
}

impl StaticPreferenceProvider {
    /// Create an empty provider for the given domain.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            values: HashMap::new(),
        }
    }

    /// Set a preference value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set the shared access signature.
    pub fn with_shared_access_signature(self, sas: impl Into<String>) -> Self {
        self.with_value(SHARED_ACCESS_SIGNATURE, sas)
    }

    /// Set the azure endpoint.
    pub fn with_azure_endpoint(self, endpoint: impl Into<String>) -> Self {
        self.with_value(AZURE_ENDPOINT, endpoint)
    }
}

#[async_trait]
impl ReadPreference for StaticPreferenceProvider {
    async fn read_preference(
        &self,
        _ctx: &Context,
        domain: &str,
        key: &str,
    ) -> Result<Option<String>> {
        if domain != self.domain {
            return Ok(None);
        }

        Ok(self.values.get(key).cloned())
    }
}
