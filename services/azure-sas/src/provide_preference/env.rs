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

use crate::constants::*;

/// EnvPreferenceProvider lets environment variables override preferences.
///
/// Each preference key maps to one variable:
///
/// - `SharedAccessSignature`: [`MUNKI_SHARED_ACCESS_SIGNATURE`]
/// - `AzureEndpoint`: [`MUNKI_AZURE_ENDPOINT`]
///
/// Variables that are unset or empty leave the key to the next source.
#[derive(Clone, Debug)]
pub struct EnvPreferenceProvider {
    vars: HashMap<String, String>,
}

impl Default for EnvPreferenceProvider {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                (
                    SHARED_ACCESS_SIGNATURE.to_string(),
                    MUNKI_SHARED_ACCESS_SIGNATURE.to_string(),
                ),
                (AZURE_ENDPOINT.to_string(), MUNKI_AZURE_ENDPOINT.to_string()),
            ]),
        }
    }
}

impl EnvPreferenceProvider {
    /// Create a provider with the default key to variable mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map another preference key to an environment variable.
    pub fn with_var(mut self, key: impl Into<String>, var: impl Into<String>) -> Self {
        self.vars.insert(key.into(), var.into());
        self
    }
}

#[async_trait]
impl ReadPreference for EnvPreferenceProvider {
    async fn read_preference(
        &self,
        ctx: &Context,
        _domain: &str,
        key: &str,
    ) -> Result<Option<String>> {
        let Some(var) = self.vars.get(key) else {
            return Ok(None);
        };

        Ok(ctx.env_var(var).filter(|v| !v.is_empty()))
    }
}
