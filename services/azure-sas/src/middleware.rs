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
use reqmw_core::{Context, ProcessRequestOptions, ReadPreference, RequestOptions, Result};

use crate::constants::DEFAULT_AZURE_ENDPOINT;
use crate::Config;

/// SasMiddleware appends a shared access signature to blob storage URLs.
///
/// A request whose URL contains the configured endpoint anywhere (plain,
/// case-sensitive substring match) gets the signature appended verbatim.
/// Every other request passes through untouched. The rewrite is not
/// idempotent: a URL that is processed twice carries the signature twice.
#[derive(Clone)]
pub struct SasMiddleware {
    endpoint: String,
    signature: String,
}

impl Debug for SasMiddleware {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SasMiddleware")
            .field("endpoint", &self.endpoint)
            .field("signature", &Redact::from(&self.signature))
            .finish()
    }
}

impl SasMiddleware {
    /// Create a middleware from explicit values.
    ///
    /// An empty endpoint would match every URL, so it falls back to
    /// [`DEFAULT_AZURE_ENDPOINT`] like an unset preference does.
    pub fn new(endpoint: impl Into<String>, signature: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        if endpoint.is_empty() {
            endpoint = DEFAULT_AZURE_ENDPOINT.to_string();
        }

        Self {
            endpoint,
            signature: signature.into(),
        }
    }

    /// Create a middleware from a loaded config.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.endpoint(), cfg.signature())
    }

    /// Read both preferences once and build the middleware.
    pub async fn load(ctx: &Context, provider: &dyn ReadPreference) -> Result<Self> {
        let cfg = Config::default().load(ctx, provider).await?;
        Ok(Self::from_config(&cfg))
    }

    /// The endpoint request URLs are matched against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns `true` if a request to `url` will be signed.
    pub fn matches(&self, url: &str) -> bool {
        url.contains(self.endpoint.as_str())
    }
}

impl ProcessRequestOptions for SasMiddleware {
    fn process_request_options(&self, mut options: RequestOptions) -> RequestOptions {
        if self.matches(&options.url) {
            options.url.push_str(&self.signature);
        }

        options
    }
}
