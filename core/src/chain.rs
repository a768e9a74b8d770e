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

use crate::{Context, ReadPreference, Result};
use async_trait::async_trait;
use std::fmt::{self, Debug};

/// A chain of preference sources that will be tried in order.
///
/// The first source holding a value wins. A source that fails to read
/// aborts the whole lookup: a broken store is surfaced to the caller instead
/// of silently falling through to a lower priority source.
pub struct ReadPreferenceChain {
    providers: Vec<Box<dyn ReadPreference>>,
}

impl ReadPreferenceChain {
    /// Create a new empty preference chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a preference source to the chain.
    pub fn push(mut self, provider: impl ReadPreference) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl Default for ReadPreferenceChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ReadPreferenceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadPreferenceChain")
            .field("providers", &self.providers)
            .finish()
    }
}

#[async_trait]
impl ReadPreference for ReadPreferenceChain {
    async fn read_preference(
        &self,
        ctx: &Context,
        domain: &str,
        key: &str,
    ) -> Result<Option<String>> {
        for provider in &self.providers {
            log::debug!("reading preference {domain}.{key} from {provider:?}");

            match provider.read_preference(ctx, domain, key).await? {
                Some(value) => {
                    log::debug!("preference {domain}.{key} found in {provider:?}");
                    return Ok(Some(value));
                }
                None => continue,
            }
        }

        log::debug!("preference {domain}.{key} not found in any source");
        Ok(None)
    }
}
