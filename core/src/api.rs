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

use crate::{Context, RequestOptions, Result};
use std::fmt::Debug;

/// ReadPreference is the trait used to look up one value in a preference store.
///
/// Preferences are addressed by a `domain` (for example `ManagedInstalls`) and
/// a `key` inside it. Different stores back this trait: the macOS `defaults`
/// tool, process environment overrides, or a fixed map in tests.
#[async_trait::async_trait]
pub trait ReadPreference: Debug + Send + Sync + Unpin + 'static {
    /// Read a preference value.
    ///
    /// - Returns `Ok(Some(v))` if the store holds a value for this key.
    /// - Returns `Ok(None)` if the key is absent from this store.
    /// - Returns `Err` only if the store itself could not be read.
    async fn read_preference(&self, ctx: &Context, domain: &str, key: &str)
        -> Result<Option<String>>;
}

/// ProcessRequestOptions is the hook a package agent calls before each request.
///
/// The agent builds the options describing an outgoing request, hands them
/// to the hook, and issues the request with whatever comes back. The hook
/// must not block and cannot fail: everything it needs has been resolved
/// before the first call.
pub trait ProcessRequestOptions: Debug + Send + Sync + 'static {
    /// Rewrite the options of one outgoing request.
    fn process_request_options(&self, options: RequestOptions) -> RequestOptions;
}
