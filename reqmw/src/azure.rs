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

//! Azure blob storage SAS middleware with convenience APIs

pub use reqmw_azure_sas::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Load the SAS middleware with the standard setup.
///
/// This function uses:
/// - Default context (OS environment, tokio command executor)
/// - Default preference provider (configuration profiles, then `defaults`)
///
/// Preferences are read once here. A preference store that cannot be read
/// is returned as an error.
///
/// # Example
///
/// ```no_run
/// use reqmw::{ProcessRequestOptions, RequestOptions};
///
/// # async fn example() -> reqmw::Result<()> {
/// let mw = reqmw::azure::default_middleware().await?;
/// let options = mw.process_request_options(RequestOptions::new(
///     "https://acct.blob.core.windows.net/munki/catalogs/all",
/// ));
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub async fn default_middleware() -> Result<SasMiddleware> {
    let ctx = default_context();
    SasMiddleware::load(&ctx, &DefaultPreferenceProvider::new()).await
}
