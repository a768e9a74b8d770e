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

//! Azure blob storage shared access signature middleware
//!
//! Package agents that only speak plain HTTP cannot fetch from a blob
//! container that requires a Shared Access Signature (SAS). This crate
//! provides [`SasMiddleware`], a request option hook that appends the SAS
//! token to every URL pointing at the storage endpoint.
//!
//! Both settings are read once from the `ManagedInstalls` preference domain:
//!
//! - `SharedAccessSignature`: the token, starting with `?` or `&`
//! - `AzureEndpoint`: the endpoint to match, `blob.core.windows.net` when unset
//!
//! # Example
//!
//! ```rust,no_run
//! use reqmw_azure_sas::{DefaultPreferenceProvider, SasMiddleware};
//! use reqmw_core::{Context, OsEnv, ProcessRequestOptions, RequestOptions, Result};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let mw = SasMiddleware::load(&ctx, &DefaultPreferenceProvider::new()).await?;
//!
//! let options = RequestOptions::new("https://acct.blob.core.windows.net/munki/catalogs/all");
//! let options = mw.process_request_options(options);
//! println!("fetching {}", options.url);
//! # Ok(())
//! # }
//! ```

pub mod constants;

mod config;
pub use config::Config;

mod middleware;
pub use middleware::SasMiddleware;

mod provide_preference;
pub use provide_preference::*;
