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

use pretty_assertions::assert_eq;
use reqmw_azure_sas::constants::{MUNKI_AZURE_ENDPOINT, MUNKI_SHARED_ACCESS_SIGNATURE};
use reqmw_azure_sas::{EnvPreferenceProvider, SasMiddleware};
use reqmw_core::{Context, OsEnv, ProcessRequestOptions, RequestOptions};

use crate::init_logger;

#[tokio::test]
async fn test_os_env_overrides() {
    init_logger();

    temp_env::async_with_vars(
        [
            (MUNKI_SHARED_ACCESS_SIGNATURE, Some("&sv=2020-08-04&sig=abc")),
            (MUNKI_AZURE_ENDPOINT, Some("devstoreaccount1")),
        ],
        async {
            let ctx = Context::new().with_env(OsEnv);
            let mw = SasMiddleware::load(&ctx, &EnvPreferenceProvider::new())
                .await
                .unwrap();

            let options = mw.process_request_options(RequestOptions::new(
                "http://127.0.0.1:10000/devstoreaccount1/munki/catalogs/all?restype=container",
            ));
            assert_eq!(
                options.url,
                "http://127.0.0.1:10000/devstoreaccount1/munki/catalogs/all?restype=container&sv=2020-08-04&sig=abc"
            );
        },
    )
    .await;
}

#[tokio::test]
async fn test_os_env_unset() {
    init_logger();

    temp_env::async_with_vars(
        [
            (MUNKI_SHARED_ACCESS_SIGNATURE, None::<&str>),
            (MUNKI_AZURE_ENDPOINT, None),
        ],
        async {
            let ctx = Context::new().with_env(OsEnv);
            let mw = SasMiddleware::load(&ctx, &EnvPreferenceProvider::new())
                .await
                .unwrap();

            assert_eq!(mw.endpoint(), "blob.core.windows.net");
        },
    )
    .await;
}
