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

use std::collections::HashMap;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use reqmw_azure_sas::{DefaultPreferenceProvider, DefaultsPreferenceProvider, SasMiddleware};
use reqmw_command_execute_tokio::TokioCommandExecute;
use reqmw_core::{
    CommandExecute, CommandOutput, Context, ErrorKind, ProcessRequestOptions, ReadPreferenceChain,
    RequestOptions, Result,
};

use crate::init_logger;

/// A fake `defaults` tool backed by a map of plist path to key/value pairs.
#[derive(Debug, Default)]
struct FakeDefaults {
    plists: HashMap<String, HashMap<String, String>>,
    broken: Vec<String>,
}

impl FakeDefaults {
    fn with(mut self, target: &str, key: &str, value: &str) -> Self {
        self.plists
            .entry(target.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    fn with_broken(mut self, target: &str) -> Self {
        self.broken.push(target.to_string());
        self
    }
}

#[async_trait]
impl CommandExecute for FakeDefaults {
    async fn command_execute(&self, _program: &str, args: &[&str]) -> Result<CommandOutput> {
        let [_, target, key] = args else {
            panic!("unexpected defaults invocation: {args:?}");
        };

        if self.broken.iter().any(|v| v == target) {
            return Ok(CommandOutput {
                status: 1,
                stdout: vec![],
                stderr: format!("Could not parse {target}.plist").into_bytes(),
            });
        }

        match self.plists.get(*target).and_then(|kv| kv.get(*key)) {
            Some(value) => Ok(CommandOutput {
                status: 0,
                stdout: format!("{value}\n").into_bytes(),
                stderr: vec![],
            }),
            None => Ok(CommandOutput {
                status: 1,
                stdout: vec![],
                stderr: format!("\nThe domain/default pair of ({target}, {key}) does not exist\n")
                    .into_bytes(),
            }),
        }
    }
}

fn defaults_chain() -> ReadPreferenceChain {
    ReadPreferenceChain::new()
        .push(DefaultsPreferenceProvider::managed())
        .push(DefaultsPreferenceProvider::new())
        .push(DefaultsPreferenceProvider::system())
}

#[tokio::test]
async fn test_profile_value_wins_over_system_file() {
    init_logger();
    let ctx = Context::new().with_command_execute(
        FakeDefaults::default()
            .with(
                "/Library/Managed Preferences/ManagedInstalls",
                "SharedAccessSignature",
                "?sig=from-profile",
            )
            .with(
                "/Library/Preferences/ManagedInstalls",
                "SharedAccessSignature",
                "?sig=from-defaults-write",
            )
            .with(
                "/Library/Preferences/ManagedInstalls",
                "AzureEndpoint",
                "blob.core.chinacloudapi.cn",
            ),
    );

    let provider = DefaultPreferenceProvider::new().with_chain(defaults_chain());
    let mw = SasMiddleware::load(&ctx, &provider).await.unwrap();

    assert_eq!(mw.endpoint(), "blob.core.chinacloudapi.cn");
    let options = mw.process_request_options(RequestOptions::new(
        "https://acct.blob.core.chinacloudapi.cn/munki/catalogs/all",
    ));
    assert_eq!(
        options.url,
        "https://acct.blob.core.chinacloudapi.cn/munki/catalogs/all?sig=from-profile"
    );
}

#[tokio::test]
async fn test_nothing_configured() {
    init_logger();
    let ctx = Context::new().with_command_execute(FakeDefaults::default());

    let provider = DefaultPreferenceProvider::new().with_chain(defaults_chain());
    let mw = SasMiddleware::load(&ctx, &provider).await.unwrap();

    assert_eq!(mw.endpoint(), "blob.core.windows.net");
    let url = "https://acct.blob.core.windows.net/munki/catalogs/all";
    assert_eq!(mw.process_request_options(RequestOptions::new(url)).url, url);
}

#[tokio::test]
async fn test_corrupted_store_fails_load() {
    init_logger();
    let ctx = Context::new().with_command_execute(
        FakeDefaults::default()
            .with_broken("/Library/Managed Preferences/ManagedInstalls")
            .with(
                "/Library/Preferences/ManagedInstalls",
                "SharedAccessSignature",
                "?sig=never-read",
            ),
    );

    let provider = DefaultPreferenceProvider::new().with_chain(defaults_chain());
    let err = SasMiddleware::load(&ctx, &provider).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PreferenceUnavailable);
}

/// Reads the real store through `/usr/bin/defaults`.
///
/// Set `REQMW_DEFAULTS_TEST=on` on a macOS host with `ManagedInstalls` configured.
#[tokio::test]
async fn test_live_defaults_store() {
    init_logger();
    if std::env::var("REQMW_DEFAULTS_TEST").unwrap_or_default() != "on" {
        log::warn!("REQMW_DEFAULTS_TEST is not set, skipped");
        return;
    }

    let ctx = Context::new().with_command_execute(TokioCommandExecute);
    let provider = DefaultPreferenceProvider::new().with_chain(defaults_chain());
    let mw = SasMiddleware::load(&ctx, &provider).await.unwrap();

    log::debug!("loaded middleware: {mw:?}");
    assert!(!mw.endpoint().is_empty());
}
