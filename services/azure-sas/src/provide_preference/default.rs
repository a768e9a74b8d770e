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
use reqmw_core::{Context, ReadPreference, ReadPreferenceChain, Result};

#[cfg(target_os = "macos")]
use super::DefaultsPreferenceProvider;

/// Default provider that reads the preference store in the host's precedence order.
///
/// 1. Values forced by configuration profiles for the current user (`/Library/Managed Preferences/<user>`)
/// 2. Values forced by configuration profiles for the machine (`/Library/Managed Preferences`)
/// 3. The domain as resolved for the current user
/// 4. The machine wide preferences file (`/Library/Preferences`)
///
/// All sources are macOS only; elsewhere the chain is empty. Environment
/// variables are never consulted: push an
/// [`EnvPreferenceProvider`](super::EnvPreferenceProvider) into a custom
/// chain to opt in. A source that fails to read stops the lookup with an error.
#[derive(Debug)]
pub struct DefaultPreferenceProvider {
    chain: ReadPreferenceChain,
}

impl Default for DefaultPreferenceProvider {
    fn default() -> Self {
        let chain = ReadPreferenceChain::new();

        #[cfg(target_os = "macos")]
        let chain = chain
            .push(DefaultsPreferenceProvider::managed_user())
            .push(DefaultsPreferenceProvider::managed())
            .push(DefaultsPreferenceProvider::new())
            .push(DefaultsPreferenceProvider::system());

        Self { chain }
    }
}

impl DefaultPreferenceProvider {
    /// Create a new default provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sources with a custom chain.
    pub fn with_chain(mut self, chain: ReadPreferenceChain) -> Self {
        self.chain = chain;
        self
    }
}

#[async_trait]
impl ReadPreference for DefaultPreferenceProvider {
    async fn read_preference(
        &self,
        ctx: &Context,
        domain: &str,
        key: &str,
    ) -> Result<Option<String>> {
        self.chain.read_preference(ctx, domain, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::{EnvPreferenceProvider, StaticPreferenceProvider};
    use async_trait::async_trait;
    use reqmw_core::{CommandExecute, CommandOutput, StaticEnv};
    use std::collections::HashMap;

    /// Answers only the machine wide profile plist.
    #[derive(Debug)]
    struct ProfileOnly;

    #[async_trait]
    impl CommandExecute for ProfileOnly {
        async fn command_execute(&self, _program: &str, args: &[&str]) -> Result<CommandOutput> {
            if args == ["read", "/Library/Managed Preferences/ManagedInstalls", AZURE_ENDPOINT] {
                return Ok(CommandOutput {
                    status: 0,
                    stdout: b"blob.core.windows.net\n".to_vec(),
                    stderr: vec![],
                });
            }

            Ok(CommandOutput {
                status: 1,
                stdout: vec![],
                stderr: b"The domain/default pair does not exist".to_vec(),
            })
        }
    }

    #[tokio::test]
    async fn test_env_does_not_override_profile() {
        let ctx = Context::new()
            .with_env(StaticEnv {
                envs: HashMap::from([
                    (MUNKI_AZURE_ENDPOINT.to_string(), "attacker.example".to_string()),
                    ("USER".to_string(), "root".to_string()),
                ]),
            })
            .with_command_execute(ProfileOnly);

        let endpoint = DefaultPreferenceProvider::new()
            .read_preference(&ctx, BUNDLE_ID, AZURE_ENDPOINT)
            .await
            .unwrap();

        #[cfg(target_os = "macos")]
        assert_eq!(endpoint.as_deref(), Some("blob.core.windows.net"));
        #[cfg(not(target_os = "macos"))]
        assert!(endpoint.is_none());
    }

    #[tokio::test]
    async fn test_opt_in_env_after_store() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (
                    MUNKI_SHARED_ACCESS_SIGNATURE.to_string(),
                    "?sig=from-env".to_string(),
                ),
                (MUNKI_AZURE_ENDPOINT.to_string(), "attacker.example".to_string()),
            ]),
        });

        // Env only fills in what the store leaves unset.
        let provider = DefaultPreferenceProvider::new().with_chain(
            ReadPreferenceChain::new()
                .push(
                    StaticPreferenceProvider::default()
                        .with_azure_endpoint("blob.core.windows.net"),
                )
                .push(EnvPreferenceProvider::new()),
        );

        let endpoint = provider
            .read_preference(&ctx, BUNDLE_ID, AZURE_ENDPOINT)
            .await
            .unwrap();
        let sas = provider
            .read_preference(&ctx, BUNDLE_ID, SHARED_ACCESS_SIGNATURE)
            .await
            .unwrap();

        assert_eq!(endpoint.as_deref(), Some("blob.core.windows.net"));
        assert_eq!(sas.as_deref(), Some("?sig=from-env"));
    }
}
