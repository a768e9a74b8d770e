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
use reqmw_core::{Context, Error, ReadPreference, Result};

use crate::constants::{DEFAULTS_PROGRAM, MANAGED_PREFERENCES_DIR, SYSTEM_PREFERENCES_DIR};

/// DefaultsPreferenceProvider reads preferences through the macOS `defaults` tool.
///
/// By default the domain is passed to `defaults` as-is, which resolves it the
/// way the current user sees it. [`Self::with_directory`] pins the lookup to a
/// single plist, for example the one installed by a configuration profile
/// under `/Library/Managed Preferences`. [`Self::managed_user`] reads the
/// values a profile forces for the current user only, found under
/// `/Library/Managed Preferences/<user>`.
#[derive(Clone, Debug)]
pub struct DefaultsPreferenceProvider {
    program: String,
    location: Location,
}

#[derive(Clone, Debug)]
enum Location {
    Domain,
    Directory(String),
    UserDirectory(String),
}

impl Default for DefaultsPreferenceProvider {
    fn default() -> Self {
        Self {
            program: DEFAULTS_PROGRAM.to_string(),
            location: Location::Domain,
        }
    }
}

impl DefaultsPreferenceProvider {
    /// Create a provider resolving the domain like the current user does.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider for values forced by configuration profiles on the whole machine.
    pub fn managed() -> Self {
        Self::new().with_directory(MANAGED_PREFERENCES_DIR)
    }

    /// Create a provider for values forced by configuration profiles for the current user.
    ///
    /// The user is taken from `USER`; without it the provider holds no values.
    pub fn managed_user() -> Self {
        Self {
            location: Location::UserDirectory(MANAGED_PREFERENCES_DIR.to_string()),
            ..Self::default()
        }
    }

    /// Create a provider for the machine wide preferences file.
    pub fn system() -> Self {
        Self::new().with_directory(SYSTEM_PREFERENCES_DIR)
    }

    /// Read `<directory>/<domain>.plist` instead of resolving the domain.
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.location = Location::Directory(directory.into());
        self
    }

    /// Use another `defaults` binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn target(&self, ctx: &Context, domain: &str) -> Option<String> {
        match &self.location {
            Location::Domain => Some(domain.to_string()),
            Location::Directory(dir) => Some(format!("{}/{}", dir.trim_end_matches('/'), domain)),
            Location::UserDirectory(dir) => {
                let user = ctx.env_var("USER").filter(|v| !v.is_empty())?;
                Some(format!("{}/{}/{}", dir.trim_end_matches('/'), user, domain))
            }
        }
    }
}

#[async_trait]
impl ReadPreference for DefaultsPreferenceProvider {
    async fn read_preference(
        &self,
        ctx: &Context,
        domain: &str,
        key: &str,
    ) -> Result<Option<String>> {
        let Some(target) = self.target(ctx, domain) else {
            log::debug!("no user to resolve {domain} for, skip {key}");
            return Ok(None);
        };
        let output = ctx
            .command_execute(&self.program, &["read", target.as_str(), key])
            .await?;

        if !output.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // `defaults` reports both a missing file and a missing key this way.
            if stderr.contains("does not exist") {
                log::debug!("preference {key} is not set in {target}");
                return Ok(None);
            }

            return Err(Error::preference_unavailable(format!(
                "{} read {target} {key} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let mut value = String::from_utf8(output.stdout).map_err(|e| {
            Error::preference_invalid(format!("preference {key} in {target} is not utf-8"))
                .with_source(e)
        })?;
        if value.ends_with('\n') {
            value.pop();
        }

        Ok(Some(value))
    }
}
