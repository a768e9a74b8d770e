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

//! Preference domain, keys and well known locations.

// Preference domain the package agent reads its settings from.
pub const BUNDLE_ID: &str = "ManagedInstalls";

// Preference keys
pub const SHARED_ACCESS_SIGNATURE: &str = "SharedAccessSignature";
pub const AZURE_ENDPOINT: &str = "AzureEndpoint";

pub const DEFAULT_AZURE_ENDPOINT: &str = "blob.core.windows.net";

// Env values used to override preferences
pub const MUNKI_SHARED_ACCESS_SIGNATURE: &str = "MUNKI_SHARED_ACCESS_SIGNATURE";
pub const MUNKI_AZURE_ENDPOINT: &str = "MUNKI_AZURE_ENDPOINT";

// macOS preference locations
pub const DEFAULTS_PROGRAM: &str = "/usr/bin/defaults";
pub const MANAGED_PREFERENCES_DIR: &str = "/Library/Managed Preferences";
pub const SYSTEM_PREFERENCES_DIR: &str = "/Library/Preferences";
