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

use crate::{Error, ProcessRequestOptions, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// RequestOptions describes one outgoing request of the package agent.
///
/// Only `url` is understood by reqmw. Every other field belongs to the host
/// (destination file, extra headers, resume flags and so on) and is carried
/// through in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// The URL the agent is about to fetch.
    pub url: String,
    /// Host owned fields, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestOptions {
    /// Create request options for the given url without any host fields.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extra: Map::new(),
        }
    }

    /// Attach a host owned field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Get a host owned field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Decode request options from a JSON object.
    ///
    /// The object must carry a string `url`, anything else is kept as-is.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        match value.get("url") {
            Some(Value::String(_)) => {}
            Some(_) => {
                return Err(Error::request_invalid(
                    "request options field url is not a string",
                ))
            }
            None => {
                return Err(Error::request_invalid(
                    "request options have no url field",
                ))
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Encode request options as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Run a hook over request options handed over as a JSON object.
///
/// Hosts that cannot share Rust types pass the options mapping serialized;
/// the hook sees the decoded [`RequestOptions`] and the result is encoded back.
pub fn process_request_options_json(
    hook: &dyn ProcessRequestOptions,
    input: &str,
) -> Result<String> {
    let options = RequestOptions::from_json(input)?;
    hook.process_request_options(options).to_json()
}
