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

//! Apply the SAS middleware to request options read from stdin.
//!
//! Each input line is one JSON object with at least a `url` field; the
//! rewritten object is printed on its own line.
//!
//! ```shell
//! sudo defaults write /Library/Preferences/ManagedInstalls SharedAccessSignature '?sp=r'
//! echo '{"url":"https://acct.blob.core.windows.net/munki/catalogs/all"}' \
//!     | cargo run --example azure_sas
//! ```

use anyhow::Result;
use reqmw::process_request_options_json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Preferences are resolved once, before the first request.
    let mw = reqmw::azure::default_middleware().await?;
    log::info!("loaded {mw:?}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let output = process_request_options_json(&mw, &line)?;
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;

    Ok(())
}
