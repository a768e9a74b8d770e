//! Core components for request option middleware.
//!
//! This crate provides the foundational types and traits for the reqmw ecosystem.
//! A package agent calls a middleware before each network request; the
//! middleware may rewrite the request options (most often the URL) based on
//! values it resolved once from the host's preference store.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for environment access and command execution
//! - **Traits**: Abstract interfaces for preference lookup (`ReadPreference`) and request rewriting (`ProcessRequestOptions`)
//! - **RequestOptions**: The options mapping exchanged with the host, with a typed `url` and pass-through host fields
//!
//! ## Example
//!
//! ```
//! use reqmw_core::{ProcessRequestOptions, RequestOptions};
//!
//! #[derive(Debug)]
//! struct AddToken(String);
//!
//! impl ProcessRequestOptions for AddToken {
//!     fn process_request_options(&self, mut options: RequestOptions) -> RequestOptions {
//!         options.url.push_str(&self.0);
//!         options
//!     }
//! }
//!
//! let hook = AddToken("?token=abc".to_string());
//! let options = hook.process_request_options(RequestOptions::new("https://example.com/a"));
//! assert_eq!(options.url, "https://example.com/a?token=abc");
//! ```
//!
//! ## Traits
//!
//! - [`Env`]: For environment variable access
//! - [`CommandExecute`]: For running external tools such as `defaults`
//! - [`ReadPreference`]: For reading values out of a preference store
//! - [`ProcessRequestOptions`]: The hook the host agent calls per request

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, NoopCommandExecute, NoopEnv};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod command;
pub use command::{CommandExecute, CommandOutput};

mod api;
pub use api::{ProcessRequestOptions, ReadPreference};
mod chain;
pub use chain::ReadPreferenceChain;
mod request;
pub use request::{process_request_options_json, RequestOptions};
