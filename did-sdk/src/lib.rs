#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
pub mod client;
pub mod config;
mod error;
pub mod types;
pub mod utils;

pub use client::{DidClient, DidClientBuilder};
pub use config::Config;
pub use did_sdk_http as http;
#[cfg_attr(docsrs, doc(cfg(feature = "default-client")))]
#[cfg(feature = "default-client")]
pub use did_sdk_http_client::reqwest as http_client;
pub use error::{Error, Result};
