#![doc = include_str!("../README.md")]
pub mod error;
mod traits;
mod types;

pub use crate::error::{BoxError, Error, Result};
pub use crate::traits::{HttpClient, JsonClient};
pub use crate::types::{Header, JsonRequest};
pub use http;

#[cfg(test)]
mod tests;
