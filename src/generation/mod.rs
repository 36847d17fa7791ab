// SPDX-License-Identifier: MPL-2.0
//! Client for the remote generative image endpoint.
//!
//! One request, one image, no retries: the caller treats any rejection as
//! terminal for that attempt.

mod client;
pub mod wire;

pub use client::{GenerationClient, DEFAULT_BASE_URL, DEFAULT_MODEL, ENV_API_KEY};
