// SPDX-License-Identifier: MPL-2.0
//! Image payload handling: data-URI codec, background removal, export.

pub mod data_uri;
pub mod export;
pub mod remove_background;

pub use data_uri::ImagePayload;
