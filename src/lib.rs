// SPDX-License-Identifier: MPL-2.0
//! `iconforge` is an AI icon generator built with the Iced GUI framework.
//!
//! It turns a natural-language description plus a visual style preset into a
//! generation request for a remote image service, keeps a bounded persisted
//! history of results, and offers background removal and PNG export.

#![doc(html_root_url = "https://docs.rs/iconforge/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod media;
pub mod prompt;
pub mod styles;
pub mod ui;
