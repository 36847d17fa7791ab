// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.

pub mod checkerboard;
pub mod error_banner;
