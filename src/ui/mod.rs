// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Panes
//!
//! - [`prompt_panel`] - Sidebar with prompt input, style catalog, generate action
//! - [`workspace`] - Current icon stage with post-processing and export
//! - [`history_strip`] - Bounded thumbnail strip of past generations
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error banner, checkerboard)
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod history_strip;
pub mod prompt_panel;
pub mod styles;
pub mod widgets;
pub mod workspace;
