// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, GenerationError};
use crate::media::ImagePayload;
use crate::ui::history_strip;
use crate::ui::prompt_panel;
use crate::ui::workspace;
use std::path::PathBuf;
use uuid::Uuid;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    PromptPanel(prompt_panel::Message),
    Workspace(workspace::Message),
    HistoryStrip(history_strip::Message),
    /// Result of the remote generation call.
    GenerationCompleted(Result<ImagePayload, GenerationError>),
    /// Result of background removal for the icon with the given id.
    RemovalCompleted {
        id: Uuid,
        result: Result<ImagePayload, Error>,
    },
    /// Result from the export save dialog.
    ExportDialogResult { id: Uuid, path: Option<PathBuf> },
    /// Result from the clear-history confirmation dialog.
    ClearHistoryConfirmed(bool),
    /// Periodic tick driving the busy spinner.
    SpinnerTick,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for the history document).
    /// Takes precedence over `ICONFORGE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICONFORGE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
