// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All async work (remote generation, background removal, dialogs) flows
//! through `Task::perform` and comes back as a result-carrying message; the
//! handlers here are the only place that mutates application state.

use super::{App, CurrentIcon, Message, PendingGeneration, SPINNER_SPEED};
use crate::error::{Error, GenerationError};
use crate::history::GeneratedIcon;
use crate::media::{self, ImagePayload};
use crate::prompt;
use crate::styles::IconStyle;
use crate::ui::history_strip;
use crate::ui::prompt_panel;
use crate::ui::workspace;
use iced::widget::image;
use iced::Task;
use std::path::PathBuf;
use uuid::Uuid;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::PromptPanel(msg) => match app.prompt_panel.handle_message(msg) {
            prompt_panel::Effect::None => Task::none(),
            prompt_panel::Effect::Generate { prompt, style } => {
                handle_generate(app, &prompt, style)
            }
        },
        Message::GenerationCompleted(result) => handle_generation_completed(app, result),
        Message::Workspace(workspace::Message::MakeTransparent) => handle_make_transparent(app),
        Message::Workspace(workspace::Message::Export) => handle_export(app),
        Message::HistoryStrip(msg) => handle_history_strip(app, msg),
        Message::RemovalCompleted { id, result } => handle_removal_completed(app, id, result),
        Message::ExportDialogResult { id, path } => handle_export_dialog_result(app, id, path),
        Message::ClearHistoryConfirmed(confirmed) => {
            if confirmed {
                app.history.clear();
                app.current = None;
                app.removal_warning = None;
                app.rebuild_strip();
            }
            Task::none()
        }
        Message::SpinnerTick => {
            app.spinner_rotation += SPINNER_SPEED;
            if app.spinner_rotation > std::f32::consts::TAU {
                app.spinner_rotation -= std::f32::consts::TAU;
            }
            Task::none()
        }
    }
}

/// Starts a generation for a valid submit; empty prompts and in-flight
/// generations are rejected by the session machine without side effects.
fn handle_generate(app: &mut App, prompt_text: &str, style: IconStyle) -> Task<Message> {
    if !app.session.try_begin_generation(prompt_text) {
        return Task::none();
    }
    app.removal_warning = None;

    let Some(client) = app.client.clone() else {
        app.session
            .fail_generation(GenerationError::MissingApiKey.to_string());
        return Task::none();
    };

    let trimmed = prompt_text.trim().to_string();
    let composed = prompt::compose(&trimmed, style.prompt_suffix());
    app.in_flight = Some(PendingGeneration {
        prompt: trimmed,
        style,
    });

    Task::perform(
        async move { client.generate(&composed).await },
        Message::GenerationCompleted,
    )
}

fn handle_generation_completed(
    app: &mut App,
    result: Result<ImagePayload, GenerationError>,
) -> Task<Message> {
    match result {
        Ok(payload) => {
            app.session.finish_generation();
            let pending = app.in_flight.take().unwrap_or(PendingGeneration {
                prompt: String::new(),
                style: IconStyle::default(),
            });

            let icon = GeneratedIcon::new(
                payload.to_data_uri(),
                pending.prompt,
                pending.style.name().to_string(),
            );
            let handle = image::Handle::from_bytes(payload.bytes);

            app.current = Some(CurrentIcon {
                icon: icon.clone(),
                handle,
            });
            app.history.append(icon);
            app.rebuild_strip();
            Task::none()
        }
        Err(e) => {
            // Surfaced verbatim in the error banner; history stays untouched.
            app.in_flight = None;
            app.session.fail_generation(e.to_string());
            Task::none()
        }
    }
}

/// Runs the pixel scan on a blocking thread so the UI keeps rendering.
fn handle_make_transparent(app: &mut App) -> Task<Message> {
    let Some(current) = app.current.as_ref() else {
        return Task::none();
    };
    if !app.session.try_begin_removal() {
        return Task::none();
    }
    app.removal_warning = None;

    let id = current.icon.id;
    let url = current.icon.url.clone();
    let threshold = app.config.background_threshold();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                let payload = ImagePayload::from_data_uri(&url)?;
                media::remove_background::remove_background(&payload, threshold)
            })
            .await
            .map_err(|e| Error::Image(e.to_string()))?
        },
        move |result| Message::RemovalCompleted { id, result },
    )
}

fn handle_removal_completed(
    app: &mut App,
    id: Uuid,
    result: Result<ImagePayload, Error>,
) -> Task<Message> {
    app.session.finish_removal();

    match result {
        Ok(payload) => {
            // The entry may have been deleted while the removal ran.
            let Some(mut icon) = app.history.get(id).cloned() else {
                return Task::none();
            };
            icon.url = payload.to_data_uri();
            app.history.update(&icon);

            if app.current.as_ref().is_some_and(|c| c.icon.id == id) {
                app.current = Some(CurrentIcon {
                    icon,
                    handle: image::Handle::from_bytes(payload.bytes),
                });
            }
            app.rebuild_strip();
            Task::none()
        }
        Err(e) => {
            eprintln!("Background removal failed: {e}");
            app.removal_warning = Some(format!("Background removal failed: {e}"));
            Task::none()
        }
    }
}

/// Opens the save dialog for the current icon.
fn handle_export(app: &mut App) -> Task<Message> {
    let Some(current) = app.current.as_ref() else {
        return Task::none();
    };

    let payload = match ImagePayload::from_data_uri(&current.icon.url) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Cannot export current icon: {e}");
            return Task::none();
        }
    };

    let id = current.icon.id;
    let extension = media::export::extension_for_mime(&payload.mime);
    let filename = media::export::default_filename(&id.to_string(), extension);
    let filter_name = match extension {
        "jpg" => "JPEG Image",
        "webp" => "WebP Image",
        _ => "PNG Image",
    };

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter(filter_name, &[extension])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::ExportDialogResult { id, path },
    )
}

fn handle_export_dialog_result(
    app: &mut App,
    id: Uuid,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    // Re-resolve by id: the stage may have changed while the dialog was open.
    let url = app
        .history
        .get(id)
        .map(|icon| icon.url.clone())
        .or_else(|| {
            app.current
                .as_ref()
                .filter(|c| c.icon.id == id)
                .map(|c| c.icon.url.clone())
        });
    let Some(url) = url else {
        return Task::none();
    };

    let written = ImagePayload::from_data_uri(&url).and_then(|payload| {
        media::export::validate_payload(&payload)?;
        media::export::write_payload(&payload, &path)
    });
    if let Err(e) = written {
        eprintln!("Failed to export icon: {e}");
    }
    Task::none()
}

fn handle_history_strip(app: &mut App, message: history_strip::Message) -> Task<Message> {
    match message {
        history_strip::Message::Select(id) => {
            app.removal_warning = None;
            if let Some(icon) = app.history.get(id).cloned() {
                match ImagePayload::from_data_uri(&icon.url) {
                    Ok(payload) => {
                        app.current = Some(CurrentIcon {
                            icon,
                            handle: image::Handle::from_bytes(payload.bytes),
                        });
                    }
                    Err(e) => eprintln!("Cannot display history entry {id}: {e}"),
                }
            }
            Task::none()
        }
        history_strip::Message::Delete(id) => {
            app.history.remove(id);
            if app.current.as_ref().is_some_and(|c| c.icon.id == id) {
                app.current = None;
                app.removal_warning = None;
            }
            app.rebuild_strip();
            Task::none()
        }
        history_strip::Message::ClearAll => Task::perform(
            async {
                let choice = rfd::AsyncMessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("Clear history")
                    .set_description("Remove all generated icons from the library?")
                    .set_buttons(rfd::MessageButtons::YesNo)
                    .show()
                    .await;
                matches!(choice, rfd::MessageDialogResult::Yes)
            },
            Message::ClearHistoryConfirmed,
        ),
    }
}
