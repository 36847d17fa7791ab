// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the panes.
//!
//! The `App` struct wires together the domains (prompt panel, generation
//! client, history store, workspace) and translates messages into side
//! effects like remote calls, background removal, and history persistence.
//! Policy decisions (window sizing, gating, the removal-warning surface) are
//! kept close to the update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod session;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::generation::GenerationClient;
use crate::history::{FileStorage, GeneratedIcon, HistoryStore};
use crate::media::ImagePayload;
use crate::styles::IconStyle;
use crate::ui::history_strip;
use crate::ui::prompt_panel;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use session::Session;
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 860;

/// Spinner advance per tick, in radians.
pub(crate) const SPINNER_SPEED: f32 = 0.1;

/// The icon currently on stage, together with its decoded display handle.
#[derive(Debug, Clone)]
pub struct CurrentIcon {
    pub icon: GeneratedIcon,
    pub handle: image::Handle,
}

/// The request that produced an in-flight generation, kept so the result can
/// be recorded with its originating prompt and style.
#[derive(Debug, Clone)]
pub(crate) struct PendingGeneration {
    pub prompt: String,
    pub style: IconStyle,
}

/// Root Iced application state bridging UI components, the generation client,
/// and the persisted history.
pub struct App {
    pub(crate) config: config::Config,
    /// `None` when no API key was present at startup; the first generate
    /// attempt then surfaces the missing credential in the error banner.
    pub(crate) client: Option<GenerationClient>,
    pub(crate) session: Session,
    pub(crate) prompt_panel: prompt_panel::State,
    pub(crate) history: HistoryStore<FileStorage>,
    pub(crate) current: Option<CurrentIcon>,
    pub(crate) strip_entries: Vec<history_strip::Entry>,
    /// Warning from a failed background removal, cleared by the next action.
    pub(crate) removal_warning: Option<String>,
    pub(crate) in_flight: Option<PendingGeneration>,
    pub(crate) spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", self.session.state())
            .field("history_len", &self.history.len())
            .field("has_current", &self.current.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: path overrides, config, credential,
    /// and the persisted history.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let config = config::load().unwrap_or_default();

        let client = match GenerationClient::from_env(config.model(), config.base_url()) {
            Ok(client) => Some(client),
            Err(e) => {
                eprintln!("Generation client unavailable: {e}");
                None
            }
        };

        let storage = paths::get_app_data_dir().map_or_else(
            || FileStorage::new(std::path::PathBuf::from("icon_history.json")),
            |dir| FileStorage::in_dir(&dir),
        );
        let history = HistoryStore::load(storage);

        let mut app = App {
            prompt_panel: prompt_panel::State::new(config.default_style()),
            config,
            client,
            session: Session::default(),
            history,
            current: None,
            strip_entries: Vec::new(),
            removal_warning: None,
            in_flight: None,
            spinner_rotation: 0.0,
        };
        app.rebuild_strip();

        (app, Task::none())
    }

    fn title(&self) -> String {
        "IconForge".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Ticks only while something animates; otherwise no subscription at all.
    fn subscription(&self) -> Subscription<Message> {
        if self.session.is_busy() {
            iced::time::every(std::time::Duration::from_millis(16))
                .map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    /// Rebuilds the thumbnail handles after any history mutation.
    ///
    /// Entries whose payload no longer parses are skipped rather than
    /// aborting the whole strip.
    pub(crate) fn rebuild_strip(&mut self) {
        self.strip_entries = self
            .history
            .icons()
            .iter()
            .filter_map(|icon| match ImagePayload::from_data_uri(&icon.url) {
                Ok(payload) => Some(history_strip::Entry {
                    id: icon.id,
                    handle: image::Handle::from_bytes(payload.bytes),
                }),
                Err(e) => {
                    eprintln!("Skipping undecodable history entry {}: {e}", icon.id);
                    None
                }
            })
            .collect();
    }
}
