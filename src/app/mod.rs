// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the in-memory document model, the language watcher,
//! and the interface localization, and binds them to the Iced runtime. The
//! update loop doubles as the host's notification delivery point: mutations
//! performed while handling a message are drained at the end of the same
//! cycle, which keeps the "mutate, then get notified" ordering of a real
//! page environment.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::direction::Direction;
use crate::i18n::fluent::I18n;
use crate::layout;
use crate::page::{MemoryPage, PageSurface, LANG_ATTR};
use crate::watcher::LanguageWatcher;
use iced::{window, Element, Task};

/// Root Iced application state bridging the document model, the watcher,
/// and interface localization.
pub struct App {
    pub i18n: I18n,
    config: Config,
    page: MemoryPage,
    watcher: LanguageWatcher,
    direction: Direction,
    tag_input: String,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(480.0, 360.0)),
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
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(Config::default(), None)
    }
}

impl App {
    /// Initializes application state from persisted configuration and the
    /// CLI flags received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            Config::default()
        });
        (Self::from_parts(config, flags.lang), Task::none())
    }

    /// Builds the application around a fresh document model.
    ///
    /// The watcher is installed before the model signals readiness, so
    /// startup exercises the deferred cold-start path the same way a host
    /// page would: install, ready signal, first evaluation.
    fn from_parts(config: Config, cli_lang: Option<String>) -> Self {
        let i18n = I18n::new(cli_lang.clone(), &config);
        let engine = config.layout_engine();

        let mut page = MemoryPage::loading();
        page.register_stylesheet(&engine.stylesheets().rtl);
        page.register_stylesheet(&engine.stylesheets().ltr);
        page.set_attribute(LANG_ATTR, &initial_language(cli_lang, &config));

        let mut watcher = LanguageWatcher::new(engine);
        watcher.install(&mut page);
        page.mark_ready();
        let direction = watcher.pump(&mut page).unwrap_or_default();

        Self {
            i18n,
            config,
            page,
            watcher,
            direction,
            tag_input: String::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale.clone());
                self.config.language = Some(locale.to_string());
                if let Err(err) = config::save(&self.config) {
                    eprintln!("Failed to save configuration: {err}");
                }
                layout::change_language(&mut self.page, &locale.to_string());
            }
            Message::TagInputChanged(value) => {
                self.tag_input = value;
            }
            Message::TagSubmitted => {
                let tag = self.tag_input.trim().to_string();
                if !tag.is_empty() {
                    layout::change_language(&mut self.page, &tag);
                }
            }
            Message::ForceReevaluate => {
                self.direction = self.watcher.engine().detect_and_apply(&mut self.page);
            }
        }

        // Host delivery point: drain the notification batch queued by this
        // cycle's mutations.
        if let Some(direction) = self.watcher.pump(&mut self.page) {
            self.direction = direction;
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Direction of the most recent layout application.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Initial language declaration for the document model: CLI flag, then
/// config file, then OS locale, then the built-in default.
fn initial_language(cli_lang: Option<String>, config: &Config) -> String {
    cli_lang
        .or_else(|| config.language.clone())
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| layout::DEFAULT_LANGUAGE.to_string())
}
