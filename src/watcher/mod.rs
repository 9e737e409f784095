// SPDX-License-Identifier: MPL-2.0
//! Change watcher.
//!
//! [`LanguageWatcher`] owns the subscription to the page's language
//! declaration and is the sole trigger path for layout changes. Cold start
//! has two mutually exclusive paths: when the page structure is already
//! ready, [`LanguageWatcher::install`] subscribes and evaluates immediately;
//! otherwise the one-shot ready signal, observed during
//! [`LanguageWatcher::pump`], performs the same steps exactly once.
//!
//! The subscription lives for the lifetime of the page; there is no
//! teardown.

use crate::direction::Direction;
use crate::layout::LayoutEngine;
use crate::page::{PageEvent, PageSurface, LANG_ATTR, ROOT_ELEMENT};

/// Reacts to changes of the language declaration.
#[derive(Debug, Default)]
pub struct LanguageWatcher {
    engine: LayoutEngine,
    subscribed: bool,
}

impl LanguageWatcher {
    /// Creates a watcher applying layout through the given engine.
    #[must_use]
    pub fn new(engine: LayoutEngine) -> Self {
        Self {
            engine,
            subscribed: false,
        }
    }

    /// The layout engine backing this watcher.
    #[must_use]
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Whether the attribute subscription has been established.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Cold start. Subscribes and evaluates the current declaration when the
    /// page structure is ready; otherwise waits for the ready signal to be
    /// delivered through [`LanguageWatcher::pump`].
    pub fn install(&mut self, page: &mut dyn PageSurface) {
        if !self.subscribed && page.is_ready() {
            self.subscribe(page);
        }
    }

    /// Drains the pending notification batch and re-runs classification and
    /// application for every change of the language declaration on the root
    /// element. Returns the direction of the last evaluation, if any.
    ///
    /// Each matching record in a batch is processed; no de-duplication is
    /// performed, which is harmless because application is idempotent.
    pub fn pump(&mut self, page: &mut dyn PageSurface) -> Option<Direction> {
        let mut last = None;
        for event in page.take_events() {
            match event {
                PageEvent::Ready if !self.subscribed => {
                    last = Some(self.subscribe(page));
                }
                PageEvent::Ready => {}
                PageEvent::AttributeChanged(change) => {
                    if self.subscribed
                        && change.subject == ROOT_ELEMENT
                        && change.attribute == LANG_ATTR
                    {
                        last = Some(self.engine.detect_and_apply(page));
                    }
                }
            }
        }
        last
    }

    fn subscribe(&mut self, page: &mut dyn PageSurface) -> Direction {
        page.observe_attribute(LANG_ATTR);
        self.subscribed = true;
        self.engine.detect_and_apply(page)
    }
}
