// SPDX-License-Identifier: MPL-2.0
//! In-memory document model.

use super::{AttributeChange, PageEvent, PageSurface, LANG_ATTR, ROOT_ELEMENT};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// A named stylesheet resource with its disabled flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub id: String,
    pub disabled: bool,
}

/// In-memory stand-in for the host document.
///
/// Mutations of the observed attribute are queued as [`PageEvent`]s and
/// delivered when the host drains the queue, mirroring the deferred
/// delivery of real change notifications between event-loop cycles.
#[derive(Debug, Default)]
pub struct MemoryPage {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    stylesheets: Vec<Stylesheet>,
    observed: Option<String>,
    events: VecDeque<PageEvent>,
    ready: bool,
}

impl MemoryPage {
    /// Creates a page whose structure is already ready.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ready: true,
            ..Self::default()
        }
    }

    /// Creates a page whose structure has not finished loading yet.
    ///
    /// Call [`MemoryPage::mark_ready`] to fire the one-shot ready signal.
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    /// Creates a ready page with an initial language declaration.
    ///
    /// The declaration is part of the initial state and does not queue a
    /// change record.
    #[must_use]
    pub fn with_language(tag: &str) -> Self {
        let mut page = Self::new();
        page.attributes
            .insert(LANG_ATTR.to_string(), tag.to_string());
        page
    }

    /// Registers a stylesheet resource, initially enabled.
    pub fn register_stylesheet(&mut self, id: &str) {
        self.stylesheets.push(Stylesheet {
            id: id.to_string(),
            disabled: false,
        });
    }

    /// Snapshot of the registered stylesheets.
    #[must_use]
    pub fn stylesheets(&self) -> &[Stylesheet] {
        &self.stylesheets
    }

    /// Classes currently present on the content container, in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Marks the structure ready and queues the one-shot ready signal.
    ///
    /// Subsequent calls are no-ops; the signal fires at most once.
    pub fn mark_ready(&mut self) {
        if !self.ready {
            self.ready = true;
            self.events.push_back(PageEvent::Ready);
        }
    }
}

impl PageSurface for MemoryPage {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
        // Like a real mutation observer, a write is recorded even when the
        // value did not change.
        if self.observed.as_deref() == Some(name) {
            self.events
                .push_back(PageEvent::AttributeChanged(AttributeChange {
                    subject: ROOT_ELEMENT.to_string(),
                    attribute: name.to_string(),
                }));
        }
    }

    fn stylesheet_disabled(&self, id: &str) -> Option<bool> {
        self.stylesheets
            .iter()
            .find(|sheet| sheet.id == id)
            .map(|sheet| sheet.disabled)
    }

    fn set_stylesheet_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(sheet) = self.stylesheets.iter_mut().find(|sheet| sheet.id == id) {
            sheet.disabled = disabled;
        }
    }

    fn add_class(&mut self, name: &str) {
        self.classes.insert(name.to_string());
    }

    fn remove_class(&mut self, name: &str) {
        self.classes.remove(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn observe_attribute(&mut self, attribute: &str) {
        self.observed = Some(attribute.to_string());
    }

    fn take_events(&mut self) -> Vec<PageEvent> {
        self.events.drain(..).collect()
    }
}
