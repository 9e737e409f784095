// SPDX-License-Identifier: MPL-2.0
//! Host document boundary.
//!
//! The layout logic never talks to a real rendering surface directly; it is
//! written against [`PageSurface`], a narrow view of the host document:
//! attributes on the root structural element, a disabled flag per named
//! stylesheet resource, marker classes on the root content container, and a
//! change-notification queue scoped to one observed attribute.
//!
//! [`MemoryPage`] is the in-memory implementation used by the test suite and
//! as the document model behind the GUI preview. All operations are
//! infallible; a missing stylesheet is a no-op, not an error.

mod memory;

pub use memory::{MemoryPage, Stylesheet};

/// Identifier of the root structural element carrying the language and
/// direction attributes.
pub const ROOT_ELEMENT: &str = "root";

/// Attribute holding the page's language declaration.
pub const LANG_ATTR: &str = "lang";

/// Attribute holding the page's text direction (`"ltr"` or `"rtl"`).
pub const DIR_ATTR: &str = "dir";

/// Marker class present on the content container while RTL layout is active.
pub const RTL_MARKER_CLASS: &str = "rtl-layout";

/// Marker class present on the content container while LTR layout is active.
pub const LTR_MARKER_CLASS: &str = "ltr-layout";

/// A single attribute mutation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
    /// Identifier of the element the mutation happened on.
    pub subject: String,
    /// Name of the attribute that changed.
    pub attribute: String,
}

/// Notifications delivered by the host between event-loop cycles.
///
/// Records for the same subject are delivered in mutation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// One-shot signal that the page structure has finished loading.
    Ready,
    /// An observed attribute was written.
    AttributeChanged(AttributeChange),
}

/// Mutable view of the host document consumed by the layout logic.
pub trait PageSurface {
    /// Reads an attribute of the root structural element.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Writes an attribute of the root structural element.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Returns the disabled flag of a stylesheet resource, or `None` when no
    /// resource with that identifier is registered.
    fn stylesheet_disabled(&self, id: &str) -> Option<bool>;

    /// Sets the disabled flag of a stylesheet resource. No-op when the
    /// resource is absent.
    fn set_stylesheet_disabled(&mut self, id: &str, disabled: bool);

    /// Adds a marker class to the root content container.
    fn add_class(&mut self, name: &str);

    /// Removes a marker class from the root content container.
    fn remove_class(&mut self, name: &str);

    /// Returns whether the content container carries the class.
    fn has_class(&self, name: &str) -> bool;

    /// Returns whether the page structure is ready for subscriptions.
    fn is_ready(&self) -> bool;

    /// Scopes change delivery to mutations of `attribute` on the root
    /// element. Unobserved attributes produce no change records.
    fn observe_attribute(&mut self, attribute: &str);

    /// Drains the pending notification batch in mutation order.
    fn take_events(&mut self) -> Vec<PageEvent>;
}
