// SPDX-License-Identifier: MPL-2.0
//! `dirsync` keeps a document's layout direction in sync with its declared
//! language.
//!
//! The crate watches a page-level language declaration (e.g. `lang="ar-SA"`),
//! classifies the primary subtag as right-to-left or left-to-right, and
//! mutates a small set of observable page-state flags accordingly: the
//! direction attribute, two direction-specific stylesheet toggles, and a
//! mutually exclusive marker class on the content container.
//!
//! The layout logic is written against the [`page::PageSurface`] trait so it
//! can be exercised without a real rendering environment; the bundled binary
//! binds it to an [`iced`] application with a live, direction-aware preview.

#![doc(html_root_url = "https://docs.rs/dirsync/0.2.0")]

pub mod app;
pub mod config;
pub mod direction;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod page;
pub mod watcher;

pub use direction::{is_rtl, Direction};
pub use layout::{change_language, LayoutEngine, StylesheetIds};
pub use page::{MemoryPage, PageSurface};
pub use watcher::LanguageWatcher;
