// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application's own interface.
//!
//! This module localizes the GUI chrome (labels, status lines) using the
//! Fluent localization system. It handles language detection, translation
//! loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation bundles, including RTL locales
//! - Runtime language switching
//! - Fallback chain: exact locale → primary subtag → English
//!
//! Note that UI translation is separate from direction classification: the
//! watched document may declare any language tag, whether or not the GUI
//! ships a translation for it.

pub mod fluent;
