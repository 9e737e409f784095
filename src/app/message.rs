// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A shipped interface locale was picked. Switches the interface
    /// language and writes the locale into the document's language
    /// declaration; layout follows through the watcher.
    LanguageSelected(LanguageIdentifier),
    /// The free-form language-tag input changed.
    TagInputChanged(String),
    /// The free-form tag was submitted as the new language declaration.
    TagSubmitted,
    /// Re-evaluate the current declaration without changing it.
    ForceReevaluate,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fa`, `ar-SA`).
    pub lang: Option<String>,
}
