// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale every installation can fall back to.
const FALLBACK_LOCALE: &str = "en";

/// Loaded Fluent bundles plus the currently selected locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                eprintln!("Skipping translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            match FluentResource::try_new(source) {
                Ok(resource) => {
                    let mut bundle = FluentBundle::new(vec![locale.clone()]);
                    if bundle.add_resource(resource).is_err() {
                        eprintln!("Skipping translation file with duplicate messages: {filename}");
                        continue;
                    }
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                Err(_) => {
                    eprintln!("Skipping unparsable translation file: {filename}");
                }
            }
        }

        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| fallback_locale());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// The locale currently used for interface strings.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the interface locale; unavailable locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Looks a message up in the current locale, then in a sibling locale
    /// sharing the primary subtag, then in English. Returns the key itself
    /// when every lookup fails (fail-open, never panics).
    pub fn tr(&self, key: &str) -> String {
        if let Some(value) = self.format(&self.current_locale, key) {
            return value;
        }
        if let Some(sibling) = self
            .available_locales
            .iter()
            .find(|locale| locale.language == self.current_locale.language)
        {
            if let Some(value) = self.format(sibling, key) {
                return value;
            }
        }
        if let Some(value) = self.format(&fallback_locale(), key) {
            return value;
        }
        key.to_string()
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

fn fallback_locale() -> LanguageIdentifier {
    FALLBACK_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

/// Picks the interface locale: CLI flag, then config file, then OS locale.
///
/// A candidate matches when it is available exactly or when an available
/// locale shares its primary subtag (so an OS locale of `ar-EG` selects the
/// shipped `ar` bundle).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = cli_lang
        .into_iter()
        .chain(config.language.clone())
        .chain(sys_locale::get_locale());

    for candidate in candidates {
        let Ok(wanted) = candidate.parse::<LanguageIdentifier>() else {
            continue;
        };
        if let Some(found) = available.iter().find(|locale| **locale == wanted) {
            return Some(found.clone());
        }
        if let Some(found) = available
            .iter()
            .find(|locale| locale.language == wanted.language)
        {
            return Some(found.clone());
        }
    }

    None
}
