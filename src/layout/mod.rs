// SPDX-License-Identifier: MPL-2.0
//! Layout application.
//!
//! [`LayoutEngine`] turns a direction decision into page-state mutations:
//! the direction attribute, the two direction-specific stylesheet toggles,
//! and the mutually exclusive marker class on the content container. Both
//! application procedures are idempotent (repeated calls converge to the
//! same observable state) and infallible; a stylesheet that is not
//! registered is silently skipped.

use crate::direction::{self, Direction};
use crate::page::{PageSurface, DIR_ATTR, LANG_ATTR, LTR_MARKER_CLASS, RTL_MARKER_CLASS};

/// Fallback language declaration when the page carries none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Identifiers of the two direction-specific stylesheet resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetIds {
    /// Stylesheet enabled while RTL layout is active.
    pub rtl: String,
    /// Stylesheet enabled while LTR layout is active.
    pub ltr: String,
}

impl Default for StylesheetIds {
    fn default() -> Self {
        Self {
            rtl: "rtl-styles".to_string(),
            ltr: "ltr-styles".to_string(),
        }
    }
}

/// Applies direction decisions to a page surface.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    stylesheets: StylesheetIds,
    extra_rtl_codes: Vec<String>,
}

impl LayoutEngine {
    /// Creates an engine using the given stylesheet identifiers.
    #[must_use]
    pub fn new(stylesheets: StylesheetIds) -> Self {
        Self {
            stylesheets,
            extra_rtl_codes: Vec::new(),
        }
    }

    /// Extends the RTL code set with additional primary subtags.
    ///
    /// Entries are normalized the same way as classified tags (lowercase,
    /// region-stripped), so `"Syr"` and `"syr-SY"` both register `"syr"`.
    #[must_use]
    pub fn with_extra_rtl_codes(mut self, codes: &[String]) -> Self {
        self.extra_rtl_codes = codes
            .iter()
            .map(|code| direction::primary_subtag(code))
            .filter(|code| !code.is_empty())
            .collect();
        self
    }

    /// The stylesheet identifiers this engine toggles.
    #[must_use]
    pub fn stylesheets(&self) -> &StylesheetIds {
        &self.stylesheets
    }

    /// Classifies a language declaration against the built-in RTL set plus
    /// any configured extra codes.
    #[must_use]
    pub fn classify(&self, tag: Option<&str>) -> Direction {
        if direction::is_rtl(tag) {
            return Direction::Rtl;
        }
        match tag {
            Some(tag) if !tag.is_empty() => {
                let primary = direction::primary_subtag(tag);
                if self.extra_rtl_codes.contains(&primary) {
                    Direction::Rtl
                } else {
                    Direction::Ltr
                }
            }
            _ => Direction::Ltr,
        }
    }

    /// Switches the page to right-to-left layout. Idempotent.
    pub fn apply_rtl(&self, page: &mut dyn PageSurface) {
        self.apply(Direction::Rtl, page);
    }

    /// Switches the page to left-to-right layout. Idempotent.
    pub fn apply_ltr(&self, page: &mut dyn PageSurface) {
        self.apply(Direction::Ltr, page);
    }

    /// Applies a direction decision to the page.
    ///
    /// Sets the direction attribute, enables the matching stylesheet while
    /// disabling the opposite one, and swaps the marker class on the content
    /// container.
    pub fn apply(&self, direction: Direction, page: &mut dyn PageSurface) {
        page.set_attribute(DIR_ATTR, direction.as_attr());

        let (enabled, disabled, marker, opposite) = match direction {
            Direction::Rtl => (
                self.stylesheets.rtl.as_str(),
                self.stylesheets.ltr.as_str(),
                RTL_MARKER_CLASS,
                LTR_MARKER_CLASS,
            ),
            Direction::Ltr => (
                self.stylesheets.ltr.as_str(),
                self.stylesheets.rtl.as_str(),
                LTR_MARKER_CLASS,
                RTL_MARKER_CLASS,
            ),
        };

        page.set_stylesheet_disabled(enabled, false);
        page.set_stylesheet_disabled(disabled, true);

        page.remove_class(opposite);
        page.add_class(marker);

        let label = match direction {
            Direction::Rtl => "RTL",
            Direction::Ltr => "LTR",
        };
        eprintln!("Applied {label} layout");
    }

    /// Reads the current language declaration (default `"en"` when absent),
    /// classifies it, applies the result, and returns the decision.
    ///
    /// Used internally for cold start and watcher callbacks, and exposed for
    /// forced re-evaluation.
    pub fn detect_and_apply(&self, page: &mut dyn PageSurface) -> Direction {
        let declared = page
            .attribute(LANG_ATTR)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let decision = self.classify(Some(&declared));
        self.apply(decision, page);
        decision
    }
}

/// Writes a new language declaration and nothing else.
///
/// Layout is not touched here; the watcher's subscription is the sole
/// trigger path, so external writes to the declaration behave identically
/// to this entry point.
pub fn change_language(page: &mut dyn PageSurface, tag: &str) {
    page.set_attribute(LANG_ATTR, tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    fn page_with_stylesheets() -> MemoryPage {
        let mut page = MemoryPage::new();
        page.register_stylesheet("rtl-styles");
        page.register_stylesheet("ltr-styles");
        page
    }

    fn snapshot(page: &MemoryPage) -> (Option<String>, bool, bool, Option<bool>, Option<bool>) {
        (
            page.attribute(DIR_ATTR),
            page.has_class(RTL_MARKER_CLASS),
            page.has_class(LTR_MARKER_CLASS),
            page.stylesheet_disabled("rtl-styles"),
            page.stylesheet_disabled("ltr-styles"),
        )
    }

    #[test]
    fn apply_rtl_sets_attribute_markers_and_stylesheets() {
        let engine = LayoutEngine::default();
        let mut page = page_with_stylesheets();

        engine.apply_rtl(&mut page);

        assert_eq!(page.attribute(DIR_ATTR).as_deref(), Some("rtl"));
        assert!(page.has_class(RTL_MARKER_CLASS));
        assert!(!page.has_class(LTR_MARKER_CLASS));
        assert_eq!(page.stylesheet_disabled("rtl-styles"), Some(false));
        assert_eq!(page.stylesheet_disabled("ltr-styles"), Some(true));
    }

    #[test]
    fn apply_ltr_sets_attribute_markers_and_stylesheets() {
        let engine = LayoutEngine::default();
        let mut page = page_with_stylesheets();

        engine.apply_ltr(&mut page);

        assert_eq!(page.attribute(DIR_ATTR).as_deref(), Some("ltr"));
        assert!(page.has_class(LTR_MARKER_CLASS));
        assert!(!page.has_class(RTL_MARKER_CLASS));
        assert_eq!(page.stylesheet_disabled("ltr-styles"), Some(false));
        assert_eq!(page.stylesheet_disabled("rtl-styles"), Some(true));
    }

    #[test]
    fn apply_rtl_twice_is_idempotent() {
        let engine = LayoutEngine::default();
        let mut page = page_with_stylesheets();

        engine.apply_rtl(&mut page);
        let once = snapshot(&page);
        engine.apply_rtl(&mut page);
        let twice = snapshot(&page);

        assert_eq!(once, twice);
    }

    #[test]
    fn markers_are_mutually_exclusive_after_any_application() {
        let engine = LayoutEngine::default();
        let mut page = page_with_stylesheets();

        for _ in 0..2 {
            engine.apply_rtl(&mut page);
            assert!(page.has_class(RTL_MARKER_CLASS) != page.has_class(LTR_MARKER_CLASS));
            engine.apply_ltr(&mut page);
            assert!(page.has_class(RTL_MARKER_CLASS) != page.has_class(LTR_MARKER_CLASS));
        }
    }

    #[test]
    fn missing_stylesheets_are_skipped_silently() {
        let engine = LayoutEngine::default();
        let mut page = MemoryPage::new();

        engine.apply_rtl(&mut page);

        assert_eq!(page.attribute(DIR_ATTR).as_deref(), Some("rtl"));
        assert!(page.has_class(RTL_MARKER_CLASS));
        assert_eq!(page.stylesheet_disabled("rtl-styles"), None);
    }

    #[test]
    fn custom_stylesheet_identifiers_are_honored() {
        let engine = LayoutEngine::new(StylesheetIds {
            rtl: "mirror".to_string(),
            ltr: "plain".to_string(),
        });
        let mut page = MemoryPage::new();
        page.register_stylesheet("mirror");
        page.register_stylesheet("plain");

        engine.apply_rtl(&mut page);

        assert_eq!(page.stylesheet_disabled("mirror"), Some(false));
        assert_eq!(page.stylesheet_disabled("plain"), Some(true));
    }

    #[test]
    fn extra_rtl_codes_extend_classification() {
        let engine =
            LayoutEngine::default().with_extra_rtl_codes(&["Syr".to_string(), String::new()]);

        assert_eq!(engine.classify(Some("syr")), Direction::Rtl);
        assert_eq!(engine.classify(Some("syr-SY")), Direction::Rtl);
        assert_eq!(engine.classify(Some("ar")), Direction::Rtl);
        assert_eq!(engine.classify(Some("en")), Direction::Ltr);
        assert_eq!(engine.classify(Some("")), Direction::Ltr);
        assert_eq!(engine.classify(None), Direction::Ltr);
    }

    #[test]
    fn detect_and_apply_defaults_to_english() {
        let engine = LayoutEngine::default();
        let mut page = MemoryPage::new();

        let decision = engine.detect_and_apply(&mut page);

        assert_eq!(decision, Direction::Ltr);
        assert_eq!(page.attribute(DIR_ATTR).as_deref(), Some("ltr"));
    }

    #[test]
    fn detect_and_apply_reads_the_declaration() {
        let engine = LayoutEngine::default();
        let mut page = MemoryPage::with_language("fa-IR");

        let decision = engine.detect_and_apply(&mut page);

        assert_eq!(decision, Direction::Rtl);
        assert_eq!(page.attribute(DIR_ATTR).as_deref(), Some("rtl"));
    }

    #[test]
    fn change_language_writes_only_the_declaration() {
        let mut page = page_with_stylesheets();

        change_language(&mut page, "ar");

        assert_eq!(page.attribute(LANG_ATTR).as_deref(), Some("ar"));
        assert_eq!(page.attribute(DIR_ATTR), None);
        assert!(!page.has_class(RTL_MARKER_CLASS));
        assert_eq!(page.stylesheet_disabled("rtl-styles"), Some(false));
    }
}
