// SPDX-License-Identifier: MPL-2.0
//! Language-tag direction classification.
//!
//! Classification is a pure membership test: lowercase the tag, strip
//! everything after the first hyphen (region and script subtags carry no
//! directional information), and look the primary subtag up in a fixed set
//! of right-to-left language codes. Absent, empty, and unrecognized tags
//! all classify as left-to-right.

use std::fmt;

/// Primary subtags of languages written right-to-left.
///
/// Fixed at startup. The configuration file may extend the set with
/// additional primary subtags (see [`crate::layout::LayoutEngine`]); the
/// built-in entries are never removed.
pub const RTL_PRIMARY_SUBTAGS: [&str; 14] = [
    "ar", "he", "fa", "ur", "yi", "ji", "iw", "ps", "sd", "ug", "ku", "arc", "ckb", "dv",
];

/// Page-level text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left-to-right (e.g. English, French).
    #[default]
    Ltr,
    /// Right-to-left (e.g. Arabic, Hebrew).
    Rtl,
}

impl Direction {
    /// Value written to the page's direction attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Returns whether this is the right-to-left direction.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// Classifies a language declaration against the built-in RTL set.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        if is_rtl(tag) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// Returns the lowercased primary subtag of a language tag.
///
/// Everything after the first hyphen is ignored, so `"ar-SA"` and `"AR"`
/// both normalize to `"ar"`. Malformed input is passed through lowercased;
/// unrecognized results simply fail the membership test.
#[must_use]
pub fn primary_subtag(tag: &str) -> String {
    tag.split('-').next().unwrap_or(tag).to_lowercase()
}

/// Tests whether a language tag declares a right-to-left language.
///
/// Total over degenerate input: `None`, the empty string, and codes outside
/// the RTL set all return `false` (the page defaults to LTR).
#[must_use]
pub fn is_rtl(tag: Option<&str>) -> bool {
    match tag {
        Some(tag) if !tag.is_empty() => {
            let primary = primary_subtag(tag);
            RTL_PRIMARY_SUBTAGS.contains(&primary.as_str())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rtl_code_classifies_rtl() {
        for code in RTL_PRIMARY_SUBTAGS {
            assert!(is_rtl(Some(code)), "{code} should be RTL");
        }
    }

    #[test]
    fn rtl_codes_match_case_insensitively() {
        assert!(is_rtl(Some("AR")));
        assert!(is_rtl(Some("He")));
        assert!(is_rtl(Some("FA")));
    }

    #[test]
    fn region_subtags_are_stripped() {
        assert!(is_rtl(Some("ar-SA")));
        assert!(is_rtl(Some("He-IL")));
        assert!(is_rtl(Some("ur-PK")));
        assert!(is_rtl(Some("CKB-IQ")));
    }

    #[test]
    fn ltr_languages_classify_ltr() {
        assert!(!is_rtl(Some("en")));
        assert!(!is_rtl(Some("en-US")));
        assert!(!is_rtl(Some("fr")));
        assert!(!is_rtl(Some("ja")));
    }

    #[test]
    fn absent_and_empty_tags_default_to_ltr() {
        assert!(!is_rtl(None));
        assert!(!is_rtl(Some("")));
    }

    #[test]
    fn malformed_tags_fall_through_to_ltr() {
        assert!(!is_rtl(Some("-")));
        assert!(!is_rtl(Some("ar?!x")));
        assert!(!is_rtl(Some("zzz-zzz")));
    }

    #[test]
    fn region_variant_of_malformed_rtl_tag_still_matches() {
        // Only the first hyphen splits; trailing segments are irrelevant.
        assert!(is_rtl(Some("ar-SA-extra-junk")));
    }

    #[test]
    fn primary_subtag_lowercases_and_strips() {
        assert_eq!(primary_subtag("AR-sa"), "ar");
        assert_eq!(primary_subtag("he"), "he");
        assert_eq!(primary_subtag(""), "");
    }

    #[test]
    fn direction_from_tag_matches_classifier() {
        assert_eq!(Direction::from_tag(Some("ar")), Direction::Rtl);
        assert_eq!(Direction::from_tag(Some("en")), Direction::Ltr);
        assert_eq!(Direction::from_tag(None), Direction::Ltr);
    }

    #[test]
    fn direction_attr_values() {
        assert_eq!(Direction::Rtl.as_attr(), "rtl");
        assert_eq!(Direction::Ltr.as_attr(), "ltr");
        assert_eq!(Direction::Rtl.to_string(), "rtl");
        assert!(Direction::Rtl.is_rtl());
        assert!(!Direction::Ltr.is_rtl());
    }

    #[test]
    fn default_direction_is_ltr() {
        assert_eq!(Direction::default(), Direction::Ltr);
    }
}
