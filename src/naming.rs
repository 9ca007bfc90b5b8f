//! Centralized filename parsing for the NN-name ordering convention.
//!
//! Album folders and image files alike may carry an optional numeric
//! ordering prefix (`NN-` or `NN_`) in front of the actual name. This module
//! provides a single parsing function so descriptions, titles and slugs all
//! agree on where the prefix ends.
//!
//! ## Display Titles
//!
//! Dashes and underscores in the name portion are converted to spaces for
//! display. This applies uniformly to folders and image stems:
//! - `020-My-Best-Photos/` → "My Best Photos" (album title)
//! - `01-sunset_over_bay` → "sunset over bay" (image stem)
//! - `holiday_snaps` → "holiday snaps" (no prefix)

/// Result of parsing an ordered entry name like `020-My-Best-Photos`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `20` from `020-My-Best-Photos`)
    pub number: Option<u32>,
    /// Raw name part after `NN-`/`NN_`, separators preserved. Empty if
    /// number-only. For unnumbered entries, this is the full input.
    pub name: String,
    /// Display title: name with dashes and underscores converted to spaces.
    pub display_title: String,
}

/// Parse an entry name following the `NN-name` / `NN_name` convention.
///
/// Handles these patterns:
/// - `"020-My-Best-Photos"` → number=Some(20), name="My-Best-Photos", display_title="My Best Photos"
/// - `"01-sunset_over_bay"` → number=Some(1), name="sunset_over_bay", display_title="sunset over bay"
/// - `"001"` → number=Some(1), name="", display_title=""
/// - `"001-"` → number=Some(1), name="", display_title=""
/// - `"Museum"` → number=None, name="Museum", display_title="Museum"
/// - `"wip_drafts"` → number=None, name="wip_drafts", display_title="wip drafts"
pub fn parse_entry_name(name: &str) -> ParsedName {
    // Try splitting on the first separator, whichever kind comes first
    if let Some(sep_pos) = name.find(['-', '_']) {
        let prefix = &name[..sep_pos];
        if let Ok(num) = prefix.parse::<u32>() {
            let raw = &name[sep_pos + 1..];
            return ParsedName {
                number: Some(num),
                name: raw.to_string(),
                display_title: to_display(raw),
            };
        }
    }
    // Check if the entire string is a pure number (no separator)
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: String::new(),
            display_title: String::new(),
        };
    }
    // No number prefix
    ParsedName {
        number: None,
        name: name.to_string(),
        display_title: to_display(name),
    }
}

fn to_display(raw: &str) -> String {
    raw.replace(['-', '_'], " ")
}

const MAX_SLUG_LEN: usize = 80;

/// Sanitize a name for use as a URL path segment.
///
/// - Replaces runs of non-alphanumeric characters with a single dash
/// - Strips leading and trailing dashes
/// - Truncates to `MAX_SLUG_LEN` characters (breaks at the last dash
///   before the limit when there is one)
pub fn sanitize_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.len() <= MAX_SLUG_LEN {
        return trimmed.to_string();
    }
    let cut = &trimmed[..MAX_SLUG_LEN];
    match cut.rfind('-') {
        Some(pos) => cut[..pos].to_string(),
        None => cut.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_with_multi_word_name() {
        let p = parse_entry_name("020-My-Best-Photos");
        assert_eq!(p.number, Some(20));
        assert_eq!(p.name, "My-Best-Photos");
        assert_eq!(p.display_title, "My Best Photos");
    }

    #[test]
    fn numbered_with_underscore_separator() {
        let p = parse_entry_name("01_city_lights");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.name, "city_lights");
        assert_eq!(p.display_title, "city lights");
    }

    #[test]
    fn mixed_separators_in_name() {
        let p = parse_entry_name("01-sunset_over_bay");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.name, "sunset_over_bay");
        assert_eq!(p.display_title, "sunset over bay");
    }

    #[test]
    fn number_only_no_separator() {
        let p = parse_entry_name("001");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.name, "");
        assert_eq!(p.display_title, "");
    }

    #[test]
    fn number_with_trailing_dash() {
        let p = parse_entry_name("001-");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.name, "");
        assert_eq!(p.display_title, "");
    }

    #[test]
    fn unnumbered_single_word() {
        let p = parse_entry_name("Museum");
        assert_eq!(p.number, None);
        assert_eq!(p.name, "Museum");
        assert_eq!(p.display_title, "Museum");
    }

    #[test]
    fn unnumbered_with_underscores() {
        let p = parse_entry_name("wip_drafts");
        assert_eq!(p.number, None);
        assert_eq!(p.name, "wip_drafts");
        assert_eq!(p.display_title, "wip drafts");
    }

    #[test]
    fn date_like_prefix_consumes_first_segment_only() {
        let p = parse_entry_name("2024_berlin_trip");
        assert_eq!(p.number, Some(2024));
        assert_eq!(p.name, "berlin_trip");
        assert_eq!(p.display_title, "berlin trip");
    }

    #[test]
    fn non_numeric_prefix_keeps_whole_name() {
        let p = parse_entry_name("iso-3200-tests");
        assert_eq!(p.number, None);
        assert_eq!(p.name, "iso-3200-tests");
        assert_eq!(p.display_title, "iso 3200 tests");
    }

    #[test]
    fn large_number_prefix() {
        let p = parse_entry_name("999-Last");
        assert_eq!(p.number, Some(999));
        assert_eq!(p.display_title, "Last");
    }

    #[test]
    fn zero_prefix() {
        let p = parse_entry_name("000-First");
        assert_eq!(p.number, Some(0));
        assert_eq!(p.display_title, "First");
    }

    // =========================================================================
    // sanitize_slug tests
    // =========================================================================

    #[test]
    fn slug_alphanumeric_passthrough() {
        assert_eq!(sanitize_slug("My-Best-Photos"), "My-Best-Photos");
        assert_eq!(sanitize_slug("Photos2024"), "Photos2024");
    }

    #[test]
    fn slug_replaces_spaces_and_special_chars() {
        assert_eq!(sanitize_slug("city_lights"), "city-lights");
        assert_eq!(sanitize_slug("sea & sky"), "sea-sky");
    }

    #[test]
    fn slug_collapses_and_trims_dashes() {
        assert_eq!(sanitize_slug("a---b"), "a-b");
        assert_eq!(sanitize_slug("--hello--"), "hello");
        assert_eq!(sanitize_slug("!!!"), "");
    }

    #[test]
    fn slug_drops_non_ascii() {
        assert_eq!(sanitize_slug("café"), "caf");
        assert_eq!(sanitize_slug("München"), "M-nchen");
    }

    #[test]
    fn slug_truncates_at_word_boundary() {
        let name = "a-".repeat(60) + "end";
        let slug = sanitize_slug(&name);
        assert!(slug.len() <= 80);
        assert!(!slug.ends_with('-'));
    }
}
