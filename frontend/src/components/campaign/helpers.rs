//! Formatting helpers for the campaign dashboard view.

use common::catalog::FilterCategory;
use common::model::filter::{FilterState, TagKind};
use num_format::{Locale, ToFormattedString};

/// Formats a count with dot digit grouping (`12.500`).
pub fn format_count(value: u32) -> String {
    // `de` groups every three digits with a dot, four-digit numbers included
    value.to_formatted_string(&Locale::de)
}

/// Percentage with one decimal and a comma separator (`10,5 %`).
pub fn format_percent(value: f64) -> String {
    format!("{:.1} %", value).replace('.', ",")
}

/// Comma-separated display of the values selected under `category`.
pub fn summarize(filters: &FilterState, category: FilterCategory) -> String {
    filters
        .values(category)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value of the `<option>` for a tag kind, and back.
pub fn tag_kind_key(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Plain => "plain",
        TagKind::Company => "company",
        TagKind::Title => "title",
    }
}

pub fn tag_kind_from_key(key: &str) -> TagKind {
    match key {
        "company" => TagKind::Company,
        "title" => TagKind::Title,
        _ => TagKind::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_use_spanish_grouping() {
        assert_eq!(format_count(2500), "2.500");
        assert_eq!(format_count(63), "63");
    }

    #[test]
    fn percentages_use_decimal_comma() {
        assert_eq!(format_percent(10.0), "10,0 %");
        assert_eq!(format_percent(6.5), "6,5 %");
    }

    #[test]
    fn tag_kind_keys_round_trip() {
        for kind in [TagKind::Plain, TagKind::Company, TagKind::Title] {
            assert_eq!(tag_kind_from_key(tag_kind_key(kind)), kind);
        }
        assert_eq!(tag_kind_from_key("??"), TagKind::Plain);
    }
}
