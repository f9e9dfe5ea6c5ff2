use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::class_names::{merge_classes, ClassFragment};

const SPINNER_BASE: &str =
    "inline-block animate-spin rounded-full border-2 border-primary border-t-transparent";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    /// Dimension utilities for this size.
    pub const fn dimensions(self) -> &'static str {
        match self {
            SpinnerSize::Sm => "h-4 w-4",
            SpinnerSize::Md => "h-8 w-8",
            SpinnerSize::Lg => "h-12 w-12",
        }
    }
}

pub fn spinner_class(size: SpinnerSize, class: &str) -> String {
    merge_classes(&[
        ClassFragment::Always(SPINNER_BASE),
        ClassFragment::when(SpinnerSize::Sm.dimensions(), size == SpinnerSize::Sm),
        ClassFragment::when(SpinnerSize::Md.dimensions(), size == SpinnerSize::Md),
        ClassFragment::when(SpinnerSize::Lg.dimensions(), size == SpinnerSize::Lg),
        ClassFragment::extra(class),
    ])
}

#[component]
pub fn LoadingIndicator(
    #[prop(optional)] size: SpinnerSize,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = spinner_class(size, &class);

    view! { <div data-name="LoadingIndicator" class=merged_class role="status" aria-label="Loading" /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn tokens(classes: &str) -> Vec<&str> {
        classes.split_whitespace().collect()
    }

    fn has_dimensions(classes: &str, size: SpinnerSize) -> bool {
        let present = tokens(classes);
        size.dimensions()
            .split_whitespace()
            .all(|t| present.contains(&t))
    }

    #[test]
    fn test_each_size_renders_exactly_one_dimension_set() {
        for size in SpinnerSize::iter() {
            let classes = spinner_class(size, "");
            let matching: Vec<SpinnerSize> = SpinnerSize::iter()
                .filter(|s| has_dimensions(&classes, *s))
                .collect();
            assert_eq!(matching, vec![size], "classes: {classes}");
        }
    }

    #[test]
    fn test_default_size_is_medium() {
        assert_eq!(SpinnerSize::default(), SpinnerSize::Md);
        let classes = spinner_class(SpinnerSize::default(), "");
        assert!(has_dimensions(&classes, SpinnerSize::Md));
        assert!(!has_dimensions(&classes, SpinnerSize::Sm));
        assert!(!has_dimensions(&classes, SpinnerSize::Lg));
    }

    #[test]
    fn test_small_spinner_from_str() {
        let size = SpinnerSize::from_str("sm").expect("sm should parse");
        let classes = spinner_class(size, "");
        assert!(has_dimensions(&classes, SpinnerSize::Sm));
        assert!(!has_dimensions(&classes, SpinnerSize::Md));
        assert!(!has_dimensions(&classes, SpinnerSize::Lg));
        assert!(tokens(&classes).contains(&"animate-spin"));
    }

    #[test]
    fn test_unknown_size_is_rejected() {
        assert!(SpinnerSize::from_str("xl").is_err());
        assert!(SpinnerSize::from_str("").is_err());
    }

    #[test]
    fn test_size_text_forms_agree() {
        for size in SpinnerSize::iter() {
            let text = size.to_string();
            let name: &'static str = size.into();
            assert_eq!(text, name);
            let json = serde_json::to_string(&size).expect("should serialize");
            assert_eq!(json, format!("\"{text}\""));
            let back: SpinnerSize = serde_json::from_str(&json).expect("should deserialize");
            assert_eq!(back, size);
        }
        assert!(serde_json::from_str::<SpinnerSize>("\"huge\"").is_err());
    }

    #[test]
    fn test_extra_class_goes_last() {
        let classes = spinner_class(SpinnerSize::Lg, "text-muted-foreground mx-auto");
        assert!(classes.ends_with("text-muted-foreground mx-auto"));
        assert!(has_dimensions(&classes, SpinnerSize::Lg));
    }

    #[test]
    fn test_colour_override_replaces_ring_colour() {
        let classes = spinner_class(SpinnerSize::Md, "border-blue-500");
        let present = tokens(&classes);
        assert!(present.contains(&"border-blue-500"));
        assert!(!present.contains(&"border-primary"));
        assert!(classes.ends_with("border-blue-500"));
    }

    #[test]
    fn test_no_trailing_whitespace_without_extra() {
        let classes = spinner_class(SpinnerSize::Sm, "");
        assert_eq!(classes, classes.trim());
        assert!(!classes.contains("  "));
    }
}
