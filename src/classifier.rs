//! Heuristic widget classifier: tag names to Qt widget archetypes

/// How a rule's pattern is matched against the lowercased tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    Exact,
    Suffix,
    Contains,
}

/// One (matcher, archetype) rule
struct Rule {
    kind: MatchKind,
    pattern: &'static str,
    archetype: &'static str,
}

const fn rule(kind: MatchKind, pattern: &'static str, archetype: &'static str) -> Rule {
    Rule {
        kind,
        pattern,
        archetype,
    }
}

/// Ordered rule table, evaluated top to bottom with first match winning.
/// Rule domains overlap (a tag ending in "field" also contains "field"),
/// so the order is load-bearing: exact rules, then suffix, then substring.
const RULES: &[Rule] = &[
    rule(MatchKind::Exact, "button", "PushButtonQT"),
    rule(MatchKind::Exact, "container", "ScrollViewQT"),
    rule(MatchKind::Exact, "form", "ModuleQT"),
    rule(MatchKind::Exact, "textfield", "TextFieldQT"),
    rule(MatchKind::Suffix, "button", "PushButtonQT"),
    rule(MatchKind::Suffix, "checkbox", "CheckBoxQT"),
    rule(MatchKind::Suffix, "radiobutton", "RadioButtonQT"),
    rule(MatchKind::Suffix, "combobox", "ComboBoxQT"),
    rule(MatchKind::Suffix, "slider", "SliderQT"),
    rule(MatchKind::Suffix, "label", "LabelQT"),
    rule(MatchKind::Suffix, "view", "ScrollViewQT"),
    rule(MatchKind::Suffix, "field", "TextFieldQT"),
    rule(MatchKind::Contains, "button", "PushButtonQT"),
    rule(MatchKind::Contains, "field", "TextFieldQT"),
    rule(MatchKind::Contains, "text", "TextFieldQT"),
    rule(MatchKind::Contains, "container", "ScrollViewQT"),
    rule(MatchKind::Contains, "panel", "ScrollViewQT"),
    rule(MatchKind::Contains, "form", "ModuleQT"),
];

/// Archetype when no rule matches
const FALLBACK: &str = "QWidget";

/// Maps tag names to Qt widget archetypes
///
/// Total and case-insensitive: every tag resolves to some archetype,
/// unknown tags fall back to the generic [`FALLBACK`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetClassifier;

impl WidgetClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify a tag name into its widget archetype
    pub fn classify(&self, tag: &str) -> &'static str {
        let tag = tag.to_lowercase();
        for rule in RULES {
            let hit = match rule.kind {
                MatchKind::Exact => tag == rule.pattern,
                MatchKind::Suffix => tag.ends_with(rule.pattern),
                MatchKind::Contains => tag.contains(rule.pattern),
            };
            if hit {
                return rule.archetype;
            }
        }
        FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins_over_substring() {
        // "button" also satisfies the contains rule; the exact rule must fire.
        assert_eq!(WidgetClassifier::new().classify("button"), "PushButtonQT");
        assert_eq!(WidgetClassifier::new().classify("textfield"), "TextFieldQT");
    }

    #[test]
    fn test_suffix_rules() {
        let classifier = WidgetClassifier::new();
        assert_eq!(classifier.classify("okbutton"), "PushButtonQT");
        assert_eq!(classifier.classify("termscheckbox"), "CheckBoxQT");
        assert_eq!(classifier.classify("genderradiobutton"), "RadioButtonQT");
        assert_eq!(classifier.classify("countrycombobox"), "ComboBoxQT");
        assert_eq!(classifier.classify("volumeslider"), "SliderQT");
        assert_eq!(classifier.classify("statuslabel"), "LabelQT");
        assert_eq!(classifier.classify("listview"), "ScrollViewQT");
        assert_eq!(classifier.classify("searchfield"), "TextFieldQT");
    }

    #[test]
    fn test_suffix_beats_contains() {
        // Ends with "view" (ScrollViewQT) but also contains "text";
        // the suffix tier is consulted first.
        assert_eq!(WidgetClassifier::new().classify("textview"), "ScrollViewQT");
    }

    #[test]
    fn test_contains_rules() {
        let classifier = WidgetClassifier::new();
        assert_eq!(classifier.classify("textarea"), "TextFieldQT");
        assert_eq!(classifier.classify("sidepanelwrap"), "ScrollViewQT");
        assert_eq!(classifier.classify("formgroup"), "ModuleQT");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(WidgetClassifier::new().classify("BUTTON"), "PushButtonQT");
        assert_eq!(WidgetClassifier::new().classify("MySlider"), "SliderQT");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(WidgetClassifier::new().classify("div"), "QWidget");
        assert_eq!(WidgetClassifier::new().classify(""), "QWidget");
        assert_eq!(WidgetClassifier::new().classify("*"), "QWidget");
    }
}
