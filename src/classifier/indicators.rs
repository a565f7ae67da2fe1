use std::sync::LazyLock;

use regex::Regex;

use crate::knowledge::Category;

/// Hand-picked lexical cues per category, matched as plain substrings of the
/// lowercased query.
pub const CATEGORY_INDICATORS: &[(Category, &[&str])] = &[
    (
        Category::DiagnosticPattern,
        &[
            "overheat", "won't", "wont", "noise", "leak", "smell", "smoke", "shak", "vibrat",
            "stall", "misfir", "rough", "squeal", "grind", "clunk", "dying", "symptom",
        ],
    ),
    (
        Category::ObdCode,
        &["code", "obd", "dtc", "scanner", "scan tool", "fault code"],
    ),
    (
        Category::MaintenanceGuide,
        &[
            "how often", "when should", "when to", "maintenance", "schedule", "interval",
            "replace", "change", "service", "flush", "rotate",
        ],
    ),
    (
        Category::ComponentInfo,
        &[
            "what does", "how does", "what is a", "function", "located", "purpose", "component",
            "sensor", "works",
        ],
    ),
    (
        Category::Faq,
        &[
            "should i", "can i", "is it safe", "is it ok", "do i need", "worth it", "why does",
            "how much", "difference between", "mean",
        ],
    ),
    (
        Category::VehicleComplaint,
        &[
            "complaint", "recall", "owners", "report", "common problem", "known issue",
            "lawsuit", "warranty", "keeps happening",
        ],
    ),
];

static OBD_CODE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)[pbcu][0-9]{4}").ok());

/// First OBD-II code shaped substring, e.g. `p0420` in "got p0420 again".
pub fn first_obd_code(text: &str) -> Option<&str> {
    OBD_CODE_PATTERN
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str())
}

/// Every OBD-II code shaped substring, in order of appearance.
pub fn obd_codes(text: &str) -> Vec<&str> {
    OBD_CODE_PATTERN
        .as_ref()
        .map(|re| re.find_iter(text).map(|m| m.as_str()).collect())
        .unwrap_or_default()
}

pub fn indicators_for(category: Category) -> &'static [&'static str] {
    CATEGORY_INDICATORS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

/// How many of `category`'s indicators occur in the already lowercased text.
pub fn indicator_hits(category: Category, lowered: &str) -> usize {
    indicators_for(category)
        .iter()
        .filter(|cue| lowered.contains(*cue))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_indicators() {
        for category in Category::ALL {
            assert!(!indicators_for(category).is_empty());
        }
    }

    #[test]
    fn counts_substring_hits() {
        assert_eq!(indicator_hits(Category::DiagnosticPattern, "engine is overheating"), 1);
        assert_eq!(
            indicator_hits(Category::MaintenanceGuide, "how often should i change engine oil"),
            2
        );
        assert_eq!(indicator_hits(Category::Faq, "how often should i change engine oil"), 1);
        assert_eq!(indicator_hits(Category::VehicleComplaint, "my car is overheating"), 0);
    }

    #[test]
    fn code_pattern_is_case_insensitive() {
        assert_eq!(first_obd_code("p0420"), Some("p0420"));
        assert_eq!(first_obd_code("got code U0100 then P0300"), Some("U0100"));
        assert_eq!(obd_codes("got code U0100 then P0300"), vec!["U0100", "P0300"]);
        assert_eq!(first_obd_code("p42"), None);
    }

    #[test]
    fn code_digits_must_be_ascii() {
        // Arabic-Indic and Devanagari digits are not trouble codes
        let arabic_indic = "P\u{0660}\u{0664}\u{0662}\u{0660}";
        let devanagari = "b\u{0967}\u{0968}\u{0969}\u{096A}";
        assert_eq!(first_obd_code(&format!("{arabic_indic} or P0420")), Some("P0420"));
        assert!(obd_codes(&format!("{arabic_indic} {devanagari}")).is_empty());
    }
}
