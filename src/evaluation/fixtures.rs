use crate::knowledge::Category;

use super::TestCase;

fn case(id: &str, query: &str, expected_category: Category, expected: &[&str]) -> TestCase {
    TestCase {
        id: id.to_string(),
        query: query.to_string(),
        expected_category,
        expected_top_matches: expected.iter().map(|s| s.to_string()).collect(),
    }
}

/// Labeled queries the whole pipeline is scored against.
pub fn builtin_test_cases() -> Vec<TestCase> {
    use Category::*;

    vec![
        case("tc-01", "P0420", ObdCode, &["P0420"]),
        case(
            "tc-02",
            "my car is overheating on the highway",
            DiagnosticPattern,
            &["dp-overheating"],
        ),
        case(
            "tc-03",
            "how often should I change engine oil",
            MaintenanceGuide,
            &["mg-oil-change"],
        ),
        case("tc-04", "brakes squealing when I stop", DiagnosticPattern, &["dp-brake-noise"]),
        case(
            "tc-05",
            "car won't start, just clicking",
            DiagnosticPattern,
            &["dp-no-start", "dp-battery-drain"],
        ),
        case("tc-06", "what does an oxygen sensor do", ComponentInfo, &["ci-oxygen-sensor"]),
        case(
            "tc-07",
            "is it safe to drive with the check engine light on",
            Faq,
            &["faq-check-engine-light"],
        ),
        case(
            "tc-08",
            "owners report transmission slipping",
            VehicleComplaint,
            &["vc-transmission-slipping"],
        ),
        case(
            "tc-09",
            "when should I replace the timing belt",
            MaintenanceGuide,
            &["mg-timing-belt"],
        ),
        case(
            "tc-10",
            "P0300 random misfire and rough idle",
            ObdCode,
            &["P0300", "obd-misfire-codes", "dp-rough-idle"],
        ),
        case(
            "tc-11",
            "white smoke coming out of the exhaust",
            DiagnosticPattern,
            &["dp-white-smoke"],
        ),
        case(
            "tc-12",
            "do i need premium fuel in my car",
            Faq,
            &["faq-premium-fuel"],
        ),
    ]
}
